//! Configuration management for the logbook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags can override either value.
//!
//! # Environment Variables
//!
//! - `LOGBOOK_DIR`: Path to the log directory (defaults to `${HOME}/logbook`)
//! - `LOGBOOK_NAME`: Display name used in the heading of each entry
//! - `USER`: Fallback display name if `LOGBOOK_NAME` is not set
//! - `HOME`: Used for expanding the default log directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the logbook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use logbook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     name: "Andrew Allen".to_string(),
///     log_dir: PathBuf::from("/path/to/logbook"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name written in the heading of each new entry.
    pub name: String,

    /// Directory holding the `YYYY-MM-DD.md` entries.
    pub log_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The log directory is expanded with `shellexpand`, so `~` and
    /// environment variable references are allowed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log directory path cannot be expanded
    /// or expands to an empty path.
    pub fn load() -> AppResult<Self> {
        let name = env::var(constants::ENV_VAR_LOGBOOK_NAME)
            .or_else(|_| env::var(constants::ENV_VAR_USER))
            .unwrap_or_else(|_| constants::DEFAULT_DISPLAY_NAME.to_string());

        let log_dir_str = env::var(constants::ENV_VAR_LOGBOOK_DIR)
            .unwrap_or_else(|_| constants::DEFAULT_LOG_DIR.to_string());

        let expanded_path = shellexpand::full(&log_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let log_dir = PathBuf::from(expanded_path.into_owned());
        if log_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Log directory path is empty".to_string()));
        }

        Ok(Config { name, log_dir })
    }

    /// Applies command-line overrides.
    ///
    /// A relative `log_dir` is resolved against the current directory.
    pub fn with_overrides(
        mut self,
        name: Option<String>,
        log_dir: Option<PathBuf>,
    ) -> AppResult<Self> {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(log_dir) = log_dir {
            self.log_dir = if log_dir.is_absolute() {
                log_dir
            } else {
                env::current_dir()?.join(log_dir)
            };
        }
        Ok(self)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Display name is empty" if the name is blank
    /// - "Log directory path is empty" if the directory path is empty
    /// - "Log directory must be an absolute path" if the path is relative
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Config("Display name is empty".to_string()));
        }

        if self.log_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Log directory path is empty".to_string()));
        }

        if !self.log_dir.is_absolute() {
            return Err(AppError::Config(
                "Log directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
