//! Error handling utilities for the logbook application.
//!
//! This module provides the central error type `AppError` which represents all
//! fatal error conditions of a run, the convenience alias `AppResult`, and the
//! two recoverable error kinds produced by the journal engine: `DateError` and
//! `ResolveError`. Recoverable errors never abort a scan; they are recorded in
//! the journal index and surface in the rendered entry.

use crate::constants;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents a string that does not denote a real calendar date.
///
/// # Examples
///
/// ```
/// use logbook::errors::DateError;
///
/// let error = DateError::Nonexistent {
///     input: "2015-02-29".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "\"2015-02-29\" is not a date on the calendar"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not shaped like `YYYY-MM-DD`.
    #[error("{input:?} is not in YYYY-MM-DD form")]
    Malformed {
        /// The rejected input
        input: String,
    },

    /// The input is well formed but names a day that does not exist,
    /// such as February 29 of a common year.
    #[error("{input:?} is not a date on the calendar")]
    Nonexistent {
        /// The rejected input
        input: String,
    },
}

/// Represents a relative expression that could not be turned into a date.
///
/// The anchor date is used as the fallback target whenever one of these is
/// produced, see [`crate::journal_core::resolver::resolve_or_anchor`].
///
/// # Examples
///
/// ```
/// use logbook::errors::ResolveError;
///
/// let error = ResolveError::NoMatchingPattern {
///     expression: "82872--1".to_string(),
/// };
/// assert!(format!("{}", error).contains("82872--1"));
/// assert_eq!(error.expression(), "82872--1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No pattern in the resolver table matched the expression.
    #[error("no pattern matches expression {expression:?}")]
    NoMatchingPattern {
        /// The expression as written in the journal
        expression: String,
    },

    /// A pattern matched but the resulting date is outside the calendar range.
    #[error("expression {expression:?} resolves to a date out of range")]
    OutOfRange {
        /// The expression as written in the journal
        expression: String,
    },
}

impl ResolveError {
    /// The expression that failed to resolve.
    pub fn expression(&self) -> &str {
        match self {
            ResolveError::NoMatchingPattern { expression }
            | ResolveError::OutOfRange { expression } => expression,
        }
    }
}

/// Represents all fatal errors that can occur in the logbook application.
///
/// This enum is the central error type used at the application boundary. Every
/// variant maps to a distinct process exit code through [`AppError::exit_code`].
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use logbook::errors::AppError;
///
/// let error = AppError::Config("Log directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Log directory path is empty");
/// assert_eq!(error.exit_code(), 3);
/// ```
///
/// Converting from an IO error:
/// ```
/// use logbook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The `--date-override` flag does not name a real date.
    #[error("Invalid --date-override provided: {0}")]
    InvalidDateOverride(#[source] DateError),

    /// Today's entry is already on disk and will not be overwritten.
    #[error("A file already exists by the name {}", path.display())]
    EntryExists {
        /// Path of the existing entry
        path: PathBuf,
    },

    /// The log root could not be traversed.
    #[error("Failed to walk log directory {}: {source}", path.display())]
    Walk {
        /// Root of the walk
        path: PathBuf,
        /// The underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// Any other filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The journal index could not be serialized.
    #[error("Failed to serialize journal index: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// The process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidDateOverride(_) => constants::EXIT_INVALID_DATE,
            AppError::Config(_) => constants::EXIT_CONFIG,
            AppError::EntryExists { .. } => constants::EXIT_ENTRY_EXISTS,
            AppError::Walk { .. } => constants::EXIT_WALK,
            AppError::Io(_) => constants::EXIT_IO,
            AppError::Serialize(_) => constants::EXIT_SERIALIZE,
        }
    }
}

/// A type alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
