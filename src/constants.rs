//! Constants used throughout the application.
//!
//! This module contains all constants used in the logbook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "logbook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A file-per-day journal that carries forward reminders from past entries";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the log root directory.
pub const ENV_VAR_LOGBOOK_DIR: &str = "LOGBOOK_DIR";
/// Environment variable for specifying the display name used in headings.
pub const ENV_VAR_LOGBOOK_NAME: &str = "LOGBOOK_NAME";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Standard environment variable for the login name.
pub const ENV_VAR_USER: &str = "USER";
/// Default log root, expanded with `shellexpand`.
pub const DEFAULT_LOG_DIR: &str = "${HOME}/logbook";
/// Display name used when neither `LOGBOOK_NAME` nor `USER` is set.
pub const DEFAULT_DISPLAY_NAME: &str = "Logbook";

// File System Parameters
/// File extension for journal entries, without the leading dot.
pub const ENTRY_FILE_EXTENSION: &str = "md";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Number of days in a week, used by the `N weeks` expression.
pub const DAYS_PER_WEEK: i64 = 7;
/// Number of months in a year, used by the `N years` expression.
pub const MONTHS_PER_YEAR: u32 = 12;

// Rendering
/// Line written when today's entry has no incoming reminders.
pub const NO_REMINDERS_LINE: &str = "There are no reminders for today";
/// Heading of the reminders section.
pub const REMINDERS_HEADING: &str = "Reminders:";
/// Heading of the parse errors section.
pub const PARSE_ERRORS_HEADING: &str = "Parse errors:";
/// Heading of the skipped files section.
pub const SKIPPED_FILES_HEADING: &str = "Skipped files:";

// Exit Codes
/// Exit code for an invalid `--date-override`.
pub const EXIT_INVALID_DATE: u8 = 2;
/// Exit code for configuration failures.
pub const EXIT_CONFIG: u8 = 3;
/// Exit code when today's entry already exists.
pub const EXIT_ENTRY_EXISTS: u8 = 4;
/// Exit code when the log root cannot be walked.
pub const EXIT_WALK: u8 = 5;
/// Exit code for other I/O failures.
pub const EXIT_IO: u8 = 6;
/// Exit code when the index cannot be serialized.
pub const EXIT_SERIALIZE: u8 = 7;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "logbook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
