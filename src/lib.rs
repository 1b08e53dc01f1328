/*!
# Logbook

Logbook is a file-per-day journal. Each day gets a markdown file named
`YYYY-MM-DD.md`, and past entries can leave reminders for future days with
annotations such as `tomorrow: water the plants` or `in 2 weeks: renew passport`.
When today's entry is created, every reminder that resolves to today is
carried into it.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `constants`: Names, defaults and exit codes
- `errors`: Error handling infrastructure
- `journal_core`: Pure logic: dates, expression resolution, annotation
  extraction, the markdown document model and the journal index
- `journal_io`: Directory walking, reading entries, writing today's entry
- `render`: Formatting today's entry from the index

## Usage Example

```rust,no_run
use logbook::journal_core::CalendarDate;
use logbook::{journal_io, render, Config};

fn main() -> logbook::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let today = CalendarDate::today();
    journal_io::ensure_log_dir_exists(&config.log_dir)?;
    let path = journal_io::entry_path_for_date(&config.log_dir, today);
    journal_io::ensure_entry_absent(&path)?;

    let index = journal_io::scan_log_dir(&config.log_dir)?;
    let text = render::render_entry(&index, today, &config.name);
    journal_io::write_new_entry(&path, &text)
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Core journal logic without I/O
pub mod journal_core;
/// Journal I/O operations
pub mod journal_io;
/// Rendering today's entry
pub mod render;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult, DateError, ResolveError};
pub use journal_core::{CalendarDate, JournalIndex};
