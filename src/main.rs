/*!
# Logbook - A File-Per-Day Journal

Logbook creates today's journal entry as a markdown file named `YYYY-MM-DD.md`.
Before writing it, every past entry in the log directory is scanned for
annotations such as `in 3 days: call the plumber`; the ones that resolve to
today are copied into the new entry as reminders.

## Usage

```text
logbook [OPTIONS]

Options:
  -d, --date-override <YYYY-MM-DD>  Overrides the current date
  -n, --name-override <NAME>        Overrides the name in the heading
      --log-dir <LOG_DIR>           Directory holding the journal entries
      --dump-index                  Print the scanned journal index as JSON
  -v, --verbose                     Print verbose output
      --log-format <LOG_FORMAT>     Format of diagnostic output [default: text] [possible values: text, json]
  -h, --help                        Print help
  -V, --version                     Print version
```

## Configuration

- `LOGBOOK_DIR`: The directory holding journal entries (defaults to `~/logbook`)
- `LOGBOOK_NAME` or `USER`: The name written in each heading
*/

use logbook::cli::CliArgs;
use logbook::config::Config;
use logbook::constants;
use logbook::errors::{AppError, AppResult};
use logbook::journal_core::CalendarDate;
use logbook::{journal_io, render};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        constants::TRACING_ROOT_SPAN_NAME,
        service = constants::TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Application failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Installs the global subscriber. Diagnostics always go to stderr so that
/// stdout carries only the written path or the dumped index.
fn init_tracing(args: &CliArgs) {
    let filter = if args.verbose {
        EnvFilter::new(constants::VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if args.log_format == constants::LOG_FORMAT_JSON {
        builder.json().with_current_span(true).init();
    } else {
        builder
            .with_ansi(std::io::stderr().is_terminal())
            .init();
    }
}

fn run(args: &CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);

    let today = match args.parse_date_override() {
        Some(parsed) => parsed.map_err(AppError::InvalidDateOverride)?,
        None => CalendarDate::today(),
    };
    info!("Writing log entry for {}", today);

    let config = Config::load()?
        .with_overrides(args.name_override.clone(), args.log_dir.clone())?;
    config.validate()?;
    debug!("Log directory: {:?}", config.log_dir);

    if args.dump_index {
        let index = journal_io::scan_log_dir(&config.log_dir)?;
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    journal_io::ensure_log_dir_exists(&config.log_dir)?;
    let path = journal_io::entry_path_for_date(&config.log_dir, today);
    journal_io::ensure_entry_absent(&path)?;

    let index = journal_io::scan_log_dir(&config.log_dir)?;
    let contents = render::render_entry(&index, today, &config.name);
    journal_io::write_new_entry(&path, &contents)?;

    info!("Wrote file {}", path.display());
    println!("{}", path.display());
    Ok(())
}
