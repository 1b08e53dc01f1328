use crate::constants;
use crate::errors::DateError;
use crate::journal_core::CalendarDate;
use clap::Parser;
use std::path::PathBuf;

/// A file-per-day journal that carries forward reminders from past entries
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Overrides the current date, taking the form "yyyy-mm-dd". Example --date-override=1941-12-07
    #[arg(short = 'd', long, value_name = "YYYY-MM-DD")]
    pub date_override: Option<String>,

    /// Overrides the name of the user in the heading. Example --name-override="Joe Armstrong"
    #[arg(short = 'n', long)]
    pub name_override: Option<String>,

    /// Directory holding the journal entries (defaults to $LOGBOOK_DIR or ~/logbook)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Print the scanned journal index as JSON instead of writing today's entry
    #[arg(long)]
    pub dump_index: bool,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Format of diagnostic output on stderr
    #[arg(long, default_value = constants::LOG_FORMAT_TEXT, value_parser = [constants::LOG_FORMAT_TEXT, constants::LOG_FORMAT_JSON])]
    pub log_format: String,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Get the date override if specified, parsing it into a CalendarDate
    pub fn parse_date_override(&self) -> Option<Result<CalendarDate, DateError>> {
        self.date_override
            .as_deref()
            .map(CalendarDate::from_ymd)
    }
}
