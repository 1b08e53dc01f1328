//! Rendering of today's entry from the journal index.

use crate::constants;
use crate::journal_core::{CalendarDate, JournalIndex};

/// Produces the markdown for the entry of `today`.
///
/// The entry starts with a `# <name> - <date>` heading followed by the
/// reminders filed under `today`, or a line saying there are none. Parse
/// errors from any entry, and files that could not be scanned, are listed
/// after the reminders when there are any.
///
/// # Examples
///
/// ```
/// use logbook::journal_core::{CalendarDate, JournalIndex};
/// use logbook::render::render_entry;
///
/// let today = CalendarDate::from_ymd("2014-02-14").unwrap();
/// let text = render_entry(&JournalIndex::default(), today, "Andrew Allen");
/// assert_eq!(
///     text,
///     "# Andrew Allen - 2014-02-14\n\nThere are no reminders for today\n"
/// );
/// ```
pub fn render_entry(index: &JournalIndex, today: CalendarDate, name: &str) -> String {
    let mut lines = vec![format!("# {} - {}", name, today), String::new()];

    match index.get(today).filter(|entry| entry.has_reminders()) {
        Some(entry) => {
            lines.push(constants::REMINDERS_HEADING.to_string());
            for (origin, remark) in entry.reminders() {
                lines.push(format!("From {}: {}", origin, remark));
            }
        }
        None => lines.push(constants::NO_REMINDERS_LINE.to_string()),
    }

    let mut with_errors = index.entries_with_errors().peekable();
    if with_errors.peek().is_some() {
        lines.push(String::new());
        lines.push(constants::PARSE_ERRORS_HEADING.to_string());
        for entry in with_errors {
            lines.push(format!("{}:", entry.date));
            lines.extend(entry.errors.iter().map(|error| format!("- {}", error)));
        }
    }

    if !index.skipped().is_empty() {
        lines.push(String::new());
        lines.push(constants::SKIPPED_FILES_HEADING.to_string());
        for skipped in index.skipped() {
            lines.push(format!("- {}: {}", skipped.path.display(), skipped.reason));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
