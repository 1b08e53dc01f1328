//! Turns one journal entry into index updates.
//!
//! For each text run of the document, annotations are extracted and
//! classified; candidate instructions are resolved against the entry's own
//! date. A failed resolution is recorded as an error on the entry and the
//! remark is still filed, under the entry's own date.

use crate::constants;
use crate::errors::DateError;
use crate::journal_core::annotation::{self, Classification};
use crate::journal_core::date::CalendarDate;
use crate::journal_core::document::{Document, Segment};
use crate::journal_core::index::IndexBuilder;
use crate::journal_core::resolver;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

static DATE_SHAPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+-[0-9]+-[0-9]+$").expect("valid date-shaped regex"));

/// Counters for one scanned document, used for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    pub reminders: usize,
    pub ignored: usize,
    pub errors: usize,
    pub unrecognized: usize,
}

/// Decides whether `path` names a journal entry and, if so, for which date.
///
/// Returns `None` for files the scanner has no interest in: anything without
/// an `.md` extension, or whose stem is not shaped like `Y-M-D`. A date-shaped
/// stem that is not a real date yields `Some(Err(..))`.
///
/// # Examples
///
/// ```
/// use logbook::journal_core::scanner::entry_date_for_path;
/// use std::path::Path;
///
/// assert!(entry_date_for_path(Path::new("/logs/2024-01-01.md")).unwrap().is_ok());
/// assert!(entry_date_for_path(Path::new("/logs/2015-02-29.md")).unwrap().is_err());
/// assert!(entry_date_for_path(Path::new("/logs/README.md")).is_none());
/// assert!(entry_date_for_path(Path::new("/logs/2024-01-01.txt")).is_none());
/// ```
pub fn entry_date_for_path(path: &Path) -> Option<Result<CalendarDate, DateError>> {
    let extension = path.extension()?;
    if extension != constants::ENTRY_FILE_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if !DATE_SHAPED_RE.is_match(stem) {
        return None;
    }
    Some(CalendarDate::from_ymd(stem))
}

/// Scans the markdown `text` of the entry for `date` into `builder`.
pub fn scan_document(
    builder: &mut IndexBuilder,
    date: CalendarDate,
    path: &Path,
    text: &str,
) -> DocumentSummary {
    builder.record_file(date, path);

    let mut summary = DocumentSummary::default();
    let document = Document::parse(text);

    for segment in document.segments() {
        match segment {
            Segment::Text(run) => scan_text_run(builder, date, run, &mut summary),
            Segment::Unrecognized { kind, literal } => {
                summary.unrecognized += 1;
                builder.record_reminder(
                    date,
                    date,
                    format!("unrecognized node: {} {:?}", kind, literal),
                );
            }
        }
    }

    debug!(
        date = %date,
        reminders = summary.reminders,
        ignored = summary.ignored,
        errors = summary.errors,
        unrecognized = summary.unrecognized,
        "Scanned entry"
    );
    summary
}

fn scan_text_run(
    builder: &mut IndexBuilder,
    date: CalendarDate,
    run: &str,
    summary: &mut DocumentSummary,
) {
    for found in annotation::extract(run) {
        if let Classification::Ignored(reason) = annotation::classify(&found.instruction) {
            debug!(instruction = %found.instruction, ?reason, "Ignoring instruction");
            summary.ignored += 1;
            continue;
        }

        let (target, error) = resolver::resolve_or_anchor(date, &found.instruction);
        if let Some(error) = error {
            debug!(
                expression = error.expression(),
                origin = %date,
                "Unresolved expression, filing under origin date"
            );
            summary.errors += 1;
            builder.record_error(date, error.to_string());
        }
        summary.reminders += 1;
        builder.record_reminder(date, target, found.remark);
    }
}
