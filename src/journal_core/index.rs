//! Per-date index of incoming reminders and parse errors.
//!
//! A scan owns one [`IndexBuilder`]. Entries are created the first time a
//! date is touched, either because a file for that date was scanned or
//! because some annotation resolved onto it, and are only ever appended to.
//! [`IndexBuilder::finish`] hands back the read-only [`JournalIndex`].

use crate::constants;
use crate::journal_core::date::CalendarDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything the scan learned about one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    /// The scanned file for this date, or where it would live.
    #[serde(rename = "path")]
    pub source_path: PathBuf,
    pub date: CalendarDate,
    /// Remarks aimed at this date, keyed by the date that raised them.
    /// Each list keeps discovery order.
    #[serde(rename = "pastReferences")]
    pub past_references: BTreeMap<CalendarDate, Vec<String>>,
    /// Expressions in this date's own file that could not be resolved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ParseError>,
}

/// A failure to resolve an annotation, kept on the entry that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl JournalEntry {
    fn new(date: CalendarDate, source_path: PathBuf) -> Self {
        JournalEntry {
            source_path,
            date,
            past_references: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// `(origin, remark)` pairs, oldest origin first.
    pub fn reminders(&self) -> impl Iterator<Item = (CalendarDate, &str)> + '_ {
        self.past_references
            .iter()
            .flat_map(|(origin, remarks)| remarks.iter().map(move |r| (*origin, r.as_str())))
    }

    pub fn has_reminders(&self) -> bool {
        self.past_references.values().any(|remarks| !remarks.is_empty())
    }
}

/// A file that looked like an entry but could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The result of scanning a log directory.
///
/// Serializes as a single object keyed by `YYYY-MM-DD`. Skipped files are
/// not part of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JournalIndex {
    entries: BTreeMap<CalendarDate, JournalEntry>,
    #[serde(skip)]
    skipped: Vec<SkippedFile>,
}

impl JournalIndex {
    pub fn get(&self, date: CalendarDate) -> Option<&JournalEntry> {
        self.entries.get(&date)
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Entries that recorded at least one parse error, oldest first.
    pub fn entries_with_errors(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries().filter(|entry| !entry.errors.is_empty())
    }
}

/// Mutable state of a single scan.
#[derive(Debug)]
pub struct IndexBuilder {
    root: PathBuf,
    entries: BTreeMap<CalendarDate, JournalEntry>,
    skipped: Vec<SkippedFile>,
}

impl IndexBuilder {
    /// `root` is used to derive paths for dates that have no file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IndexBuilder {
            root: root.into(),
            entries: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    fn entry_mut(&mut self, date: CalendarDate) -> &mut JournalEntry {
        let root = &self.root;
        self.entries
            .entry(date)
            .or_insert_with(|| JournalEntry::new(date, default_entry_path(root, date)))
    }

    /// Registers the file that was scanned for `date`.
    pub fn record_file(&mut self, date: CalendarDate, path: &Path) {
        self.entry_mut(date).source_path = path.to_path_buf();
    }

    /// Files `remark` under `target`, raised by the entry for `origin`.
    pub fn record_reminder(&mut self, origin: CalendarDate, target: CalendarDate, remark: String) {
        self.entry_mut(target)
            .past_references
            .entry(origin)
            .or_default()
            .push(remark);
    }

    /// Attributes a parse error to the entry whose file raised it.
    pub fn record_error(&mut self, origin: CalendarDate, message: String) {
        self.entry_mut(origin).errors.push(ParseError { message });
    }

    pub fn record_skipped(&mut self, path: &Path, reason: String) {
        self.skipped.push(SkippedFile {
            path: path.to_path_buf(),
            reason,
        });
    }

    pub fn finish(self) -> JournalIndex {
        JournalIndex {
            entries: self.entries,
            skipped: self.skipped,
        }
    }
}

/// `<root>/<YYYY-MM-DD>.md`
pub fn default_entry_path(root: &Path, date: CalendarDate) -> PathBuf {
    root.join(format!("{}.{}", date.to_ymd(), constants::ENTRY_FILE_EXTENSION))
}
