//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic of the reminder engine: the
//! `CalendarDate` value type, the relative-expression resolver, annotation
//! extraction, the markdown document model, and the per-date journal index
//! that a scan accumulates. Reading files and walking directories lives in
//! `journal_io`.

pub mod annotation;
pub mod date;
pub mod document;
pub mod index;
pub mod resolver;
pub mod scanner;

pub use annotation::{Annotation, Classification, IgnoreReason};
pub use date::CalendarDate;
pub use index::{IndexBuilder, JournalEntry, JournalIndex, ParseError, SkippedFile};
