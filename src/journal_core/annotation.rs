//! `instruction: remark` annotations in free text.
//!
//! A line whose first colon has text on both sides starts an annotation.
//! Lines without such a colon continue the remark of the annotation above
//! them, or are ordinary prose when no annotation has started yet.

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy left-hand side, so the first colon in the line is the delimiter.
static ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^:]+?):(.+)").expect("valid annotation regex"));

/// One `instruction: remark` pair extracted from a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub instruction: String,
    pub remark: String,
}

/// Splits `text` into annotations, folding continuation lines into remarks.
///
/// Remarks are trimmed once all continuation lines have been folded in.
///
/// # Examples
///
/// ```
/// use logbook::journal_core::annotation::extract;
///
/// let found = extract("foo: bar\nbaz");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].instruction, "foo");
/// assert_eq!(found[0].remark, "bar baz");
///
/// assert!(extract("no colon anywhere\nat all").is_empty());
/// ```
pub fn extract(text: &str) -> Vec<Annotation> {
    let mut found: Vec<Annotation> = Vec::new();

    for line in text.lines() {
        match ANNOTATION_RE.captures(line) {
            Some(caps) => found.push(Annotation {
                instruction: caps[1].to_string(),
                remark: caps[2].to_string(),
            }),
            None => {
                if let Some(last) = found.last_mut() {
                    last.remark.push(' ');
                    last.remark.push_str(line);
                }
            }
        }
    }

    for annotation in &mut found {
        annotation.remark = annotation.remark.trim().to_string();
    }

    found
}

/// Why an instruction is not treated as a date expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The scheme part of a URL, `https://...`.
    Url,
    /// A `note:`, `perf:` or `todo:` marker.
    Marker,
    /// An `ai(owner):` action item.
    ActionItem,
    /// A `[ ]` or `[x]` checklist item.
    Checklist,
    /// A build target label such as `//foo:bar`.
    BuildTarget,
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Ignored(IgnoreReason),
    /// Should be handed to the resolver.
    Candidate,
}

/// Decides whether an instruction could be a date expression.
///
/// Comparison is case-insensitive.
pub fn classify(instruction: &str) -> Classification {
    let lowered = instruction.to_lowercase();
    let reason = match lowered.as_str() {
        "http" | "https" => Some(IgnoreReason::Url),
        "note" | "perf" | "todo" => Some(IgnoreReason::Marker),
        s if s.starts_with("ai(") && s.ends_with(')') => Some(IgnoreReason::ActionItem),
        s if s.starts_with("[ ]") || s.starts_with("[x]") => Some(IgnoreReason::Checklist),
        s if s.starts_with("//") => Some(IgnoreReason::BuildTarget),
        _ => None,
    };

    match reason {
        Some(reason) => Classification::Ignored(reason),
        None => Classification::Candidate,
    }
}
