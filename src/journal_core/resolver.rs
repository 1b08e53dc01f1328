//! Relative date expressions.
//!
//! An expression such as `in 5 days` or `tomorrow` is resolved against an
//! anchor date by trying an ordered table of patterns. The table is built so
//! that no input can match more than one pattern, which makes the order
//! irrelevant to the result; the order is still fixed so evaluation is
//! deterministic.

use crate::errors::ResolveError;
use crate::journal_core::date::CalendarDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Outcome of a handler: `None` means the arithmetic left the calendar range.
type Handler = fn(CalendarDate, &Captures<'_>) -> Option<CalendarDate>;

struct Pattern {
    name: &'static str,
    regex: Regex,
    handler: Handler,
}

// Matched against the trimmed, lower-cased expression.
static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern {
            name: "count_unit",
            regex: Regex::new(r"^(?:in )?([0-9]+) (day|week|month|year)s?$")
                .expect("valid count/unit regex"),
            handler: add_count_of_units,
        },
        Pattern {
            name: "tomorrow",
            regex: Regex::new(r"tomorrow").expect("valid tomorrow regex"),
            handler: add_one_day,
        },
    ]
});

fn add_count_of_units(anchor: CalendarDate, caps: &Captures<'_>) -> Option<CalendarDate> {
    let count: u32 = caps[1].parse().ok()?;
    match &caps[2] {
        "day" => anchor.add_days(i64::from(count)),
        "week" => anchor.add_weeks(i64::from(count)),
        "month" => anchor.add_months(count),
        "year" => anchor.add_years(count),
        _ => None,
    }
}

fn add_one_day(anchor: CalendarDate, _: &Captures<'_>) -> Option<CalendarDate> {
    anchor.add_days(1)
}

/// Resolves `expression` relative to `anchor`.
///
/// Matching is case-insensitive. Recognized forms are `[in ]N day[s]`,
/// `[in ]N week[s]`, `[in ]N month[s]`, `[in ]N year[s]` (the whole
/// expression) and `tomorrow` (anywhere in the expression).
///
/// # Errors
///
/// Returns [`ResolveError::NoMatchingPattern`] when nothing matches and
/// [`ResolveError::OutOfRange`] when the count is too large to apply.
///
/// # Examples
///
/// ```
/// use logbook::journal_core::{resolver, CalendarDate};
///
/// let anchor = CalendarDate::from_ymd("2024-01-01").unwrap();
/// assert_eq!(
///     resolver::resolve(anchor, "in 5 days").unwrap(),
///     CalendarDate::from_ymd("2024-01-06").unwrap()
/// );
/// assert!(resolver::resolve(anchor, "82872--1").is_err());
/// ```
pub fn resolve(anchor: CalendarDate, expression: &str) -> Result<CalendarDate, ResolveError> {
    let normalized = expression.trim().to_lowercase();

    for pattern in PATTERNS.iter() {
        if let Some(caps) = pattern.regex.captures(&normalized) {
            debug!(pattern = pattern.name, expression, "Matched relative expression");
            return (pattern.handler)(anchor, &caps).ok_or_else(|| ResolveError::OutOfRange {
                expression: expression.to_string(),
            });
        }
    }

    Err(ResolveError::NoMatchingPattern {
        expression: expression.to_string(),
    })
}

/// Like [`resolve`], but falls back to the anchor itself on failure.
///
/// The error, if any, is returned alongside so the caller can record it.
pub fn resolve_or_anchor(
    anchor: CalendarDate,
    expression: &str,
) -> (CalendarDate, Option<ResolveError>) {
    match resolve(anchor, expression) {
        Ok(date) => (date, None),
        Err(e) => (anchor, Some(e)),
    }
}

/// Names of the patterns matching `expression`, in table order.
///
/// Used to check that the table never has two matches for one input.
pub fn matching_patterns(expression: &str) -> Vec<&'static str> {
    let normalized = expression.trim().to_lowercase();
    PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(&normalized))
        .map(|p| p.name)
        .collect()
}
