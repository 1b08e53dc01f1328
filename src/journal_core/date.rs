//! Timezone-naive calendar dates.
//!
//! `CalendarDate` is a thin value type over `chrono::NaiveDate`. It only ever
//! holds a real proleptic Gregorian date: every constructor validates, nothing
//! clamps. Month and year arithmetic is delegated to chrono, which clamps to
//! the last day of a shorter target month (January 31 plus one month is the
//! last day of February).

use crate::constants;
use crate::errors::DateError;
use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static YMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid ymd regex"));

/// A civil calendar date with no time of day and no timezone.
///
/// Dates order chronologically and compare equal when year, month and day
/// all match.
///
/// # Examples
///
/// ```
/// use logbook::journal_core::CalendarDate;
///
/// let leap_day = CalendarDate::from_ymd("2016-02-29").unwrap();
/// assert_eq!(leap_day.to_ymd(), "2016-02-29");
/// assert_eq!(leap_day.add_days(1).unwrap().to_ymd(), "2016-03-01");
///
/// assert!(CalendarDate::from_ymd("2015-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its parts, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| DateError::Nonexistent {
                input: format!("{}-{}-{}", year, month, day),
            })
    }

    /// Parses a `YYYY-MM-DD` literal.
    ///
    /// The month and day may omit their zero padding (`2001-2-3`), the year
    /// must have four digits. Fails with [`DateError::Malformed`] when the
    /// shape is wrong and [`DateError::Nonexistent`] for impossible days such
    /// as `2016-09-32`.
    pub fn from_ymd(input: &str) -> Result<Self, DateError> {
        let caps = YMD_RE.captures(input).ok_or_else(|| DateError::Malformed {
            input: input.to_string(),
        })?;

        // The regex bounds each field to at most four digits.
        let field = |i: usize| caps[i].parse::<u32>().unwrap_or_default();
        let (year, month, day) = (field(1), field(2), field(3));

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(CalendarDate)
            .ok_or_else(|| DateError::Nonexistent {
                input: input.to_string(),
            })
    }

    /// Canonical zero-padded `YYYY-MM-DD` form.
    pub fn to_ymd(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// Today's date on the local wall clock.
    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds (or with a negative count, subtracts) whole days.
    ///
    /// Returns `None` only if the result falls outside chrono's range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(CalendarDate)
    }

    pub fn add_weeks(self, weeks: i64) -> Option<Self> {
        weeks
            .checked_mul(constants::DAYS_PER_WEEK)
            .and_then(|days| self.add_days(days))
    }

    /// Adds calendar months, clamping the day to the end of a shorter month.
    pub fn add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(CalendarDate)
    }

    /// Adds calendar years; February 29 lands on February 28 in common years.
    pub fn add_years(self, years: u32) -> Option<Self> {
        years
            .checked_mul(constants::MONTHS_PER_YEAR)
            .and_then(|months| self.add_months(months))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ymd())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::from_ymd(s)
    }
}

// Serialized as the canonical string so dates can be JSON object keys.
impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_ymd())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(s: &str) -> CalendarDate {
        CalendarDate::from_ymd(s).unwrap()
    }

    #[test]
    fn test_round_trip_canonical_strings() {
        for s in [
            "2016-02-29",
            "2011-04-02",
            "1999-12-31",
            "2000-01-01",
            "0001-01-01",
            "2024-10-09",
        ] {
            assert_eq!(ymd(s).to_ymd(), s);
        }
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert_eq!(
            CalendarDate::from_ymd("2015-02-29"),
            Err(DateError::Nonexistent {
                input: "2015-02-29".to_string()
            })
        );
        assert_eq!(
            CalendarDate::from_ymd("2016-09-32"),
            Err(DateError::Nonexistent {
                input: "2016-09-32".to_string()
            })
        );
        assert!(CalendarDate::from_ymd("2016-13-01").is_err());
        assert!(CalendarDate::from_ymd("2016-00-10").is_err());
    }

    #[test]
    fn test_malformed_input_rejected() {
        for s in ["", "2016/02/01", "16-02-01", "2016-02-01x", " 2016-02-01", "82872--1"] {
            assert!(
                matches!(CalendarDate::from_ymd(s), Err(DateError::Malformed { .. })),
                "expected {:?} to be malformed",
                s
            );
        }
    }

    #[test]
    fn test_unpadded_fields_accepted() {
        let expected = ymd("2001-02-03");
        assert_eq!(ymd("2001-2-03"), expected);
        assert_eq!(ymd("2001-02-3"), expected);
        assert_eq!(ymd("2001-2-3"), expected);
        assert_eq!(ymd("2001-2-3").to_ymd(), "2001-02-03");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(ymd("2011-04-02"), CalendarDate::new(2011, 4, 2).unwrap());
        assert_eq!(ymd("2012-07-07"), ymd("2012-7-7"));
        assert_ne!(ymd("2016-02-29"), ymd("2016-03-01"));
        assert!(CalendarDate::new(2015, 2, 29).is_err());
    }

    #[test]
    fn test_day_and_week_arithmetic() {
        let d = ymd("2024-01-01");
        assert_eq!(d.add_days(5), Some(ymd("2024-01-06")));
        assert_eq!(d.add_days(-1), Some(ymd("2023-12-31")));
        assert_eq!(d.add_weeks(2), Some(ymd("2024-01-15")));
        assert_eq!(ymd("2016-02-28").add_days(1), Some(ymd("2016-02-29")));
    }

    #[test]
    fn test_month_arithmetic_clamps_to_month_end() {
        assert_eq!(ymd("2024-01-31").add_months(1), Some(ymd("2024-02-29")));
        assert_eq!(ymd("2023-01-31").add_months(1), Some(ymd("2023-02-28")));
        assert_eq!(ymd("2023-10-15").add_months(3), Some(ymd("2024-01-15")));
    }

    #[test]
    fn test_year_arithmetic() {
        assert_eq!(ymd("2016-02-29").add_years(1), Some(ymd("2017-02-28")));
        assert_eq!(ymd("2016-02-29").add_years(4), Some(ymd("2020-02-29")));
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        assert_eq!(ymd("2024-01-01").add_days(i64::MAX), None);
        assert_eq!(ymd("2024-01-01").add_weeks(i64::MAX), None);
        assert_eq!(ymd("2024-01-01").add_years(u32::MAX), None);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut dates = vec![ymd("2024-03-01"), ymd("2023-12-31"), ymd("2024-01-15")];
        dates.sort();
        assert_eq!(
            dates,
            vec![ymd("2023-12-31"), ymd("2024-01-15"), ymd("2024-03-01")]
        );
    }

    #[test]
    fn test_serializes_as_ymd_string() {
        let json = serde_json::to_string(&ymd("2024-01-06")).unwrap();
        assert_eq!(json, "\"2024-01-06\"");
    }
}
