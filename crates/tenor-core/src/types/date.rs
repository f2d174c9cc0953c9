//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{TenorError, TenorResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Date;
///
/// let date = Date::from_ymd(2015, 8, 22).unwrap();
/// assert_eq!(date.add_days(2), Date::from_ymd(2015, 8, 24).unwrap());
/// assert_eq!(date.to_string(), "2015-08-22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TenorResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TenorError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> TenorResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| TenorError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds a number of days to the date, saturating at [`Date::MIN`] and
    /// [`Date::MAX`].
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days)
            .unwrap_or(if days < 0 { Self::MIN } else { Self::MAX })
    }

    /// Adds a number of days to the date, or `None` if the result is out of range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
    }

    /// Calculates the number of calendar days from this date to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns true if both dates fall in the same year and month.
    #[must_use]
    pub fn same_month(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = TenorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Date;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Date;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(Date::MAX.add_days(1), Date::MAX);
        assert_eq!(Date::MIN.add_days(-1), Date::MIN);
        assert_eq!(Date::MAX.checked_add_days(1), None);
        assert_eq!(Date::MAX.checked_add_days(-1), Some(Date::MAX - 1));
        assert_eq!(Date::from_ymd(2015, 8, 22).unwrap().add_days(i64::MAX), Date::MAX);
    }

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2015, 8, 22).unwrap();
        assert_eq!(date.year(), 2015);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 22);
        assert_eq!(date.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            Date::from_ymd(2015, 2, 30),
            Err(TenorError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse() {
        let date: Date = "2015-08-24".parse().unwrap();
        assert_eq!(date, Date::from_ymd(2015, 8, 24).unwrap());
        assert!(Date::parse("24/08/2015").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let start = Date::from_ymd(2015, 8, 31).unwrap();
        let next = start + 1;
        assert_eq!(next, Date::from_ymd(2015, 9, 1).unwrap());
        assert_eq!(next - 1, start);
        assert_eq!(next - start, 1);
        assert!(!start.same_month(&next));
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2015, 8, 22).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2015-08-22\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
