//! Calendar date used for observation dates and maturities.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate`. Curves are keyed on whole days, so
/// there is no time-of-day component anywhere in the library.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Date;
///
/// let obs = Date::from_ymd(2015, 8, 3).unwrap();
/// let mat = obs.add_days(22);
/// assert_eq!(mat.to_string(), "2015-08-25");
/// assert_eq!(obs.days_between(&mat), 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
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

    /// Adds a signed number of calendar days.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

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
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Number of calendar days from `other` to `self`.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2015, 8, 3).unwrap();
        assert_eq!(date.year(), 2015);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 3);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2015, 2, 29).is_err());
        assert!(Date::from_ymd(2016, 2, 29).is_ok());
        assert!(Date::from_ymd(2015, 13, 1).is_err());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2015, 8, 3).unwrap();
        let d2 = Date::from_ymd(2015, 10, 10).unwrap();
        assert_eq!(d1.days_between(&d2), 68);
        assert_eq!(d2.days_between(&d1), -68);
        assert_eq!(d2 - d1, 68);
    }

    #[test]
    fn test_parse_and_from_str() {
        let date = Date::parse("2015-08-25").unwrap();
        assert_eq!(date, Date::from_ymd(2015, 8, 25).unwrap());

        let parsed: Date = " 2015-08-25 ".parse().unwrap();
        assert_eq!(parsed, date);

        assert!(Date::parse("25/08/2015").is_err());
    }

    #[test]
    fn test_weekend_detection() {
        // 2015-08-08 is a Saturday
        let saturday = Date::from_ymd(2015, 8, 8).unwrap();
        assert!(saturday.is_weekend());
        assert_eq!(saturday.weekday(), Weekday::Sat);
        assert!(saturday.add_days(1).is_weekend());
        assert!(!saturday.add_days(2).is_weekend());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2015, 8, 3).unwrap();
        assert_eq!((d1 + 22).to_string(), "2015-08-25");
        assert_eq!((d1 - 3).to_string(), "2015-07-31");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2015, 8, 3).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2015-08-03\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
