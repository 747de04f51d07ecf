//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait and the built-in market calendars
//! - [`CalendarId`], the name a `BUS/252` day count refers to
//! - A process-wide registry resolving identifiers to calendars, with
//!   [`business_days_between`] as the entry point used by day counts

use serde::{Deserialize, Serialize};
use std::fmt;

mod brazil;
mod registry;
mod rules;
mod us_calendar;

pub use brazil::BrazilCalendar;
pub use registry::{business_days_between, calendar, register_calendar, registered_calendars};
pub use us_calendar::USCalendar;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a weekend day or a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Advances a date by a signed number of business days.
    fn add_business_days(&self, date: Date, days: i64) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Counts business days in `[start, end)`.
    ///
    /// When `end` precedes `start` the count of `[end, start)` is returned
    /// negated, so the result is antisymmetric in its arguments.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let (from, to, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let mut count = 0;
        let mut current = from;
        while current < to {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        sign * count
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Identifier of a registered calendar (e.g. `"Brazil"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarId(String);

impl CalendarId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CalendarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CalendarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
