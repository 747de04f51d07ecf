//! Day count conventions.
//!
//! A day count convention measures the distance between two dates in its
//! own day units and converts that distance into a year fraction. Curves
//! use the day count as their interpolation axis (days to maturity) and the
//! year fraction to compound rates.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: actual calendar days over a 360-day year
//! - [`Act365`]: actual calendar days over a 365-day year
//! - [`Thirty360`]: unadjusted 30/360 field differences
//! - [`BDays252`]: business days of a calendar over a 252-day year
//!
//! # Usage
//!
//! ```rust
//! use tenor_core::daycounts::DayCountConvention;
//! use tenor_core::types::Date;
//!
//! let start = Date::from_ymd(2015, 8, 3).unwrap();
//! let end = Date::from_ymd(2015, 8, 25).unwrap();
//!
//! let dc = DayCountConvention::Actual365;
//! assert_eq!(dc.days(start, end).unwrap(), 22);
//! assert!((dc.year_fraction(start, end).unwrap() - 22.0 / 365.0).abs() < 1e-15);
//! ```
//!
//! All results are signed: swapping the dates negates them.

mod act360;
mod act365;
mod bdays252;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use bdays252::BDays252;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendars::CalendarId;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Number of days in the convention's year.
    fn basis(&self) -> f64;

    /// Signed number of days from `start` to `end` under the convention.
    fn day_count(&self, start: Date, end: Date) -> CoreResult<i64>;

    /// Signed year fraction from `start` to `end`.
    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        Ok(self.day_count(start, end)? as f64 / self.basis())
    }
}

/// Runtime selection of a day count convention.
///
/// Serializes with the variant names, so a TOML curve definition reads
/// `daycount = "Actual365"` or `daycount = { BDays252 = "Brazil" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360.
    Actual360,
    /// Actual/365 Fixed.
    Actual365,
    /// 30/360 without end-of-month adjustments.
    Thirty360,
    /// Business days over 252, counted on the named calendar.
    BDays252(CalendarId),
}

impl DayCountConvention {
    /// Business-day convention on the given calendar.
    #[must_use]
    pub fn bdays252(calendar: impl Into<CalendarId>) -> Self {
        DayCountConvention::BDays252(calendar.into())
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual360 => Act360.name(),
            DayCountConvention::Actual365 => Act365.name(),
            DayCountConvention::Thirty360 => Thirty360.name(),
            DayCountConvention::BDays252(_) => "BUS/252",
        }
    }

    /// Returns the year basis (denominator).
    #[must_use]
    pub const fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Actual360 | DayCountConvention::Thirty360 => 360,
            DayCountConvention::Actual365 => 365,
            DayCountConvention::BDays252(_) => 252,
        }
    }

    /// Returns the calendar of a business-day convention.
    #[must_use]
    pub fn calendar(&self) -> Option<&CalendarId> {
        match self {
            DayCountConvention::BDays252(id) => Some(id),
            _ => None,
        }
    }

    /// Signed number of days from `start` to `end` under the convention.
    ///
    /// # Errors
    ///
    /// Fails only for `BDays252` when the calendar is not registered.
    pub fn days(&self, start: Date, end: Date) -> CoreResult<i64> {
        match self {
            DayCountConvention::Actual360 => Act360.day_count(start, end),
            DayCountConvention::Actual365 => Act365.day_count(start, end),
            DayCountConvention::Thirty360 => Thirty360.day_count(start, end),
            DayCountConvention::BDays252(id) => {
                crate::calendars::business_days_between(start, end, id)
            }
        }
    }

    /// Signed year fraction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Fails only for `BDays252` when the calendar is not registered.
    pub fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        Ok(self.year_fraction_from_days(self.days(start, end)?))
    }

    /// Converts a day count in this convention's units to a year fraction.
    #[must_use]
    pub fn year_fraction_from_days(&self, days: i64) -> f64 {
        days as f64 / f64::from(self.basis())
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayCountConvention::BDays252(id) => write!(f, "BUS/252:{id}"),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a convention name.
    ///
    /// Accepts market names ("ACT/360", "30/360", "BUS/252:Brazil") and the
    /// variant names ("Actual365", "BDays252:Brazil").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((head, calendar)) = trimmed.split_once(':') {
            return match head.trim().to_uppercase().as_str() {
                "BUS/252" | "BDAYS252" | "BD/252" if !calendar.trim().is_empty() => {
                    Ok(DayCountConvention::bdays252(calendar.trim()))
                }
                _ => Err(CoreError::unknown_convention(s)),
            };
        }

        match trimmed.to_uppercase().as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" | "ACTUAL360" => Ok(DayCountConvention::Actual360),
            "ACT/365" | "ACT/365F" | "ACTUAL/365" | "ACT365" | "ACTUAL365" => {
                Ok(DayCountConvention::Actual365)
            }
            "30/360" | "THIRTY360" | "30360" => Ok(DayCountConvention::Thirty360),
            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}
