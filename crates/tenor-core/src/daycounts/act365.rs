//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::Date;

/// Actual/365 Fixed.
///
/// Actual calendar days over a fixed 365-day year, leap years included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn basis(&self) -> f64 {
        365.0
    }

    fn day_count(&self, start: Date, end: Date) -> CoreResult<i64> {
        Ok(start.days_between(&end))
    }
}
