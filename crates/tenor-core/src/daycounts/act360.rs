//! Actual/360 day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day year. Money market convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn basis(&self) -> f64 {
        360.0
    }

    fn day_count(&self, start: Date, end: Date) -> CoreResult<i64> {
        Ok(start.days_between(&end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan has 31, Feb has 28, Mar has 31 = 90 days
        assert_eq!(dc.day_count(start, end).unwrap(), 90);
        assert_relative_eq!(dc.year_fraction(start, end).unwrap(), 0.25);
    }

    #[test]
    fn test_act360_full_year_exceeds_one() {
        let dc = Act360;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end).unwrap(), 366);
        assert_relative_eq!(dc.year_fraction(start, end).unwrap(), 366.0 / 360.0);
    }

    #[test]
    fn test_act360_negative() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 4, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(dc.year_fraction(start, end).unwrap(), -0.25);
    }
}
