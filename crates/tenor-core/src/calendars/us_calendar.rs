//! United States government bond market calendar.

use chrono::Weekday;

use super::rules::{is_last_weekday, is_nth_weekday};
use super::Calendar;
use crate::types::Date;

/// US Federal holiday calendar.
///
/// Fixed-date holidays falling on a Saturday are observed on the Friday
/// before, those on a Sunday on the Monday after.
#[derive(Debug, Clone, Copy, Default)]
pub struct USCalendar;

impl USCalendar {
    /// Fixed-date holidays, before weekend observance.
    fn is_fixed_holiday(date: Date) -> bool {
        match (date.month(), date.day()) {
            (1, 1) | (7, 4) | (11, 11) | (12, 25) => true,
            // Juneteenth
            (6, 19) => date.year() >= 2021,
            _ => false,
        }
    }

    fn is_observed_fixed_holiday(date: Date) -> bool {
        match date.weekday() {
            Weekday::Fri => Self::is_fixed_holiday(date.add_days(1)) || Self::is_fixed_holiday(date),
            Weekday::Mon => Self::is_fixed_holiday(date.add_days(-1)) || Self::is_fixed_holiday(date),
            _ => Self::is_fixed_holiday(date),
        }
    }

    fn is_floating_holiday(date: Date) -> bool {
        match date.month() {
            // Martin Luther King Jr. Day, Presidents Day
            1 | 2 => is_nth_weekday(date, Weekday::Mon, 3),
            // Memorial Day
            5 => is_last_weekday(date, Weekday::Mon),
            // Labor Day
            9 => is_nth_weekday(date, Weekday::Mon, 1),
            // Columbus Day
            10 => is_nth_weekday(date, Weekday::Mon, 2),
            // Thanksgiving
            11 => is_nth_weekday(date, Weekday::Thu, 4),
            _ => false,
        }
    }
}

impl Calendar for USCalendar {
    fn name(&self) -> &'static str {
        "United States"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !Self::is_observed_fixed_holiday(date)
            && !Self::is_floating_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_us_floating_holidays_2025() {
        let cal = USCalendar;
        for (m, d) in [(1, 20), (2, 17), (5, 26), (9, 1), (10, 13), (11, 27)] {
            assert!(!cal.is_business_day(date(2025, m, d)), "2025-{m}-{d}");
        }
        assert!(cal.is_business_day(date(2025, 1, 21)));
    }

    #[test]
    fn test_us_observed_holidays() {
        let cal = USCalendar;
        // July 4 2015 was a Saturday: observed Friday July 3
        assert!(!cal.is_business_day(date(2015, 7, 3)));
        // Christmas 2016 was a Sunday: observed Monday December 26
        assert!(!cal.is_business_day(date(2016, 12, 26)));
        // Juneteenth only from 2021
        assert!(cal.is_business_day(date(2020, 6, 19)));
        assert!(!cal.is_business_day(date(2023, 6, 19)));
    }

    #[test]
    fn test_us_regular_day() {
        let cal = USCalendar;
        assert!(cal.is_business_day(date(2015, 8, 3)));
        assert!(!cal.is_business_day(date(2015, 8, 9)));
    }
}
