//! Brazilian settlement calendar.

use super::rules::days_from_easter;
use super::Calendar;
use crate::types::Date;

/// Brazil national (settlement) calendar.
///
/// Weekends and the national holidays:
/// * New Year's Day (Jan 1)
/// * Carnival Monday and Tuesday (Easter - 48, Easter - 47)
/// * Good Friday (Easter - 2)
/// * Tiradentes (Apr 21)
/// * Labour Day (May 1)
/// * Corpus Christi (Easter + 60)
/// * Independence Day (Sep 7)
/// * Nossa Senhora Aparecida (Oct 12)
/// * All Souls' Day (Nov 2)
/// * Republic Day (Nov 15)
/// * Black Consciousness Day (Nov 20, from 2024)
/// * Christmas (Dec 25)
///
/// This is the calendar behind `BUS/252` curves on Brazilian rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilCalendar;

impl BrazilCalendar {
    fn is_national_holiday(date: Date) -> bool {
        let fixed = matches!(
            (date.month(), date.day()),
            (1, 1) | (4, 21) | (5, 1) | (9, 7) | (10, 12) | (11, 2) | (11, 15) | (12, 25)
        ) || (date.month() == 11 && date.day() == 20 && date.year() >= 2024);

        fixed || matches!(days_from_easter(date), Some(-48 | -47 | -2 | 60))
    }
}

impl Calendar for BrazilCalendar {
    fn name(&self) -> &'static str {
        "Brazil"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !Self::is_national_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_moveable_feasts_2015() {
        let cal = BrazilCalendar;
        // Easter 2015: April 5
        assert!(!cal.is_business_day(date(2015, 2, 16)));
        assert!(!cal.is_business_day(date(2015, 2, 17)));
        assert!(cal.is_business_day(date(2015, 2, 18)));
        assert!(!cal.is_business_day(date(2015, 4, 3)));
        assert!(!cal.is_business_day(date(2015, 6, 4)));
    }

    #[test]
    fn test_fixed_holidays() {
        let cal = BrazilCalendar;
        // 2015-04-21 Tuesday, 2015-09-07 Monday, 2015-10-12 Monday
        assert!(!cal.is_business_day(date(2015, 4, 21)));
        assert!(!cal.is_business_day(date(2015, 9, 7)));
        assert!(!cal.is_business_day(date(2015, 10, 12)));
        assert!(!cal.is_business_day(date(2015, 12, 25)));
    }

    #[test]
    fn test_black_consciousness_day() {
        let cal = BrazilCalendar;
        // Friday in 2015, Wednesday in 2024
        assert!(cal.is_business_day(date(2015, 11, 20)));
        assert!(!cal.is_business_day(date(2024, 11, 20)));
    }

    #[test]
    fn test_regular_days() {
        let cal = BrazilCalendar;
        assert!(cal.is_business_day(date(2015, 8, 3)));
        assert!(!cal.is_business_day(date(2015, 8, 8)));
    }

    #[test]
    fn test_business_days_in_2015() {
        // 104 weekend days, 11 weekday holidays (Nov 15 fell on a Sunday)
        let cal = BrazilCalendar;
        assert_eq!(
            cal.business_days_between(date(2015, 1, 1), date(2016, 1, 1)),
            365 - 104 - 11
        );
    }
}
