//! Day-by-day date ranges under a day count convention.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::calendars::{self, Calendar};
use crate::daycounts::DayCountConvention;
use crate::error::CoreResult;
use crate::types::Date;

/// Iterator over the dates between two bounds, one convention day at a time.
///
/// Both bounds are inclusive and are ordered internally, so the range is the
/// same whichever way round they are given. Calendar-day conventions yield
/// every date; `BDays252` yields only business days of its calendar.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
///
/// let fri = Date::from_ymd(2015, 8, 7).unwrap();
/// let tue = Date::from_ymd(2015, 8, 11).unwrap();
///
/// let every_day = DailyDatesRange::new(fri, tue, &DayCountConvention::Actual365, true).unwrap();
/// assert_eq!(every_day.len(), 5);
///
/// let bus = DayCountConvention::bdays252("WeekendsOnly");
/// let dates: Vec<Date> = DailyDatesRange::new(fri, tue, &bus, false).unwrap().collect();
/// assert_eq!(dates, vec![tue, tue.add_days(-1), fri]);
/// ```
#[derive(Clone)]
pub struct DailyDatesRange {
    start: Date,
    end: Date,
    ascending: bool,
    calendar: Option<Arc<dyn Calendar>>,
    front: Date,
    back: Date,
    remaining: usize,
}

impl DailyDatesRange {
    /// Creates a range between `start` and `end`.
    ///
    /// When `ascending` is false, iteration starts from the later date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCalendar` for a `BDays252` convention whose
    /// calendar is not registered.
    pub fn new(
        start: Date,
        end: Date,
        convention: &DayCountConvention,
        ascending: bool,
    ) -> CoreResult<Self> {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };

        let calendar = match convention.calendar() {
            Some(id) => Some(calendars::calendar(id)?),
            None => None,
        };

        let remaining = match &calendar {
            Some(cal) => cal.business_days_between(lo, hi.add_days(1)),
            None => lo.days_between(&hi) + 1,
        };

        Ok(Self {
            start: lo,
            end: hi,
            ascending,
            calendar,
            front: lo,
            back: hi,
            remaining: usize::try_from(remaining).unwrap_or(0),
        })
    }

    /// Earlier bound of the range.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Later bound of the range.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether iteration runs from the earlier date to the later one.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn is_member(&self, date: Date) -> bool {
        self.calendar
            .as_ref()
            .map_or(true, |cal| cal.is_business_day(date))
    }

    fn pop_front(&mut self) -> Option<Date> {
        if self.remaining == 0 {
            return None;
        }
        while !self.is_member(self.front) {
            self.front = self.front.add_days(1);
        }
        let date = self.front;
        self.front = self.front.add_days(1);
        self.remaining -= 1;
        Some(date)
    }

    fn pop_back(&mut self) -> Option<Date> {
        if self.remaining == 0 {
            return None;
        }
        while !self.is_member(self.back) {
            self.back = self.back.add_days(-1);
        }
        let date = self.back;
        self.back = self.back.add_days(-1);
        self.remaining -= 1;
        Some(date)
    }
}

impl Iterator for DailyDatesRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.ascending {
            self.pop_front()
        } else {
            self.pop_back()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DailyDatesRange {
    fn next_back(&mut self) -> Option<Date> {
        if self.ascending {
            self.pop_back()
        } else {
            self.pop_front()
        }
    }
}

impl ExactSizeIterator for DailyDatesRange {}

impl FusedIterator for DailyDatesRange {}

impl fmt::Debug for DailyDatesRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DailyDatesRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("ascending", &self.ascending)
            .field("calendar", &self.calendar.as_ref().map(|c| c.name()))
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_days_ascending() {
        let range =
            DailyDatesRange::new(date(2015, 8, 3), date(2015, 8, 6), &DayCountConvention::Actual360, true)
                .unwrap();
        assert!(range.is_ascending());
        let dates: Vec<Date> = range.collect();
        assert_eq!(
            dates,
            vec![date(2015, 8, 3), date(2015, 8, 4), date(2015, 8, 5), date(2015, 8, 6)]
        );
    }

    #[test]
    fn test_bounds_are_ordered() {
        let range =
            DailyDatesRange::new(date(2015, 8, 6), date(2015, 8, 3), &DayCountConvention::Thirty360, true)
                .unwrap();
        assert_eq!(range.start(), date(2015, 8, 3));
        assert_eq!(range.end(), date(2015, 8, 6));
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_descending_business_days_brazil() {
        // Carnival week 2015: Mon 16 and Tue 17 are holidays
        let dc = DayCountConvention::bdays252("Brazil");
        let range = DailyDatesRange::new(date(2015, 2, 13), date(2015, 2, 19), &dc, false).unwrap();
        assert_eq!(range.len(), 3);
        let dates: Vec<Date> = range.collect();
        assert_eq!(dates, vec![date(2015, 2, 19), date(2015, 2, 18), date(2015, 2, 13)]);
    }

    #[test]
    fn test_double_ended_meets_in_middle() {
        let dc = DayCountConvention::bdays252("WeekendsOnly");
        // Fri 7 .. Fri 14 August 2015: six business days
        let mut range = DailyDatesRange::new(date(2015, 8, 7), date(2015, 8, 14), &dc, true).unwrap();
        assert_eq!(range.len(), 6);
        assert_eq!(range.next(), Some(date(2015, 8, 7)));
        assert_eq!(range.next_back(), Some(date(2015, 8, 14)));
        assert_eq!(range.next(), Some(date(2015, 8, 10)));
        assert_eq!(range.len(), 3);
        let rest: Vec<Date> = range.collect();
        assert_eq!(rest, vec![date(2015, 8, 11), date(2015, 8, 12), date(2015, 8, 13)]);
    }

    #[test]
    fn test_weekend_only_range_is_empty() {
        let dc = DayCountConvention::bdays252("WeekendsOnly");
        let mut range = DailyDatesRange::new(date(2015, 8, 8), date(2015, 8, 9), &dc, true).unwrap();
        assert_eq!(range.len(), 0);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_single_day() {
        let d = date(2015, 8, 3);
        let range = DailyDatesRange::new(d, d, &DayCountConvention::Actual365, false).unwrap();
        assert_eq!(range.collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn test_unknown_calendar() {
        let dc = DayCountConvention::bdays252("Nowhere");
        assert!(DailyDatesRange::new(date(2015, 8, 3), date(2015, 8, 4), &dc, true).is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::calendars::CalendarId;
    use proptest::prelude::*;

    fn date_strategy() -> impl Strategy<Value = Date> {
        (2012i32..2020, 1u32..13, 1u32..29)
            .prop_filter_map("valid date", |(y, m, d)| Date::from_ymd(y, m, d).ok())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_calendar_days_cover_the_span(a in date_strategy(), b in date_strategy()) {
            let range = DailyDatesRange::new(a, b, &DayCountConvention::Actual360, true).unwrap();
            prop_assert_eq!(range.len() as i64, a.days_between(&b).abs() + 1);
        }

        #[test]
        fn prop_business_days_are_ordered_and_open(
            a in date_strategy(),
            b in date_strategy(),
        ) {
            let dc = DayCountConvention::bdays252("Brazil");
            let cal = calendars::calendar(&CalendarId::new("Brazil")).unwrap();

            let up: Vec<Date> = DailyDatesRange::new(a, b, &dc, true).unwrap().collect();
            let mut down: Vec<Date> = DailyDatesRange::new(a, b, &dc, false).unwrap().collect();
            down.reverse();

            prop_assert_eq!(&up, &down);
            prop_assert!(up.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(up.iter().all(|&d| cal.is_business_day(d)));
        }
    }
}
