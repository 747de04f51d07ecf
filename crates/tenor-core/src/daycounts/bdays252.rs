//! Business/252 day count convention.
//!
//! The Brazilian market convention: the number of business days between two
//! dates on a holiday calendar, over a 252-day year.

use super::DayCount;
use crate::calendars::{business_days_between, CalendarId};
use crate::error::CoreResult;
use crate::types::Date;

/// Business days over 252 on a registered calendar.
///
/// The calendar is resolved through the process-wide registry on every
/// call, so custom calendars registered after construction are honoured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BDays252 {
    calendar: CalendarId,
}

impl BDays252 {
    /// Creates the convention for a calendar identifier.
    #[must_use]
    pub fn new(calendar: impl Into<CalendarId>) -> Self {
        Self {
            calendar: calendar.into(),
        }
    }

    /// Returns the calendar identifier.
    #[must_use]
    pub fn calendar(&self) -> &CalendarId {
        &self.calendar
    }
}

impl DayCount for BDays252 {
    fn name(&self) -> &'static str {
        "BUS/252"
    }

    fn basis(&self) -> f64 {
        252.0
    }

    fn day_count(&self, start: Date, end: Date) -> CoreResult<i64> {
        business_days_between(start, end, &self.calendar)
    }
}
