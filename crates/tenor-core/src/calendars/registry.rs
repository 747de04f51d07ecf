//! Process-wide calendar registry.
//!
//! `BUS/252` day counts refer to calendars by [`CalendarId`]. The registry
//! maps identifiers to shared calendar instances and is pre-populated with
//! the built-in calendars:
//!
//! | id               | calendar              |
//! |------------------|-----------------------|
//! | `"WeekendsOnly"` | [`WeekendCalendar`]   |
//! | `"UnitedStates"` | [`USCalendar`]        |
//! | `"Brazil"`       | [`BrazilCalendar`]    |
//!
//! Reads take a shared lock; registration takes the write lock briefly.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use super::{BrazilCalendar, Calendar, CalendarId, USCalendar, WeekendCalendar};
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

type CalendarMap = HashMap<CalendarId, Arc<dyn Calendar>>;

static REGISTRY: Lazy<RwLock<CalendarMap>> = Lazy::new(|| {
    let mut map: CalendarMap = HashMap::new();
    map.insert(CalendarId::from("WeekendsOnly"), Arc::new(WeekendCalendar));
    map.insert(CalendarId::from("UnitedStates"), Arc::new(USCalendar));
    map.insert(CalendarId::from("Brazil"), Arc::new(BrazilCalendar));
    RwLock::new(map)
});

/// Registers a calendar under `id`, replacing any previous entry.
///
/// Returns the calendar previously registered under that identifier.
pub fn register_calendar(
    id: impl Into<CalendarId>,
    calendar: Arc<dyn Calendar>,
) -> Option<Arc<dyn Calendar>> {
    let id = id.into();
    debug!(calendar_id = %id, name = calendar.name(), "registering calendar");
    REGISTRY.write().insert(id, calendar)
}

/// Looks up the calendar registered under `id`.
///
/// # Errors
///
/// Returns `CoreError::UnknownCalendar` if nothing is registered.
pub fn calendar(id: &CalendarId) -> CoreResult<Arc<dyn Calendar>> {
    REGISTRY
        .read()
        .get(id)
        .cloned()
        .ok_or_else(|| CoreError::unknown_calendar(id.as_str()))
}

/// Identifiers of every registered calendar, sorted.
#[must_use]
pub fn registered_calendars() -> Vec<CalendarId> {
    let mut ids: Vec<CalendarId> = REGISTRY.read().keys().cloned().collect();
    ids.sort();
    ids
}

/// Signed number of business days between two dates on a calendar.
///
/// Counts the business days in `[date1, date2)`; if `date2` precedes
/// `date1` the count of `[date2, date1)` is returned negated.
///
/// # Errors
///
/// Returns `CoreError::UnknownCalendar` if `calendar_id` is not registered.
pub fn business_days_between(date1: Date, date2: Date, calendar_id: &CalendarId) -> CoreResult<i64> {
    let cal = calendar(calendar_id)?;
    Ok(cal.business_days_between(date1, date2))
}
