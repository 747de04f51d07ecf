//! Date rules shared by the holiday calendars.

use chrono::{NaiveDate, Weekday};

use crate::types::Date;

/// Returns true if `date` is the `n`th occurrence of `weekday` in its month.
pub(crate) fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

/// Returns true if `date` is the last occurrence of `weekday` in its month.
pub(crate) fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.add_days(7).month() != date.month()
}

/// Easter Sunday (Gregorian) using the Anonymous Gregorian algorithm.
pub(crate) fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).map(Date::from)
}

/// Signed offset in days of `date` from Easter Sunday of its year.
pub(crate) fn days_from_easter(date: Date) -> Option<i64> {
    easter_sunday(date.year()).map(|easter| easter.days_between(&date))
}
