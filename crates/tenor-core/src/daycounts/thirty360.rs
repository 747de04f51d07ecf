//! 30/360 day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::Date;

/// 30/360 on raw calendar fields.
///
/// Day fields are used as they are: no end-of-month or February rules are
/// applied, so 31st-of-month dates count one day more than the US or
/// Eurobond variants would.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn basis(&self) -> f64 {
        360.0
    }

    fn day_count(&self, start: Date, end: Date) -> CoreResult<i64> {
        let dy = i64::from(end.year()) - i64::from(start.year());
        let dm = i64::from(end.month()) - i64::from(start.month());
        let dd = i64::from(end.day()) - i64::from(start.day());

        Ok(360 * dy + 30 * dm + dd)
    }
}
