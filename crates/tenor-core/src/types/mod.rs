//! Domain types.
//!
//! - [`Date`]: calendar date
//! - [`CompoundingType`]: rate compounding convention
//! - [`DailyDatesRange`]: day-by-day iteration under a day count convention

mod compounding;
mod date;
mod dates_range;

pub use compounding::CompoundingType;
pub use date::Date;
pub use dates_range::DailyDatesRange;
