//! # Tenor Core
//!
//! Core types for the Tenor term structure library.
//!
//! This crate provides the leaf building blocks every curve depends on:
//!
//! - **Types**: [`Date`], [`CompoundingType`] and [`DailyDatesRange`]
//! - **Day Count Conventions**: `ACT/360`, `ACT/365`, `30/360` and `BUS/252`
//! - **Business Day Calendars**: holiday calendars plus a process-wide
//!   registry used by the `BUS/252` convention
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let start = Date::from_ymd(2015, 8, 3).unwrap();
//! let end = Date::from_ymd(2015, 10, 10).unwrap();
//!
//! let yf = DayCountConvention::Actual365.year_fraction(start, end).unwrap();
//! let erf = CompoundingType::Simple.effective_rate_factor(0.158, yf);
//! assert!((erf - 1.0294356164383562).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{business_days_between, Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CompoundingType, DailyDatesRange, Date};
}

// Re-export commonly used types at crate root
pub use calendars::CalendarId;
pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use types::{CompoundingType, DailyDatesRange, Date};
