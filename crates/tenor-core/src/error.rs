//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by dates, day counts, compounding and calendars.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// A convention name could not be recognized.
    #[error("Unknown convention: {name}")]
    UnknownConvention {
        /// The unrecognized name.
        name: String,
    },

    /// No calendar is registered under the requested identifier.
    #[error("Unknown calendar: {id}")]
    UnknownCalendar {
        /// The identifier that could not be resolved.
        id: String,
    },

    /// A rate cannot be implied from an effective rate factor.
    #[error("Cannot imply {compounding} rate from factor {factor} over year fraction {year_fraction}")]
    RateInversion {
        /// Name of the compounding convention.
        compounding: String,
        /// The effective rate factor.
        factor: f64,
        /// The year fraction.
        year_fraction: f64,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a day count error.
    #[must_use]
    pub fn day_count_error(reason: impl Into<String>) -> Self {
        Self::DayCountError {
            reason: reason.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }

    /// Creates an unknown calendar error.
    #[must_use]
    pub fn unknown_calendar(id: impl Into<String>) -> Self {
        Self::UnknownCalendar { id: id.into() }
    }
}
