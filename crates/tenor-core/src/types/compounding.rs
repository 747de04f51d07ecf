//! Compounding conventions.
//!
//! A compounding convention turns an annualized yield and a year fraction
//! into an effective rate factor (ERF), the growth of one unit of currency
//! over the period. Discount factors are `1 / ERF`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingType {
    /// Continuous compounding: `exp(r * t)`.
    Continuous,
    /// Simple interest: `1 + r * t`.
    #[default]
    Simple,
    /// Annual (exponential) compounding: `(1 + r) ^ t`.
    Exponential,
}

impl CompoundingType {
    /// Returns every supported convention.
    #[must_use]
    pub fn all() -> &'static [CompoundingType] {
        &[
            CompoundingType::Continuous,
            CompoundingType::Simple,
            CompoundingType::Exponential,
        ]
    }

    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CompoundingType::Continuous => "Continuous",
            CompoundingType::Simple => "Simple",
            CompoundingType::Exponential => "Exponential",
        }
    }

    /// Effective rate factor of `rate` over `year_fraction` years.
    #[must_use]
    pub fn effective_rate_factor(&self, rate: f64, year_fraction: f64) -> f64 {
        match self {
            CompoundingType::Continuous => (rate * year_fraction).exp(),
            CompoundingType::Simple => 1.0 + rate * year_fraction,
            CompoundingType::Exponential => (1.0 + rate).powf(year_fraction),
        }
    }

    /// Effective rate (`ERF - 1`) of `rate` over `year_fraction` years.
    #[must_use]
    pub fn effective_rate(&self, rate: f64, year_fraction: f64) -> f64 {
        self.effective_rate_factor(rate, year_fraction) - 1.0
    }

    /// Discount factor (`1 / ERF`) of `rate` over `year_fraction` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, year_fraction: f64) -> f64 {
        1.0 / self.effective_rate_factor(rate, year_fraction)
    }

    /// Inverts [`effective_rate_factor`](Self::effective_rate_factor).
    ///
    /// Returns the annualized rate whose factor over `year_fraction` is `erf`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RateInversion` when the year fraction is zero (any
    /// rate maps to a factor of one) or the factor is not positive.
    pub fn implied_rate(&self, erf: f64, year_fraction: f64) -> CoreResult<f64> {
        if year_fraction == 0.0 || !year_fraction.is_finite() || erf.is_nan() || erf <= 0.0 {
            return Err(CoreError::RateInversion {
                compounding: self.name().to_string(),
                factor: erf,
                year_fraction,
            });
        }

        Ok(match self {
            CompoundingType::Continuous => erf.ln() / year_fraction,
            CompoundingType::Simple => (erf - 1.0) / year_fraction,
            CompoundingType::Exponential => erf.powf(1.0 / year_fraction) - 1.0,
        })
    }

    /// Rate implied by a discount factor over `year_fraction` years.
    pub fn rate_from_discount_factor(&self, df: f64, year_fraction: f64) -> CoreResult<f64> {
        self.implied_rate(1.0 / df, year_fraction)
    }
}

impl fmt::Display for CompoundingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CompoundingType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" | "continuouscompounding" => Ok(CompoundingType::Continuous),
            "simple" | "simplecompounding" => Ok(CompoundingType::Simple),
            "exponential" | "exponentialcompounding" | "annual" => {
                Ok(CompoundingType::Exponential)
            }
            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}
