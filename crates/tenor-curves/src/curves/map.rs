//! Rate-mapped curve implementation.
//!
//! A `CurveMap` applies a function to every zero rate of a base curve, for
//! example a parallel shift or a scale. Derived quantities are recomputed
//! from the mapped rate.
//!
//! The vertex accessors report the base curve's vertices while the map keeps
//! the base conventions. Once the conventions are overridden those vertices
//! are in the wrong units, so the accessors return empty slices.

use std::sync::Arc;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use super::curve::check_calendar;
use crate::error::CurveResult;
use crate::method::CurveMethod;
use crate::traits::IrCurve;

/// A curve whose zero rates are `f(base.zero_rate(m))`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tenor_core::prelude::*;
/// use tenor_curves::prelude::*;
///
/// let observation = Date::from_ymd(2015, 8, 3).unwrap();
/// let base = Arc::new(
///     Curve::new(
///         "base",
///         DayCountConvention::Actual365,
///         CompoundingType::Simple,
///         CurveMethod::Linear,
///         observation,
///         vec![11, 15, 50, 80],
///         vec![0.10, 0.15, 0.14, 0.17],
///     )
///     .unwrap(),
/// );
///
/// // +50bp parallel shift
/// let shifted = CurveMap::new(|r: f64| r + 0.005, base);
/// let rate = shifted.zero_rate(Date::from_ymd(2015, 8, 25).unwrap()).unwrap();
/// assert!((rate - 0.153).abs() < 1e-12);
/// ```
pub struct CurveMap<F, C: IrCurve + ?Sized> {
    /// Function applied to each zero rate.
    f: F,
    /// The base curve.
    underlying: Arc<C>,
    daycount: DayCountConvention,
    compounding: CompoundingType,
    /// Whether the base vertices are expressed in this map's conventions.
    shares_conventions: bool,
}

impl<F, C: IrCurve + ?Sized> std::fmt::Debug for CurveMap<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveMap")
            .field("underlying", &self.underlying.name())
            .field("daycount", &self.daycount)
            .field("compounding", &self.compounding)
            .finish_non_exhaustive()
    }
}

impl<F, C> CurveMap<F, C>
where
    F: Fn(f64) -> f64 + Send + Sync,
    C: IrCurve + ?Sized,
{
    /// Maps `underlying`, keeping its day count and compounding.
    #[must_use]
    pub fn new(f: F, underlying: Arc<C>) -> Self {
        let daycount = underlying.daycount().clone();
        let compounding = underlying.compounding();
        Self {
            f,
            underlying,
            daycount,
            compounding,
            shares_conventions: true,
        }
    }

    /// Maps `underlying` and reads the mapped rates with other conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if `daycount` names an unregistered calendar.
    pub fn with_conventions(
        f: F,
        underlying: Arc<C>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
    ) -> CurveResult<Self> {
        check_calendar(&daycount)?;
        let shares_conventions =
            daycount == *underlying.daycount() && compounding == underlying.compounding();
        Ok(Self {
            f,
            underlying,
            daycount,
            compounding,
            shares_conventions,
        })
    }

    /// The base curve.
    #[must_use]
    pub fn underlying(&self) -> &Arc<C> {
        &self.underlying
    }
}

impl<F, C> IrCurve for CurveMap<F, C>
where
    F: Fn(f64) -> f64 + Send + Sync,
    C: IrCurve + ?Sized,
{
    fn name(&self) -> &str {
        self.underlying.name()
    }

    fn daycount(&self) -> &DayCountConvention {
        &self.daycount
    }

    fn compounding(&self) -> CompoundingType {
        self.compounding
    }

    fn method(&self) -> Option<&CurveMethod> {
        self.underlying.method()
    }

    fn observation_date(&self) -> Date {
        self.underlying.observation_date()
    }

    fn dtm(&self) -> &[i64] {
        if self.shares_conventions {
            self.underlying.dtm()
        } else {
            &[]
        }
    }

    fn zero_rates(&self) -> &[f64] {
        if self.shares_conventions {
            self.underlying.zero_rates()
        } else {
            &[]
        }
    }

    fn parameters(&self) -> &[f64] {
        if self.shares_conventions {
            self.underlying.parameters()
        } else {
            &[]
        }
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        Ok((self.f)(self.underlying.zero_rate(maturity)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Curve;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn base() -> Arc<Curve> {
        Arc::new(
            Curve::new(
                "base",
                DayCountConvention::Actual365,
                CompoundingType::Simple,
                CurveMethod::Linear,
                Date::from_ymd(2015, 8, 3).unwrap(),
                vec![11, 15, 50, 80],
                vec![0.10, 0.15, 0.14, 0.17],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_identity_map_matches_base() {
        let base = base();
        let mapped = CurveMap::new(|r: f64| r, base.clone());
        let m = Date::from_ymd(2015, 10, 10).unwrap();
        assert_eq!(mapped.zero_rate(m).unwrap(), base.zero_rate(m).unwrap());
        assert_eq!(mapped.discount_factor(m).unwrap(), base.discount_factor(m).unwrap());
        assert_eq!(mapped.daycount(), base.daycount());
    }

    #[test]
    fn test_scaled_rates_feed_derived_quantities() {
        let mapped = CurveMap::new(|r: f64| 2.0 * r, base());
        let m = Date::from_ymd(2015, 10, 10).unwrap();
        assert_relative_eq!(mapped.zero_rate(m).unwrap(), 0.316, epsilon = 1e-12);
        assert_relative_eq!(
            mapped.effective_rate(m).unwrap(),
            0.316 * 68.0 / 365.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_own_conventions() {
        let mapped = CurveMap::with_conventions(
            |r: f64| r,
            base(),
            DayCountConvention::Actual360,
            CompoundingType::Continuous,
        )
        .unwrap();
        let m = Date::from_ymd(2015, 10, 10).unwrap();
        assert_relative_eq!(
            mapped.effective_rate_factor(m).unwrap(),
            (0.158_f64 * 68.0 / 360.0).exp(),
            epsilon = 1e-12
        );
        assert_eq!(mapped.compounding(), CompoundingType::Continuous);
        assert!(mapped.dtm().is_empty());
        assert!(mapped.zero_rates().is_empty());
    }

    #[test]
    fn test_vertices_shared_with_base_conventions() {
        let base = base();
        let mapped = CurveMap::new(|r: f64| r + 0.01, base.clone());
        assert_eq!(mapped.dtm(), &[11, 15, 50, 80]);
        assert_eq!(mapped.zero_rates(), base.zero_rates());

        let restated = CurveMap::with_conventions(
            |r: f64| r,
            base,
            DayCountConvention::Actual365,
            CompoundingType::Simple,
        )
        .unwrap();
        assert_eq!(restated.dtm(), &[11, 15, 50, 80]);
    }

    #[test]
    fn test_unregistered_calendar_rejected() {
        let err = CurveMap::with_conventions(
            |r: f64| r,
            base(),
            DayCountConvention::bdays252("Atlantis"),
            CompoundingType::Exponential,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);

        let brazil = CurveMap::with_conventions(
            |r: f64| r,
            base(),
            DayCountConvention::bdays252("Brazil"),
            CompoundingType::Exponential,
        )
        .unwrap();
        assert!(brazil.dtm().is_empty());
    }
}
