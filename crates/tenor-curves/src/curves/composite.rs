//! Curves defined by combining the discount factors of other curves.
//!
//! These curves have no vertices of their own. Their effective rate factor
//! (and so their discount factor) is computed from the member curves, and
//! the zero rate is implied back from it with the composite's own day count
//! and compounding.

use std::sync::Arc;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use super::curve::check_calendar;
use crate::error::{CurveError, CurveResult};
use crate::traits::IrCurve;

/// Zero rate implied by a curve's own effective rate factor.
fn implied_zero_rate<C: IrCurve + ?Sized>(curve: &C, maturity: Date) -> CurveResult<f64> {
    let t = curve.year_fraction(maturity)?;
    if t == 0.0 {
        return Err(CurveError::domain(format!(
            "zero rate of '{}' is undefined at {maturity}, a zero year fraction",
            curve.name()
        )));
    }
    let erf = curve.effective_rate_factor(maturity)?;
    Ok(curve.compounding().implied_rate(erf, t)?)
}

/// Members must be observed on the same date.
fn common_observation_date(curves: &[Arc<dyn IrCurve>]) -> CurveResult<Date> {
    let Some(first) = curves.first() else {
        return Err(CurveError::invalid_curve("composite curve needs member curves"));
    };
    let expected = first.observation_date();
    for curve in &curves[1..] {
        let got = curve.observation_date();
        if got != expected {
            return Err(CurveError::ObservationDateMismatch { expected, got });
        }
    }
    Ok(expected)
}

// ============================================================================
// Binary combinators
// ============================================================================

/// Curve whose discount factor is the product of two curves' discount
/// factors.
///
/// ```text
/// DF(m) = DF_a(m) * DF_b(m)
/// ```
///
/// Typical use: a risk-free curve times a spread curve.
#[derive(Clone)]
pub struct ComposeProdFactorCurve {
    name: String,
    curve_a: Arc<dyn IrCurve>,
    curve_b: Arc<dyn IrCurve>,
    daycount: DayCountConvention,
    compounding: CompoundingType,
    observation_date: Date,
}

impl ComposeProdFactorCurve {
    /// Creates the product of `curve_a` and `curve_b`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ObservationDateMismatch` if the curves were not
    /// observed on the same date, or an error if `daycount` names an
    /// unregistered calendar.
    pub fn new(
        curve_a: Arc<dyn IrCurve>,
        curve_b: Arc<dyn IrCurve>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
    ) -> CurveResult<Self> {
        check_calendar(&daycount)?;
        let observation_date = common_observation_date(&[curve_a.clone(), curve_b.clone()])?;
        let name = format!("{} * {}", curve_a.name(), curve_b.name());
        tracing::debug!(curve = %name, "built product factor curve");
        Ok(Self {
            name,
            curve_a,
            curve_b,
            daycount,
            compounding,
            observation_date,
        })
    }

    /// The two member curves.
    #[must_use]
    pub fn members(&self) -> (&Arc<dyn IrCurve>, &Arc<dyn IrCurve>) {
        (&self.curve_a, &self.curve_b)
    }
}

impl std::fmt::Debug for ComposeProdFactorCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposeProdFactorCurve")
            .field("curve_a", &self.curve_a.name())
            .field("curve_b", &self.curve_b.name())
            .field("daycount", &self.daycount)
            .field("compounding", &self.compounding)
            .finish()
    }
}

impl IrCurve for ComposeProdFactorCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn daycount(&self) -> &DayCountConvention {
        &self.daycount
    }

    fn compounding(&self) -> CompoundingType {
        self.compounding
    }

    fn observation_date(&self) -> Date {
        self.observation_date
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        implied_zero_rate(self, maturity)
    }

    fn effective_rate_factor(&self, maturity: Date) -> CurveResult<f64> {
        self.year_fraction(maturity)?;
        Ok(self.curve_a.effective_rate_factor(maturity)?
            * self.curve_b.effective_rate_factor(maturity)?)
    }
}

/// Curve whose discount factor is the ratio of two curves' discount
/// factors.
///
/// ```text
/// DF(m) = DF_a(m) / DF_b(m)
/// ```
///
/// Typical use: extracting a spread curve from a total curve.
#[derive(Clone)]
pub struct ComposeDivFactorCurve {
    name: String,
    curve_a: Arc<dyn IrCurve>,
    curve_b: Arc<dyn IrCurve>,
    daycount: DayCountConvention,
    compounding: CompoundingType,
    observation_date: Date,
}

impl ComposeDivFactorCurve {
    /// Creates the ratio `curve_a / curve_b`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ObservationDateMismatch` if the curves were not
    /// observed on the same date, or an error if `daycount` names an
    /// unregistered calendar.
    pub fn new(
        curve_a: Arc<dyn IrCurve>,
        curve_b: Arc<dyn IrCurve>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
    ) -> CurveResult<Self> {
        check_calendar(&daycount)?;
        let observation_date = common_observation_date(&[curve_a.clone(), curve_b.clone()])?;
        let name = format!("{} / {}", curve_a.name(), curve_b.name());
        tracing::debug!(curve = %name, "built ratio factor curve");
        Ok(Self {
            name,
            curve_a,
            curve_b,
            daycount,
            compounding,
            observation_date,
        })
    }

    /// The numerator and denominator curves.
    #[must_use]
    pub fn members(&self) -> (&Arc<dyn IrCurve>, &Arc<dyn IrCurve>) {
        (&self.curve_a, &self.curve_b)
    }
}

impl std::fmt::Debug for ComposeDivFactorCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposeDivFactorCurve")
            .field("curve_a", &self.curve_a.name())
            .field("curve_b", &self.curve_b.name())
            .field("daycount", &self.daycount)
            .field("compounding", &self.compounding)
            .finish()
    }
}

impl IrCurve for ComposeDivFactorCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn daycount(&self) -> &DayCountConvention {
        &self.daycount
    }

    fn compounding(&self) -> CompoundingType {
        self.compounding
    }

    fn observation_date(&self) -> Date {
        self.observation_date
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        implied_zero_rate(self, maturity)
    }

    fn effective_rate_factor(&self, maturity: Date) -> CurveResult<f64> {
        self.year_fraction(maturity)?;
        // 1 / (DF_a / DF_b) = ERF_a / ERF_b
        Ok(self.curve_a.effective_rate_factor(maturity)?
            / self.curve_b.effective_rate_factor(maturity)?)
    }
}

// ============================================================================
// N-ary product
// ============================================================================

/// Product of any number of curves.
///
/// The effective rate factor is the product of the members' factors. Day
/// count and compounding default to the first member's.
#[derive(Clone)]
pub struct CompositeIRCurve {
    name: String,
    curves: Vec<Arc<dyn IrCurve>>,
    daycount: DayCountConvention,
    compounding: CompoundingType,
    observation_date: Date,
}

impl CompositeIRCurve {
    /// Creates the product of `curves`, using the first member's day count
    /// and compounding.
    ///
    /// # Errors
    ///
    /// Returns an error if `curves` is empty or the members were not
    /// observed on the same date.
    pub fn new(name: impl Into<String>, curves: Vec<Arc<dyn IrCurve>>) -> CurveResult<Self> {
        let (daycount, compounding) = match curves.first() {
            Some(first) => (first.daycount().clone(), first.compounding()),
            None => return Err(CurveError::invalid_curve("composite curve needs member curves")),
        };
        Self::with_conventions(name, curves, daycount, compounding)
    }

    /// Creates the product of `curves` with explicit output conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if `curves` is empty, if the members were not
    /// observed on the same date, or if `daycount` names an unregistered
    /// calendar.
    pub fn with_conventions(
        name: impl Into<String>,
        curves: Vec<Arc<dyn IrCurve>>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
    ) -> CurveResult<Self> {
        check_calendar(&daycount)?;
        let observation_date = common_observation_date(&curves)?;
        let name = name.into();
        tracing::debug!(curve = %name, members = curves.len(), "built composite curve");
        Ok(Self {
            name,
            curves,
            daycount,
            compounding,
            observation_date,
        })
    }

    /// The member curves.
    #[must_use]
    pub fn members(&self) -> &[Arc<dyn IrCurve>] {
        &self.curves
    }
}

impl std::fmt::Debug for CompositeIRCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: Vec<&str> = self.curves.iter().map(|c| c.name()).collect();
        f.debug_struct("CompositeIRCurve")
            .field("name", &self.name)
            .field("members", &members)
            .field("daycount", &self.daycount)
            .field("compounding", &self.compounding)
            .finish()
    }
}

impl IrCurve for CompositeIRCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn daycount(&self) -> &DayCountConvention {
        &self.daycount
    }

    fn compounding(&self) -> CompoundingType {
        self.compounding
    }

    fn observation_date(&self) -> Date {
        self.observation_date
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        implied_zero_rate(self, maturity)
    }

    fn effective_rate_factor(&self, maturity: Date) -> CurveResult<f64> {
        self.year_fraction(maturity)?;
        self.curves
            .iter()
            .try_fold(1.0, |acc, curve| -> CurveResult<f64> {
                Ok(acc * curve.effective_rate_factor(maturity)?)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Curve;
    use crate::error::ErrorKind;
    use crate::method::CurveMethod;
    use approx::assert_relative_eq;

    fn obs() -> Date {
        Date::from_ymd(2015, 8, 3).unwrap()
    }

    fn flat(name: &str, rate: f64, observation: Date) -> Arc<dyn IrCurve> {
        Arc::new(
            Curve::new(
                name,
                DayCountConvention::Actual365,
                CompoundingType::Continuous,
                CurveMethod::Linear,
                observation,
                vec![30],
                vec![rate],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_product_of_continuous_curves_adds_rates() {
        let prod = ComposeProdFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            DayCountConvention::Actual365,
            CompoundingType::Continuous,
        )
        .unwrap();
        let m = obs().add_days(200);
        assert_relative_eq!(prod.zero_rate(m).unwrap(), 0.05, epsilon = 1e-12);
        assert_eq!(prod.name(), "a * b");
        assert!(prod.method().is_none());
        assert!(prod.dtm().is_empty());
    }

    #[test]
    fn test_ratio_of_continuous_curves_subtracts_rates() {
        let div = ComposeDivFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            DayCountConvention::Actual365,
            CompoundingType::Continuous,
        )
        .unwrap();
        let m = obs().add_days(200);
        assert_relative_eq!(div.zero_rate(m).unwrap(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_nary_product() {
        let composite = CompositeIRCurve::new(
            "sum",
            vec![flat("a", 0.01, obs()), flat("b", 0.02, obs()), flat("c", 0.03, obs())],
        )
        .unwrap();
        let m = obs().add_days(90);
        assert_relative_eq!(composite.zero_rate(m).unwrap(), 0.06, epsilon = 1e-12);
        assert_eq!(composite.members().len(), 3);
        assert_eq!(composite.compounding(), CompoundingType::Continuous);
    }

    #[test]
    fn test_observation_date_mismatch() {
        let other = obs().add_days(1);
        let err = ComposeProdFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, other),
            DayCountConvention::Actual365,
            CompoundingType::Continuous,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveError::ObservationDateMismatch {
                expected: obs(),
                got: other
            }
        );
        assert!(CompositeIRCurve::new("empty", Vec::new()).is_err());
    }

    #[test]
    fn test_zero_rate_undefined_at_observation_date() {
        let prod = ComposeProdFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            DayCountConvention::Actual365,
            CompoundingType::Continuous,
        )
        .unwrap();
        assert_eq!(prod.zero_rate(obs()).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(prod.discount_factor(obs()).unwrap(), 1.0);
    }

    #[test]
    fn test_unregistered_output_calendar_rejected() {
        let atlantis = DayCountConvention::bdays252("Atlantis");
        let compounding = CompoundingType::Exponential;

        let prod = ComposeProdFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            atlantis.clone(),
            compounding,
        );
        assert_eq!(prod.unwrap_err().kind(), ErrorKind::Construction);

        let div = ComposeDivFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            atlantis.clone(),
            compounding,
        );
        assert_eq!(div.unwrap_err().kind(), ErrorKind::Construction);

        let nary = CompositeIRCurve::with_conventions(
            "nary",
            vec![flat("a", 0.03, obs()), flat("b", 0.02, obs())],
            atlantis,
            compounding,
        );
        assert_eq!(nary.unwrap_err().kind(), ErrorKind::Construction);

        let brazil = ComposeProdFactorCurve::new(
            flat("a", 0.03, obs()),
            flat("b", 0.02, obs()),
            DayCountConvention::bdays252("Brazil"),
            compounding,
        );
        assert!(brazil.is_ok());
    }
}
