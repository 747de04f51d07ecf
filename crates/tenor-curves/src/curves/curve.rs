//! The owning curve implementation.

use tenor_core::calendars;
use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use super::evaluator::{Evaluator, Query};
use crate::error::{CurveError, CurveResult};
use crate::method::CurveMethod;
use crate::traits::IrCurve;

/// A zero rate curve built from vertices or model parameters.
///
/// Vertices are `(dtm, zero_rate)` pairs where `dtm` is measured from the
/// observation date in the day count's own units (calendar days, 30/360
/// days or business days). Rates are annualized decimals, `0.148` for
/// 14.8%.
///
/// All validation happens in the constructors; evaluation state (spline
/// coefficients, vertex discount factors) is precomputed there and the
/// curve is immutable afterwards.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_curves::prelude::*;
///
/// let observation = Date::from_ymd(2015, 8, 3).unwrap();
/// let curve = Curve::new(
///     "Curve Name",
///     DayCountConvention::Actual365,
///     CompoundingType::Simple,
///     CurveMethod::Linear,
///     observation,
///     vec![11, 15, 50, 80],
///     vec![0.10, 0.15, 0.14, 0.17],
/// )
/// .unwrap();
///
/// let rate = curve.zero_rate(Date::from_ymd(2015, 8, 25).unwrap()).unwrap();
/// assert!((rate - 0.148).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Curve {
    name: String,
    daycount: DayCountConvention,
    compounding: CompoundingType,
    method: CurveMethod,
    observation_date: Date,
    dtm: Vec<i64>,
    zero_rates: Vec<f64>,
    parameters: Vec<f64>,
    evaluator: Evaluator,
}

impl Curve {
    /// Creates a curve interpolating `(dtm, zero_rates)` vertices.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the arrays differ in length, are
    /// empty, contain a negative or non-increasing `dtm` or a non-finite
    /// rate, if `method` is parametric, or if a `BDays252` calendar is not
    /// registered. Spline systems that cannot be solved report an
    /// arithmetic error.
    pub fn new(
        name: impl Into<String>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
        method: CurveMethod,
        observation_date: Date,
        dtm: Vec<i64>,
        zero_rates: Vec<f64>,
    ) -> CurveResult<Self> {
        let name = name.into();
        if method.is_parametric() {
            return Err(CurveError::invalid_curve(format!(
                "{method} curve '{name}' must be built from parameters"
            )));
        }
        method.validate()?;
        validate_vertices(&dtm, &zero_rates)?;
        check_calendar(&daycount)?;

        let evaluator = Evaluator::interpolation(&method, &dtm, &zero_rates, &daycount, compounding)?;

        tracing::debug!(
            curve = %name,
            method = %method,
            daycount = %daycount,
            compounding = %compounding,
            vertices = dtm.len(),
            "built interpolated curve"
        );

        Ok(Self {
            name,
            daycount,
            compounding,
            method,
            observation_date,
            dtm,
            zero_rates,
            parameters: Vec::new(),
            evaluator,
        })
    }

    /// Creates a curve from parametric model parameters.
    ///
    /// # Errors
    ///
    /// Returns a construction error if `method` is not parametric, the
    /// parameter count does not match the model, a parameter is not finite
    /// or a decay parameter is not positive.
    pub fn with_parameters(
        name: impl Into<String>,
        daycount: DayCountConvention,
        compounding: CompoundingType,
        method: CurveMethod,
        observation_date: Date,
        parameters: Vec<f64>,
    ) -> CurveResult<Self> {
        let name = name.into();
        let Some(expected) = method.required_parameters() else {
            return Err(CurveError::invalid_curve(format!(
                "{method} curve '{name}' must be built from vertices"
            )));
        };
        if parameters.len() != expected {
            return Err(CurveError::parameter_arity(
                method.name(),
                expected,
                parameters.len(),
            ));
        }
        if let Some(bad) = parameters.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::invalid_curve(format!("non-finite parameter {bad}")));
        }
        check_calendar(&daycount)?;

        let evaluator = Evaluator::parametric(&method, &parameters)?;

        tracing::debug!(
            curve = %name,
            method = %method,
            daycount = %daycount,
            compounding = %compounding,
            "built parametric curve"
        );

        Ok(Self {
            name,
            daycount,
            compounding,
            method,
            observation_date,
            dtm: Vec::new(),
            zero_rates: Vec::new(),
            parameters,
            evaluator,
        })
    }

    /// The curve's method.
    #[must_use]
    pub fn curve_method(&self) -> &CurveMethod {
        &self.method
    }

    /// Days to `maturity` in the curve's day count units.
    ///
    /// # Errors
    ///
    /// Returns a domain error for maturities before the observation date.
    pub fn days_to_maturity(&self, maturity: Date) -> CurveResult<i64> {
        if maturity < self.observation_date {
            return Err(CurveError::MaturityBeforeObservation {
                observation_date: self.observation_date,
                maturity,
            });
        }
        Ok(self.daycount.days(self.observation_date, maturity)?)
    }
}

impl IrCurve for Curve {
    fn name(&self) -> &str {
        &self.name
    }

    fn daycount(&self) -> &DayCountConvention {
        &self.daycount
    }

    fn compounding(&self) -> CompoundingType {
        self.compounding
    }

    fn method(&self) -> Option<&CurveMethod> {
        Some(&self.method)
    }

    fn observation_date(&self) -> Date {
        self.observation_date
    }

    fn dtm(&self) -> &[i64] {
        &self.dtm
    }

    fn zero_rates(&self) -> &[f64] {
        &self.zero_rates
    }

    fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        let days = self.days_to_maturity(maturity)?;
        let query = Query {
            days,
            year_fraction: self.daycount.year_fraction_from_days(days),
        };
        self.evaluator.zero_rate(query, self.compounding)
    }
}

/// Checks vertex arrays before anything is built from them.
fn validate_vertices(dtm: &[i64], zero_rates: &[f64]) -> CurveResult<()> {
    if dtm.len() != zero_rates.len() {
        return Err(CurveError::LengthMismatch {
            dtm: dtm.len(),
            zero_rates: zero_rates.len(),
        });
    }
    if dtm.is_empty() {
        return Err(CurveError::InsufficientPoints {
            required: 1,
            got: 0,
        });
    }
    if let Some((index, &d)) = dtm.iter().enumerate().find(|(_, d)| **d < 0) {
        return Err(CurveError::NegativeTenor { index, dtm: d });
    }
    for (i, pair) in dtm.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(CurveError::NonMonotonicTenors {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    if let Some(bad) = zero_rates.iter().find(|r| !r.is_finite()) {
        return Err(CurveError::invalid_curve(format!("non-finite zero rate {bad}")));
    }
    Ok(())
}

/// A business-day curve is unusable without its calendar.
pub(super) fn check_calendar(daycount: &DayCountConvention) -> CurveResult<()> {
    if let Some(id) = daycount.calendar() {
        calendars::calendar(id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn observation() -> Date {
        Date::from_ymd(2015, 8, 3).unwrap()
    }

    fn documented(method: CurveMethod) -> Curve {
        Curve::new(
            "Curve Name",
            DayCountConvention::Actual365,
            CompoundingType::Simple,
            method,
            observation(),
            vec![11, 15, 50, 80],
            vec![0.10, 0.15, 0.14, 0.17],
        )
        .unwrap()
    }

    fn day(n: i64) -> Date {
        observation().add_days(n)
    }

    #[test]
    fn test_documented_linear_curve() {
        let curve = documented(CurveMethod::Linear);
        let maturity = Date::from_ymd(2015, 8, 25).unwrap();

        assert_eq!(curve.days_to_maturity(maturity).unwrap(), 22);
        assert_relative_eq!(curve.zero_rate(maturity).unwrap(), 0.148, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_boundaries() {
        let curve = documented(CurveMethod::Linear);
        assert_relative_eq!(curve.zero_rate(day(10)).unwrap(), 0.0875, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(day(81)).unwrap(), 0.171, epsilon = 1e-12);
    }

    #[test]
    fn test_step_function_boundaries() {
        let curve = documented(CurveMethod::StepFunction);
        assert_eq!(curve.zero_rate(day(10)).unwrap(), 0.10);
        assert_eq!(curve.zero_rate(day(11)).unwrap(), 0.10);
        assert_eq!(curve.zero_rate(day(12)).unwrap(), 0.15);
        assert_eq!(curve.zero_rate(day(81)).unwrap(), 0.17);
    }

    #[test]
    fn test_flat_forward_extrapolates_forwards() {
        let curve = documented(CurveMethod::FlatForward);
        // Constant forward after the last vertex: ln DF is linear in days
        let ln_df = |n| curve.discount_factor(day(n)).unwrap().ln();
        let step_a = ln_df(81) - ln_df(80);
        let step_b = ln_df(120) - ln_df(119);
        assert_relative_eq!(step_a, step_b, epsilon = 1e-14);
        // and before the first one
        let step_c = ln_df(10) - ln_df(9);
        let step_d = ln_df(12) - ln_df(11);
        assert_relative_eq!(step_c, step_d, epsilon = 1e-14);
    }

    #[test]
    fn test_parametric_curve() {
        let curve = Curve::with_parameters(
            "NS",
            DayCountConvention::Actual365,
            CompoundingType::Continuous,
            CurveMethod::NelsonSiegel,
            observation(),
            vec![0.1, 0.2, 0.3, 5.0],
        )
        .unwrap();
        assert_eq!(curve.parameters(), &[0.1, 0.2, 0.3, 5.0]);
        assert!(curve.dtm().is_empty());
        // Limit at the observation date
        assert_relative_eq!(curve.zero_rate(observation()).unwrap(), 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_construction_errors() {
        let build = |dtm: Vec<i64>, rates: Vec<f64>| {
            Curve::new(
                "bad",
                DayCountConvention::Actual360,
                CompoundingType::Continuous,
                CurveMethod::Linear,
                observation(),
                dtm,
                rates,
            )
        };
        assert!(matches!(
            build(vec![1, 2], vec![0.1]),
            Err(CurveError::LengthMismatch { .. })
        ));
        assert!(matches!(
            build(vec![], vec![]),
            Err(CurveError::InsufficientPoints { .. })
        ));
        assert!(matches!(
            build(vec![-1, 2], vec![0.1, 0.2]),
            Err(CurveError::NegativeTenor { index: 0, dtm: -1 })
        ));
        assert!(matches!(
            build(vec![5, 5], vec![0.1, 0.2]),
            Err(CurveError::NonMonotonicTenors { index: 1, .. })
        ));
        assert_eq!(
            build(vec![5, 6], vec![0.1, f64::NAN]).unwrap_err().kind(),
            ErrorKind::Construction
        );

        let arity = Curve::with_parameters(
            "bad",
            DayCountConvention::Actual360,
            CompoundingType::Continuous,
            CurveMethod::Svensson,
            observation(),
            vec![0.1, 0.2, 0.3, 0.4],
        );
        assert_eq!(arity.unwrap_err(), CurveError::parameter_arity("Svensson", 6, 4));

        let wrong_family = Curve::with_parameters(
            "bad",
            DayCountConvention::Actual360,
            CompoundingType::Continuous,
            CurveMethod::Linear,
            observation(),
            vec![0.1],
        );
        assert!(wrong_family.is_err());
    }

    #[test]
    fn test_unknown_calendar_rejected() {
        let result = Curve::new(
            "nowhere",
            DayCountConvention::bdays252("Atlantis"),
            CompoundingType::Exponential,
            CurveMethod::Linear,
            observation(),
            vec![1, 2],
            vec![0.1, 0.2],
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_maturity_before_observation() {
        let curve = documented(CurveMethod::Linear);
        let err = curve.zero_rate(day(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(curve.discount_factor(day(-1)).is_err());
    }
}
