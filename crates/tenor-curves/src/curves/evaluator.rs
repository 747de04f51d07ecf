//! Precalculated evaluation state of a curve.
//!
//! Built once from a method and the curve's data; spline coefficients and
//! vertex discount factors are computed here and never again.

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::CompoundingType;
use tenor_math::interpolation::{
    CubicSpline, Interpolator, LinearInterpolator, NelsonSiegel, StepInterpolator, Svensson,
};

use crate::error::{CurveError, CurveResult};
use crate::method::CurveMethod;

/// Position of a query, in both units a method may need.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Query {
    /// Days to maturity in the curve's day count units.
    pub days: i64,
    /// Year fraction to maturity.
    pub year_fraction: f64,
}

#[derive(Debug, Clone)]
pub(crate) enum Evaluator {
    /// A single vertex.
    Flat(f64),
    Linear(LinearInterpolator),
    Step(StepInterpolator),
    SplineOnRates(CubicSpline),
    /// Linear on `ln(DF)`.
    FlatForward {
        log_discount: LinearInterpolator,
        first_rate: f64,
    },
    SplineOnDiscountFactors {
        discount: CubicSpline,
        first_rate: f64,
    },
    Composite {
        first_dtm: i64,
        last_dtm: i64,
        before_first: Box<Evaluator>,
        inner: Box<Evaluator>,
        after_last: Box<Evaluator>,
    },
    NelsonSiegel(NelsonSiegel),
    Svensson(Svensson),
}

impl Evaluator {
    /// Builds the evaluator of an interpolation method over validated
    /// vertices.
    pub(crate) fn interpolation(
        method: &CurveMethod,
        dtm: &[i64],
        rates: &[f64],
        daycount: &DayCountConvention,
        compounding: CompoundingType,
    ) -> CurveResult<Self> {
        if rates.len() == 1 {
            return Ok(Self::Flat(rates[0]));
        }

        let xs: Vec<f64> = dtm.iter().map(|&d| d as f64).collect();
        let discount_factors = || -> Vec<f64> {
            dtm.iter()
                .zip(rates)
                .map(|(&d, &r)| compounding.discount_factor(r, daycount.year_fraction_from_days(d)))
                .collect()
        };

        let evaluator = match method {
            CurveMethod::Linear => Self::Linear(LinearInterpolator::new(xs, rates.to_vec())?),
            CurveMethod::StepFunction => Self::Step(StepInterpolator::new(xs, rates.to_vec())?),
            CurveMethod::CubicSplineOnRates => {
                Self::SplineOnRates(CubicSpline::new(xs, rates.to_vec())?)
            }
            CurveMethod::FlatForward => {
                let log_dfs = discount_factors().into_iter().map(f64::ln).collect();
                Self::FlatForward {
                    log_discount: LinearInterpolator::new(xs, log_dfs)?,
                    first_rate: rates[0],
                }
            }
            CurveMethod::CubicSplineOnDiscountFactors => Self::SplineOnDiscountFactors {
                discount: CubicSpline::new(xs, discount_factors())?,
                first_rate: rates[0],
            },
            CurveMethod::CompositeInterpolation {
                before_first,
                inner,
                after_last,
            } => {
                let build = |m: &CurveMethod| {
                    Self::interpolation(m, dtm, rates, daycount, compounding).map(Box::new)
                };
                Self::Composite {
                    first_dtm: dtm[0],
                    last_dtm: dtm[dtm.len() - 1],
                    before_first: build(before_first.as_ref())?,
                    inner: build(inner.as_ref())?,
                    after_last: build(after_last.as_ref())?,
                }
            }
            CurveMethod::NelsonSiegel | CurveMethod::Svensson => {
                return Err(CurveError::invalid_curve(format!(
                    "{method} is parametric and cannot interpolate vertices"
                )));
            }
        };
        Ok(evaluator)
    }

    /// Builds the evaluator of a parametric model.
    pub(crate) fn parametric(method: &CurveMethod, parameters: &[f64]) -> CurveResult<Self> {
        match method {
            CurveMethod::NelsonSiegel => Ok(Self::NelsonSiegel(NelsonSiegel::from_parameters(
                parameters,
            )?)),
            CurveMethod::Svensson => Ok(Self::Svensson(Svensson::from_parameters(parameters)?)),
            other => Err(CurveError::invalid_curve(format!(
                "{other} interpolates vertices and takes no parameters"
            ))),
        }
    }

    /// Zero rate at `query`.
    pub(crate) fn zero_rate(&self, query: Query, compounding: CompoundingType) -> CurveResult<f64> {
        let x = query.days as f64;
        match self {
            Self::Flat(rate) => Ok(*rate),
            Self::Linear(interp) => Ok(interp.interpolate(x)?),
            Self::Step(interp) => Ok(interp.interpolate(x)?),
            Self::SplineOnRates(spline) => Ok(spline.interpolate(x)?),
            Self::FlatForward {
                log_discount,
                first_rate,
            } => {
                if query.days == 0 {
                    return Ok(*first_rate);
                }
                let df = log_discount.interpolate(x)?.exp();
                Ok(compounding.rate_from_discount_factor(df, query.year_fraction)?)
            }
            Self::SplineOnDiscountFactors {
                discount,
                first_rate,
            } => {
                if query.days == 0 {
                    return Ok(*first_rate);
                }
                let df = discount.interpolate(x)?;
                Ok(compounding.rate_from_discount_factor(df, query.year_fraction)?)
            }
            Self::Composite {
                first_dtm,
                last_dtm,
                before_first,
                inner,
                after_last,
            } => {
                let delegate = if query.days < *first_dtm {
                    before_first
                } else if query.days > *last_dtm {
                    after_last
                } else {
                    inner
                };
                delegate.zero_rate(query, compounding)
            }
            Self::NelsonSiegel(model) => Ok(model.interpolate(query.year_fraction)?),
            Self::Svensson(model) => Ok(model.interpolate(query.year_fraction)?),
        }
    }
}
