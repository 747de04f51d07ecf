//! Curve methods.
//!
//! A [`CurveMethod`] says how a curve turns its stored data into a zero
//! rate. There are two families:
//!
//! **Interpolation** over `(dtm, zero_rate)` vertices, queried in days to
//! maturity:
//! - `Linear`: straight lines, edge segments extended outside the vertices
//! - `FlatForward`: linear on `ln(DF)`, i.e. piecewise constant forwards
//! - `StepFunction`: right-continuous steps
//! - `CubicSplineOnRates`: natural cubic spline on the rates
//! - `CubicSplineOnDiscountFactors`: natural cubic spline on discount factors
//! - `CompositeInterpolation`: picks one of three methods by position
//!
//! **Parametric** models over a fixed parameter vector, queried in years:
//! - `NelsonSiegel`: `[β1, β2, β3, λ]`
//! - `Svensson`: `[β1, β2, β3, β4, λ1, λ2]`
//!
//! Methods carry no curve data; a [`Curve`](crate::curves::Curve) binds a
//! method to its vertices or parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// How a curve evaluates zero rates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveMethod {
    /// Linear interpolation on rates.
    Linear,
    /// Linear interpolation on the log of discount factors.
    FlatForward,
    /// Piecewise constant rates.
    StepFunction,
    /// Natural cubic spline on rates.
    CubicSplineOnRates,
    /// Natural cubic spline on discount factors.
    CubicSplineOnDiscountFactors,
    /// Delegates to one of three interpolation methods depending on whether
    /// the query falls before, within or after the vertices.
    CompositeInterpolation {
        /// Used strictly before the first vertex.
        before_first: Box<CurveMethod>,
        /// Used from the first to the last vertex.
        inner: Box<CurveMethod>,
        /// Used strictly after the last vertex.
        after_last: Box<CurveMethod>,
    },
    /// Nelson-Siegel model.
    NelsonSiegel,
    /// Svensson model.
    Svensson,
}

impl CurveMethod {
    /// Builds a composite interpolation method.
    #[must_use]
    pub fn composite(before_first: CurveMethod, inner: CurveMethod, after_last: CurveMethod) -> Self {
        Self::CompositeInterpolation {
            before_first: Box::new(before_first),
            inner: Box::new(inner),
            after_last: Box::new(after_last),
        }
    }

    /// Short name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::FlatForward => "FlatForward",
            Self::StepFunction => "StepFunction",
            Self::CubicSplineOnRates => "CubicSplineOnRates",
            Self::CubicSplineOnDiscountFactors => "CubicSplineOnDiscountFactors",
            Self::CompositeInterpolation { .. } => "CompositeInterpolation",
            Self::NelsonSiegel => "NelsonSiegel",
            Self::Svensson => "Svensson",
        }
    }

    /// Returns true for methods that interpolate vertices.
    #[must_use]
    pub fn is_interpolation(&self) -> bool {
        !self.is_parametric()
    }

    /// Returns true for parametric term structure models.
    #[must_use]
    pub fn is_parametric(&self) -> bool {
        matches!(self, Self::NelsonSiegel | Self::Svensson)
    }

    /// Number of parameters a parametric model takes.
    #[must_use]
    pub fn required_parameters(&self) -> Option<usize> {
        match self {
            Self::NelsonSiegel => Some(4),
            Self::Svensson => Some(6),
            _ => None,
        }
    }

    /// Checks that a composite only nests interpolation methods.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if a parametric model appears
    /// inside `CompositeInterpolation`.
    pub fn validate(&self) -> CurveResult<()> {
        if let Self::CompositeInterpolation {
            before_first,
            inner,
            after_last,
        } = self
        {
            for sub in [before_first, inner, after_last] {
                if sub.is_parametric() {
                    return Err(CurveError::invalid_curve(format!(
                        "CompositeInterpolation cannot delegate to {}",
                        sub.name()
                    )));
                }
                sub.validate()?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CurveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompositeInterpolation {
                before_first,
                inner,
                after_last,
            } => write!(f, "CompositeInterpolation({before_first}, {inner}, {after_last})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_families() {
        assert!(CurveMethod::Linear.is_interpolation());
        assert!(CurveMethod::StepFunction.is_interpolation());
        assert!(CurveMethod::NelsonSiegel.is_parametric());
        assert!(!CurveMethod::Svensson.is_interpolation());
        assert_eq!(CurveMethod::NelsonSiegel.required_parameters(), Some(4));
        assert_eq!(CurveMethod::Svensson.required_parameters(), Some(6));
        assert_eq!(CurveMethod::Linear.required_parameters(), None);
    }

    #[test]
    fn test_composite_validation() {
        let ok = CurveMethod::composite(
            CurveMethod::StepFunction,
            CurveMethod::CubicSplineOnRates,
            CurveMethod::FlatForward,
        );
        assert!(ok.validate().is_ok());

        let bad = CurveMethod::composite(
            CurveMethod::Linear,
            CurveMethod::NelsonSiegel,
            CurveMethod::Linear,
        );
        assert!(bad.validate().is_err());

        let nested = CurveMethod::composite(
            CurveMethod::Linear,
            CurveMethod::composite(CurveMethod::Linear, CurveMethod::Linear, CurveMethod::Svensson),
            CurveMethod::Linear,
        );
        assert!(nested.validate().is_err());
    }

    #[test]
    fn test_display() {
        let method = CurveMethod::composite(
            CurveMethod::StepFunction,
            CurveMethod::CubicSplineOnRates,
            CurveMethod::FlatForward,
        );
        assert_eq!(
            method.to_string(),
            "CompositeInterpolation(StepFunction, CubicSplineOnRates, FlatForward)"
        );
        assert_eq!(CurveMethod::Linear.to_string(), "Linear");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&CurveMethod::FlatForward).unwrap();
        assert_eq!(json, "\"FlatForward\"");

        let method: CurveMethod = serde_json::from_str(
            r#"{"CompositeInterpolation":{"before_first":"StepFunction","inner":"CubicSplineOnRates","after_last":"FlatForward"}}"#,
        )
        .unwrap();
        assert_eq!(
            method,
            CurveMethod::composite(
                CurveMethod::StepFunction,
                CurveMethod::CubicSplineOnRates,
                CurveMethod::FlatForward,
            )
        );
    }
}
