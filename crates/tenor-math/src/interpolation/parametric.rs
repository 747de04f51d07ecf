//! Parametric zero rate models.
//!
//! - Nelson-Siegel: 4 parameters `[β1, β2, β3, λ]`
//! - Svensson: 6 parameters `[β1, β2, β3, β4, λ1, λ2]`
//!
//! Both are evaluated on a year fraction `t`. At `t = 0` the removable
//! singularity is replaced by its limit `β1 + β2`.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// `(1 - e^(-x)) / x`, with its limit 1 at `x = 0`.
fn slope_loading(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        1.0 - x / 2.0 + x * x / 6.0
    } else {
        -(-x).exp_m1() / x
    }
}

/// `(1 - e^(-x)) / x - e^(-x)`, with its limit 0 at `x = 0`.
fn curvature_loading(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        x / 2.0 - x * x / 3.0
    } else {
        slope_loading(x) - (-x).exp()
    }
}

fn check_lambda(name: &str, value: f64) -> MathResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MathError::invalid_input(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn check_arity(model: &str, expected: usize, params: &[f64]) -> MathResult<()> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(MathError::invalid_input(format!(
            "{model} takes {expected} parameters, got {}",
            params.len()
        )))
    }
}

/// Nelson-Siegel zero rate model.
///
/// ```text
/// r(t) = β1 + (β2 + β3) (λ/t) (1 - e^(-t/λ)) - β3 e^(-t/λ)
/// ```
///
/// - β1: long-run level
/// - β1 + β2: short rate (limit at `t = 0`)
/// - β3: hump
/// - λ: decay, in years
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{Interpolator, NelsonSiegel};
///
/// let ns = NelsonSiegel::new(0.1, 0.2, 0.3, 5.0).unwrap();
/// assert!((ns.interpolate(0.0).unwrap() - 0.3).abs() < 1e-15);
/// assert!(ns.interpolate(2.0).unwrap() > 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegel {
    beta1: f64,
    beta2: f64,
    beta3: f64,
    lambda: f64,
}

impl NelsonSiegel {
    /// Number of model parameters.
    pub const PARAMETERS: usize = 4;

    /// Creates a Nelson-Siegel model.
    ///
    /// # Errors
    ///
    /// Returns an error if `lambda` is not positive.
    pub fn new(beta1: f64, beta2: f64, beta3: f64, lambda: f64) -> MathResult<Self> {
        check_lambda("lambda", lambda)?;
        Ok(Self {
            beta1,
            beta2,
            beta3,
            lambda,
        })
    }

    /// Creates the model from `[β1, β2, β3, λ]`.
    pub fn from_parameters(params: &[f64]) -> MathResult<Self> {
        check_arity("Nelson-Siegel", Self::PARAMETERS, params)?;
        Self::new(params[0], params[1], params[2], params[3])
    }
}

impl Interpolator for NelsonSiegel {
    fn interpolate(&self, t: f64) -> MathResult<f64> {
        if t <= 0.0 {
            return Ok(self.beta1 + self.beta2);
        }

        let x = t / self.lambda;
        Ok(self.beta1 + self.beta2 * slope_loading(x) + self.beta3 * curvature_loading(x))
    }
}

/// Svensson zero rate model.
///
/// Nelson-Siegel on `(β1, β2, β3, λ1)` plus a second hump:
///
/// ```text
/// r(t) = NS(t; β1, β2, β3, λ1) + β4 [(λ2/t) (1 - e^(-t/λ2)) - e^(-t/λ2)]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svensson {
    nelson_siegel: NelsonSiegel,
    beta4: f64,
    lambda2: f64,
}

impl Svensson {
    /// Number of model parameters.
    pub const PARAMETERS: usize = 6;

    /// Creates a Svensson model.
    ///
    /// # Errors
    ///
    /// Returns an error if either decay is not positive.
    pub fn new(
        beta1: f64,
        beta2: f64,
        beta3: f64,
        beta4: f64,
        lambda1: f64,
        lambda2: f64,
    ) -> MathResult<Self> {
        check_lambda("lambda1", lambda1)?;
        check_lambda("lambda2", lambda2)?;
        Ok(Self {
            nelson_siegel: NelsonSiegel::new(beta1, beta2, beta3, lambda1)?,
            beta4,
            lambda2,
        })
    }

    /// Creates the model from `[β1, β2, β3, β4, λ1, λ2]`.
    pub fn from_parameters(params: &[f64]) -> MathResult<Self> {
        check_arity("Svensson", Self::PARAMETERS, params)?;
        Self::new(params[0], params[1], params[2], params[3], params[4], params[5])
    }
}

impl Interpolator for Svensson {
    fn interpolate(&self, t: f64) -> MathResult<f64> {
        let base = self.nelson_siegel.interpolate(t)?;
        if t <= 0.0 {
            return Ok(base);
        }
        Ok(base + self.beta4 * curvature_loading(t / self.lambda2))
    }
}
