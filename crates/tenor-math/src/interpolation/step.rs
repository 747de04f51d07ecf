//! Piecewise constant interpolation.

use super::validate_knots;
use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// Right-continuous step function.
///
/// Each value holds on the interval that ends at its knot:
///
/// ```text
/// x <= x[0]             -> y[0]
/// x[i] < x <= x[i+1]    -> y[i+1]
/// x > x[n-1]            -> y[n-1]
/// ```
///
/// A single knot gives a constant function.
#[derive(Debug, Clone)]
pub struct StepInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl StepInterpolator {
    /// Creates a step function through the knots.
    ///
    /// # Errors
    ///
    /// Returns an error for empty or mismatched inputs, non-finite values or
    /// x values that are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 1)?;
        Ok(Self { xs, ys })
    }
}

impl Interpolator for StepInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        // First knot at or beyond x
        let i = self.xs.partition_point(|&k| k < x);
        Ok(self.ys[i.min(self.ys.len() - 1)])
    }
}
