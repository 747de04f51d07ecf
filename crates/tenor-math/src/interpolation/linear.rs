//! Linear interpolation.

use super::{find_segment, validate_knots};
use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Outside the knots the first or last segment's line is extended; there
/// is no flat extrapolation.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let dtm = vec![11.0, 15.0, 50.0, 80.0];
/// let rates = vec![0.10, 0.15, 0.14, 0.17];
///
/// let interp = LinearInterpolator::new(dtm, rates).unwrap();
/// assert!((interp.interpolate(22.0).unwrap() - 0.148).abs() < 1e-12);
/// // Left of the first knot the 11 -> 15 segment continues downwards
/// assert!((interp.interpolate(7.0).unwrap() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 2 points, mismatched lengths,
    /// non-finite values or x values that are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    /// Slope of segment `i`.
    fn slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let i = find_segment(&self.xs, x);
        Ok(self.ys[i] + self.slope(i) * (x - self.xs[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn documented() -> LinearInterpolator {
        LinearInterpolator::new(vec![11.0, 15.0, 50.0, 80.0], vec![0.10, 0.15, 0.14, 0.17]).unwrap()
    }

    #[test]
    fn test_linear_interior() {
        let interp = documented();
        assert_relative_eq!(interp.interpolate(22.0).unwrap(), 0.148, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(68.0).unwrap(), 0.158, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(13.0).unwrap(), 0.125, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_extrapolates_edge_segments() {
        let interp = documented();
        // One day before the first knot
        assert_relative_eq!(interp.interpolate(10.0).unwrap(), 0.0875, epsilon = 1e-12);
        // One day after the last knot
        assert_relative_eq!(interp.interpolate(81.0).unwrap(), 0.171, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(110.0).unwrap(), 0.20, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_rejects_bad_knots() {
        assert!(LinearInterpolator::new(vec![1.0], vec![0.1]).is_err());
        assert!(LinearInterpolator::new(vec![2.0, 1.0], vec![0.1, 0.2]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 2.0], vec![0.1]).is_err());
    }
}
