//! Interpolation methods for zero rate and discount factor curves.
//!
//! # Available Methods
//!
//! **Knot-based** (validated once at construction, extrapolate outside the
//! knots):
//! - [`LinearInterpolator`]: straight lines, edge segments extended
//! - [`StepInterpolator`]: right-continuous piecewise constant
//! - [`CubicSpline`]: natural cubic spline, boundary cubics extended
//!
//! **Parametric Models** (defined for every `t >= 0`):
//! - [`NelsonSiegel`]
//! - [`Svensson`]
//!
//! | Method | Smoothness | Outside the knots |
//! |--------|------------|-------------------|
//! | Linear | C0 | nearest segment's line |
//! | Step | none | first / last value |
//! | Cubic Spline | C2 | nearest segment's cubic |

mod cubic_spline;
mod linear;
mod parametric;
mod step;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use parametric::{NelsonSiegel, Svensson};
pub use step::StepInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;
}

/// Checks knot arrays shared by every knot-based interpolator.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], min_points: usize) -> MathResult<()> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < min_points {
        return Err(MathError::insufficient_data(min_points, xs.len()));
    }
    if let Some(bad) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(format!("non-finite knot value {bad}")));
    }
    for (i, pair) in xs.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(MathError::NonIncreasingKnots {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

/// Index `i` of the segment `[xs[i], xs[i+1]]` used to evaluate at `x`.
///
/// Points left of the knots map to the first segment and points right of
/// them to the last one. Requires at least two knots.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    // Number of knots strictly below x
    let below = xs.partition_point(|&k| k < x);
    below.saturating_sub(1).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_segment() {
        let xs = [11.0, 15.0, 50.0, 80.0];
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 11.0), 0);
        assert_eq!(find_segment(&xs, 15.0), 0);
        assert_eq!(find_segment(&xs, 15.5), 1);
        assert_eq!(find_segment(&xs, 50.0), 1);
        assert_eq!(find_segment(&xs, 80.0), 2);
        assert_eq!(find_segment(&xs, 81.0), 2);
    }

    #[test]
    fn test_validate_knots() {
        assert!(validate_knots(&[1.0, 2.0], &[0.1, 0.2], 2).is_ok());
        assert_eq!(
            validate_knots(&[1.0], &[0.1], 2),
            Err(MathError::insufficient_data(2, 1))
        );
        assert!(matches!(
            validate_knots(&[1.0, 1.0], &[0.1, 0.2], 2),
            Err(MathError::NonIncreasingKnots { index: 1, .. })
        ));
        assert!(validate_knots(&[1.0, 2.0], &[0.1], 1).is_err());
        assert!(validate_knots(&[1.0, f64::NAN], &[0.1, 0.2], 2).is_err());
    }

    // ============ Comparative Tests ============

    #[test]
    fn test_all_interpolators_through_points() {
        let dtm = vec![11.0, 15.0, 50.0, 80.0];
        let rates = vec![0.10, 0.15, 0.14, 0.17];

        let linear = LinearInterpolator::new(dtm.clone(), rates.clone()).unwrap();
        let step = StepInterpolator::new(dtm.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(dtm.clone(), rates.clone()).unwrap();

        for (x, y) in dtm.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
            assert_relative_eq!(step.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }
}
