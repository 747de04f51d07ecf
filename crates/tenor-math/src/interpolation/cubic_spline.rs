//! Natural cubic spline interpolation.

use super::{find_segment, validate_knots};
use crate::error::MathResult;
use crate::interpolation::Interpolator;
use crate::linear_algebra::solve_tridiagonal;

/// Natural cubic spline interpolation.
///
/// Piecewise cubic polynomials with continuous first and second derivatives;
/// "natural" means the second derivative is zero at both end knots. The
/// knot second derivatives are solved once at construction.
///
/// Outside the knots the first or last segment's cubic is evaluated as is.
/// With exactly two knots the spline is the straight line through them.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// assert!((spline.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// assert_eq!(spline.second_derivative(0.0).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 2 points, mismatched lengths,
    /// non-finite values or x values that are not strictly increasing, and
    /// `MathError::SingularMatrix` if the spline system cannot be solved.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;
        let y2s = natural_second_derivatives(&xs, &ys)?;
        Ok(Self { xs, ys, y2s })
    }

    /// Second derivatives at the knots.
    #[must_use]
    pub fn knot_second_derivatives(&self) -> &[f64] {
        &self.y2s
    }

    /// Second derivative of the spline at `x`.
    pub fn second_derivative(&self, x: f64) -> MathResult<f64> {
        let (i, _, a, b) = self.locate(x);
        Ok(a * self.y2s[i] + b * self.y2s[i + 1])
    }

    /// Segment index, width and the two barycentric weights of `x`.
    fn locate(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, h, a, b)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (i, h, a, b) = self.locate(x);

        let y = a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0;

        Ok(y)
    }
}

/// Knot second derivatives of the natural spline.
///
/// Interior knots satisfy
/// `h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (s[i] - s[i-1])`
/// where `s` are the segment slopes; `M[0] = M[n-1] = 0`.
fn natural_second_derivatives(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    if n < 3 {
        return Ok(y2s);
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slopes: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, width)| (w[1] - w[0]) / width)
        .collect();

    let m = n - 2;
    let lower: Vec<f64> = (1..m).map(|k| h[k]).collect();
    let diag: Vec<f64> = (0..m).map(|k| 2.0 * (h[k] + h[k + 1])).collect();
    let upper: Vec<f64> = (0..m - 1).map(|k| h[k + 1]).collect();
    let rhs: Vec<f64> = (0..m).map(|k| 6.0 * (slopes[k + 1] - slopes[k])).collect();

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;
    y2s[1..n - 1].copy_from_slice(&interior);

    Ok(y2s)
}
