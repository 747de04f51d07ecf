//! Linear algebra utilities.

use crate::error::{MathError, MathResult};

/// Pivots smaller than this are treated as zero.
const PIVOT_TOLERANCE: f64 = 1e-15;

/// Solves a tridiagonal system of equations (Thomas algorithm).
///
/// The system has the form:
/// ```text
/// | b[0]  c[0]   0    ...     0    | | x[0]   |   | d[0]   |
/// | a[0]  b[1]  c[1]  ...     0    | | x[1]   |   | d[1]   |
/// |  0    a[1]  b[2]  ...     0    | | x[2]   | = | d[2]   |
/// | ...   ...   ...   ...    ...   | | ...    |   | ...    |
/// |  0     0     0   a[n-2] b[n-1] | | x[n-1] |   | d[n-1] |
/// ```
///
/// # Arguments
///
/// * `a` - Lower diagonal (length n-1)
/// * `b` - Main diagonal (length n)
/// * `c` - Upper diagonal (length n-1)
/// * `d` - Right-hand side (length n)
///
/// # Errors
///
/// Returns `MathError::InvalidInput` for inconsistent lengths and
/// `MathError::SingularMatrix` when a pivot vanishes.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> MathResult<Vec<f64>> {
    let n = b.len();
    if n == 0 {
        return if a.is_empty() && c.is_empty() && d.is_empty() {
            Ok(vec![])
        } else {
            Err(MathError::invalid_input(
                "Tridiagonal system has inconsistent dimensions",
            ))
        };
    }

    if a.len() != n - 1 || c.len() != n - 1 || d.len() != n {
        return Err(MathError::invalid_input(
            "Tridiagonal system has inconsistent dimensions",
        ));
    }

    if b[0].abs() < PIVOT_TOLERANCE {
        return Err(MathError::SingularMatrix);
    }

    // Forward elimination
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if n > 1 {
        c_prime[0] = c[0] / b[0];
    }
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let denom = b[i] - a[i - 1] * c_prime[i - 1];
        if denom.abs() < PIVOT_TOLERANCE {
            return Err(MathError::SingularMatrix);
        }

        if i < n - 1 {
            c_prime[i] = c[i] / denom;
        }
        d_prime[i] = (d[i] - a[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = d_prime;
    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }

    Ok(x)
}
