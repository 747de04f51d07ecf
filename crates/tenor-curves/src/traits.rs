//! The curve capability trait.
//!
//! [`IrCurve`] is implemented by the owning [`Curve`](crate::curves::Curve)
//! and by every wrapper and combinator. Only `zero_rate` and the
//! convention accessors are required; discount factors, effective rates
//! and forward rates are derived from them.

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use crate::error::{CurveError, CurveResult};
use crate::method::CurveMethod;

/// An interest rate term structure.
///
/// Derived quantities follow
///
/// ```text
/// ERF(m)       = compounding.erf(zero_rate(m), yf(obs, m))
/// DF(m)        = 1 / ERF(m)
/// ER(m)        = ERF(m) - 1
/// DF(f, m)     = DF(m) / DF(f)
/// fwd_rate(f, m) = compounding rate implied by DF(f, m) over yf(f, m)
/// ```
///
/// At the observation date the year fraction is zero and `ERF = DF = 1`
/// without evaluating the zero rate.
pub trait IrCurve: Send + Sync {
    /// Identifier of the curve.
    fn name(&self) -> &str;

    /// Day count convention of the curve.
    fn daycount(&self) -> &DayCountConvention;

    /// Compounding convention of the curve.
    fn compounding(&self) -> CompoundingType;

    /// Method used to evaluate zero rates, if the curve has one.
    fn method(&self) -> Option<&CurveMethod> {
        None
    }

    /// Date the curve was observed.
    fn observation_date(&self) -> Date;

    /// Vertex days to maturity (empty for curves without vertices).
    fn dtm(&self) -> &[i64] {
        &[]
    }

    /// Vertex zero rates (empty for curves without vertices).
    fn zero_rates(&self) -> &[f64] {
        &[]
    }

    /// Model parameters (empty for curves without a parametric model).
    fn parameters(&self) -> &[f64] {
        &[]
    }

    /// Annualized zero rate to `maturity`.
    ///
    /// # Errors
    ///
    /// Returns a domain error for maturities before the observation date,
    /// and whatever the underlying evaluation reports.
    fn zero_rate(&self, maturity: Date) -> CurveResult<f64>;

    /// Year fraction from the observation date to `maturity`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::MaturityBeforeObservation` for past maturities.
    fn year_fraction(&self, maturity: Date) -> CurveResult<f64> {
        let observation_date = self.observation_date();
        if maturity < observation_date {
            return Err(CurveError::MaturityBeforeObservation {
                observation_date,
                maturity,
            });
        }
        Ok(self.daycount().year_fraction(observation_date, maturity)?)
    }

    /// Effective rate factor to `maturity`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `year_fraction` and `zero_rate`.
    fn effective_rate_factor(&self, maturity: Date) -> CurveResult<f64> {
        let t = self.year_fraction(maturity)?;
        if t == 0.0 {
            return Ok(1.0);
        }
        let rate = self.zero_rate(maturity)?;
        Ok(self.compounding().effective_rate_factor(rate, t))
    }

    /// Effective rate to `maturity`, `ERF - 1`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `effective_rate_factor`.
    fn effective_rate(&self, maturity: Date) -> CurveResult<f64> {
        Ok(self.effective_rate_factor(maturity)? - 1.0)
    }

    /// Discount factor to `maturity`, `1 / ERF`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `effective_rate_factor`.
    fn discount_factor(&self, maturity: Date) -> CurveResult<f64> {
        Ok(1.0 / self.effective_rate_factor(maturity)?)
    }

    /// Discount factor from `forward_date` to `maturity`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ForwardAfterMaturity` if `forward_date > maturity`.
    fn forward_discount_factor(&self, forward_date: Date, maturity: Date) -> CurveResult<f64> {
        if forward_date > maturity {
            return Err(CurveError::ForwardAfterMaturity {
                forward_date,
                maturity,
            });
        }
        Ok(self.discount_factor(maturity)? / self.discount_factor(forward_date)?)
    }

    /// Annualized forward rate from `forward_date` to `maturity`, in the
    /// curve's own compounding and day count.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ForwardAfterMaturity` if `forward_date > maturity`
    /// and a domain error if the period has a zero year fraction.
    fn forward_rate(&self, forward_date: Date, maturity: Date) -> CurveResult<f64> {
        let df = self.forward_discount_factor(forward_date, maturity)?;
        let t = self.daycount().year_fraction(forward_date, maturity)?;
        if t == 0.0 {
            return Err(CurveError::domain(format!(
                "forward period {forward_date} to {maturity} has zero length"
            )));
        }
        Ok(self.compounding().rate_from_discount_factor(df, t)?)
    }
}
