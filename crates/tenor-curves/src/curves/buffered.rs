//! Buffered curve implementation.
//!
//! A `BufferedCurve` memoizes the zero rates and effective rate factors of
//! another curve by maturity date. Discount factors, effective rates and
//! forward rates are derived from the memoized factors, so repeated queries
//! for the same maturity evaluate the underlying curve once per quantity.
//!
//! Both quantities are taken from the underlying curve as it computes them.
//! Curves defined by their factors (the composites) would not survive a
//! rate to factor round trip bit for bit.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use crate::error::CurveResult;
use crate::method::CurveMethod;
use crate::traits::IrCurve;

/// A caching wrapper around a curve.
///
/// The cache never evicts and is never invalidated; it lives as long as the
/// wrapper. Lookup-or-insert is atomic per maturity, so concurrent first
/// queries for one date evaluate the underlying curve once. Errors are not
/// cached. Results are bit-identical to the underlying curve's.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
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
/// let buffered = BufferedCurve::new(Arc::new(curve));
/// let maturity = Date::from_ymd(2015, 10, 10).unwrap();
/// let df = buffered.discount_factor(maturity).unwrap();
/// assert!((df - 0.9714060637029466).abs() < 1e-12);
/// assert_eq!(buffered.len(), 1);
/// ```
pub struct BufferedCurve<C: IrCurve + ?Sized> {
    /// The underlying curve.
    underlying: Arc<C>,
    /// Memoized quantities by maturity.
    cache: DashMap<Date, CachedPoint>,
}

/// What has been evaluated so far for one maturity.
#[derive(Debug, Clone, Copy, Default)]
struct CachedPoint {
    rate: Option<f64>,
    factor: Option<f64>,
}

impl<C: IrCurve + ?Sized> std::fmt::Debug for BufferedCurve<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferedCurve")
            .field("underlying", &self.underlying.name())
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl<C: IrCurve + ?Sized> BufferedCurve<C> {
    /// Wraps a shared curve.
    #[must_use]
    pub fn new(underlying: Arc<C>) -> Self {
        Self {
            underlying,
            cache: DashMap::new(),
        }
    }

    /// The wrapped curve.
    #[must_use]
    pub fn underlying(&self) -> &Arc<C> {
        &self.underlying
    }

    /// Number of cached maturities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cached zero rate for `maturity`, without evaluating the curve.
    #[must_use]
    pub fn cached_rate(&self, maturity: Date) -> Option<f64> {
        self.cache.get(&maturity).and_then(|point| point.rate)
    }

    /// Cached effective rate factor for `maturity`, without evaluating the
    /// curve.
    #[must_use]
    pub fn cached_factor(&self, maturity: Date) -> Option<f64> {
        self.cache.get(&maturity).and_then(|point| point.factor)
    }

    /// Looks up one quantity of `maturity`, evaluating and storing it on a
    /// miss. The shard stays locked while `evaluate` runs.
    fn lookup(
        &self,
        maturity: Date,
        slot: fn(&mut CachedPoint) -> &mut Option<f64>,
        quantity: &'static str,
        evaluate: impl FnOnce() -> CurveResult<f64>,
    ) -> CurveResult<f64> {
        let hit = self.cache.get(&maturity).and_then(|point| {
            let mut copy = *point;
            *slot(&mut copy)
        });
        if let Some(value) = hit {
            return Ok(value);
        }

        let value = match self.cache.entry(maturity) {
            Entry::Occupied(mut entry) => {
                let cached = slot(entry.get_mut());
                if let Some(value) = *cached {
                    return Ok(value);
                }
                let value = evaluate()?;
                *cached = Some(value);
                value
            }
            Entry::Vacant(entry) => {
                let value = evaluate()?;
                let mut point = CachedPoint::default();
                *slot(&mut point) = Some(value);
                entry.insert(point);
                value
            }
        };

        tracing::trace!(
            curve = %self.underlying.name(),
            maturity = %maturity,
            quantity,
            value,
            "buffered curve cache miss"
        );
        Ok(value)
    }
}

impl<C: IrCurve> BufferedCurve<C> {
    /// Takes ownership of a curve and wraps it.
    #[must_use]
    pub fn from_curve(curve: C) -> Self {
        Self::new(Arc::new(curve))
    }
}

impl<C: IrCurve + ?Sized> IrCurve for BufferedCurve<C> {
    fn name(&self) -> &str {
        self.underlying.name()
    }

    fn daycount(&self) -> &DayCountConvention {
        self.underlying.daycount()
    }

    fn compounding(&self) -> CompoundingType {
        self.underlying.compounding()
    }

    fn method(&self) -> Option<&CurveMethod> {
        self.underlying.method()
    }

    fn observation_date(&self) -> Date {
        self.underlying.observation_date()
    }

    fn dtm(&self) -> &[i64] {
        self.underlying.dtm()
    }

    fn zero_rates(&self) -> &[f64] {
        self.underlying.zero_rates()
    }

    fn parameters(&self) -> &[f64] {
        self.underlying.parameters()
    }

    fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        self.lookup(maturity, |point| &mut point.rate, "zero_rate", || {
            self.underlying.zero_rate(maturity)
        })
    }

    fn effective_rate_factor(&self, maturity: Date) -> CurveResult<f64> {
        self.lookup(maturity, |point| &mut point.factor, "effective_rate_factor", || {
            self.underlying.effective_rate_factor(maturity)
        })
    }
}
