//! Curve implementations.
//!
//! - [`Curve`]: owns vertices or model parameters and evaluates a [`CurveMethod`](crate::method::CurveMethod)
//! - [`BufferedCurve`]: memoizes another curve's zero rates and rate factors by maturity
//! - [`CurveMap`]: applies a function to another curve's zero rates
//! - [`ComposeProdFactorCurve`], [`ComposeDivFactorCurve`], [`CompositeIRCurve`]:
//!   combine the discount factors of other curves

mod buffered;
mod composite;
mod curve;
mod evaluator;
mod map;

pub use buffered::BufferedCurve;
pub use composite::{ComposeDivFactorCurve, ComposeProdFactorCurve, CompositeIRCurve};
pub use curve::Curve;
pub use map::CurveMap;
