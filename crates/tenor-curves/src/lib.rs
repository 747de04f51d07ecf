//! # Tenor Curves
//!
//! Term structures of interest rates for the Tenor library.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`IrCurve`], with discount factors, effective rates and
//!   forward rates derived from zero rates
//! - **Methods**: [`CurveMethod`] interpolations (linear, flat forward, step,
//!   cubic splines on rates or discount factors, composite) and parametric
//!   models (Nelson-Siegel, Svensson)
//! - **Curves**: [`Curve`] plus the [`BufferedCurve`] and [`CurveMap`]
//!   wrappers and the factor combinators
//! - **Configuration**: curve definitions from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use tenor_curves::prelude::*;
//!
//! let observation = Date::from_ymd(2015, 8, 3).unwrap();
//! let curve = Curve::new(
//!     "Curve Name",
//!     DayCountConvention::Actual365,
//!     CompoundingType::Simple,
//!     CurveMethod::Linear,
//!     observation,
//!     vec![11, 15, 50, 80],
//!     vec![0.10, 0.15, 0.14, 0.17],
//! )
//! .unwrap();
//!
//! let d1 = Date::from_ymd(2015, 8, 25).unwrap();
//! let d2 = Date::from_ymd(2015, 10, 10).unwrap();
//!
//! assert!((curve.zero_rate(d1).unwrap() - 0.148).abs() < 1e-12);
//! assert!((curve.forward_rate(d1, d2).unwrap() - 0.16134333771591897).abs() < 1e-12);
//! assert!((curve.discount_factor(d2).unwrap() - 0.9714060637029466).abs() < 1e-12);
//! assert!((curve.effective_rate_factor(d2).unwrap() - 1.0294356164383562).abs() < 1e-12);
//! assert!((curve.effective_rate(d2).unwrap() - 0.029435616438356238).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod curves;
pub mod error;
pub mod method;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{CurveConfig, CurveSetConfig};
    pub use crate::curves::{
        BufferedCurve, ComposeDivFactorCurve, ComposeProdFactorCurve, CompositeIRCurve, Curve,
        CurveMap,
    };
    pub use crate::error::{CurveError, CurveResult, ErrorKind};
    pub use crate::method::CurveMethod;
    pub use crate::traits::IrCurve;
}

pub use curves::{
    BufferedCurve, ComposeDivFactorCurve, ComposeProdFactorCurve, CompositeIRCurve, Curve,
    CurveMap,
};
pub use error::{CurveError, CurveResult, ErrorKind};
pub use method::CurveMethod;
pub use traits::IrCurve;
