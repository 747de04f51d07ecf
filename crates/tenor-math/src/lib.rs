//! # Tenor Math
//!
//! Numerical building blocks for the Tenor term structure library.
//!
//! This crate provides:
//!
//! - **Interpolation**: linear, step function and natural cubic spline
//!   interpolators, all extrapolating from their edge segments
//! - **Parametric Models**: Nelson-Siegel and Svensson zero rate models
//! - **Linear Algebra**: the tridiagonal solver behind spline construction
//!
//! Every interpolator validates its knots once at construction; evaluation
//! afterwards is plain arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, NelsonSiegel, StepInterpolator, Svensson,
    };
    pub use crate::linear_algebra::solve_tridiagonal;
}

pub use error::{MathError, MathResult};
