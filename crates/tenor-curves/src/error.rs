//! Error types for curve operations.
//!
//! Every [`CurveError`] falls into one of three [`ErrorKind`]s: problems
//! with the data a curve is built from, queries a curve cannot answer, and
//! numerical failures. Nothing is retried; errors surface at the offending
//! call.

use tenor_core::error::CoreError;
use tenor_core::types::Date;
use tenor_math::error::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Broad classification of curve errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid data or definition supplied when building a curve.
    Construction,
    /// A query outside what the curve can answer.
    Domain,
    /// A numerical failure such as a singular spline system.
    Arithmetic,
}

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Vertex arrays have different lengths.
    #[error("Vertex length mismatch: {dtm} days to maturity vs {zero_rates} zero rates")]
    LengthMismatch {
        /// Number of days-to-maturity values.
        dtm: usize,
        /// Number of zero rates.
        zero_rates: usize,
    },

    /// Not enough vertices.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Days to maturity are not strictly increasing.
    #[error("Days to maturity must be strictly increasing: dtm[{index}] = {current} after {previous}")]
    NonMonotonicTenors {
        /// Index of the offending vertex.
        index: usize,
        /// Value at index - 1.
        previous: i64,
        /// Value at index.
        current: i64,
    },

    /// A vertex lies before the observation date.
    #[error("Negative days to maturity: dtm[{index}] = {dtm}")]
    NegativeTenor {
        /// Index of the offending vertex.
        index: usize,
        /// The negative value.
        dtm: i64,
    },

    /// A parametric model received the wrong number of parameters.
    #[error("{method} requires {expected} parameters, got {got}")]
    ParameterArity {
        /// Name of the method.
        method: String,
        /// Number of parameters the method takes.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },

    /// The curve definition is invalid.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of the problem.
        reason: String,
    },

    /// Curves combined together do not share an observation date.
    #[error("Observation date mismatch: expected {expected}, got {got}")]
    ObservationDateMismatch {
        /// Observation date of the first curve.
        expected: Date,
        /// Observation date of the offending curve.
        got: Date,
    },

    /// Two curve definitions share a name.
    #[error("Duplicate curve name: {name}")]
    DuplicateCurve {
        /// The repeated name.
        name: String,
    },

    /// A curve definition could not be parsed.
    #[error("Config error: {reason}")]
    Config {
        /// Parser message.
        reason: String,
    },

    /// Query for a maturity before the observation date.
    #[error("Maturity {maturity} is before observation date {observation_date}")]
    MaturityBeforeObservation {
        /// The curve's observation date.
        observation_date: Date,
        /// The requested maturity.
        maturity: Date,
    },

    /// Forward start after the maturity.
    #[error("Forward date {forward_date} is after maturity {maturity}")]
    ForwardAfterMaturity {
        /// Start of the forward period.
        forward_date: Date,
        /// End of the forward period.
        maturity: Date,
    },

    /// Any other query the curve cannot answer.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the problem.
        reason: String,
    },

    /// Numerical failure.
    #[error("Arithmetic error: {reason}")]
    Arithmetic {
        /// Description of the failure.
        reason: String,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates an arithmetic error.
    #[must_use]
    pub fn arithmetic(reason: impl Into<String>) -> Self {
        Self::Arithmetic {
            reason: reason.into(),
        }
    }

    /// Creates a config error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates a parameter arity error.
    #[must_use]
    pub fn parameter_arity(method: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::ParameterArity {
            method: method.into(),
            expected,
            got,
        }
    }

    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MaturityBeforeObservation { .. }
            | Self::ForwardAfterMaturity { .. }
            | Self::Domain { .. }
            | Self::Core(CoreError::RateInversion { .. }) => ErrorKind::Domain,
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
            _ => ErrorKind::Construction,
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        if err.is_arithmetic() {
            return Self::arithmetic(err.to_string());
        }
        match err {
            MathError::InsufficientData { required, actual } => Self::InsufficientPoints {
                required,
                got: actual,
            },
            other => Self::invalid_curve(other.to_string()),
        }
    }
}
