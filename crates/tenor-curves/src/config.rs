//! Declarative curve definitions.
//!
//! A [`CurveConfig`] holds everything needed to build a [`Curve`]: conventions,
//! method, observation date and either vertices or model parameters. Definitions
//! can be read from TOML or JSON; building applies the same validation as the
//! [`Curve`] constructors.
//!
//! ```toml
//! [[curve]]
//! name = "PRE"
//! daycount = { BDays252 = "Brazil" }
//! compounding = "Exponential"
//! method = "FlatForward"
//! observation_date = "2015-08-03"
//! dtm = [11, 15, 50, 80]
//! zero_rates = [0.10, 0.15, 0.14, 0.17]
//!
//! [[curve]]
//! name = "NS"
//! daycount = "Actual365"
//! compounding = "Continuous"
//! method = "NelsonSiegel"
//! observation_date = "2015-08-03"
//! parameters = [0.10, 0.20, 0.30, 5.0]
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CompoundingType, Date};

use crate::curves::Curve;
use crate::error::{CurveError, CurveResult};
use crate::method::CurveMethod;

// =============================================================================
// CURVE CONFIGURATION
// =============================================================================

/// Definition of a single curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Curve identifier.
    pub name: String,

    /// Day count convention.
    pub daycount: DayCountConvention,

    /// Compounding convention.
    #[serde(default)]
    pub compounding: CompoundingType,

    /// Interpolation method or parametric model.
    pub method: CurveMethod,

    /// Date the curve was observed.
    pub observation_date: Date,

    /// Vertex days to maturity, for interpolation methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtm: Option<Vec<i64>>,

    /// Vertex zero rates, for interpolation methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_rates: Option<Vec<f64>>,

    /// Model parameters, for parametric methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<f64>>,
}

impl CurveConfig {
    /// Parses a definition from TOML.
    pub fn from_toml_str(s: &str) -> CurveResult<Self> {
        toml::from_str(s).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Parses a definition from JSON.
    pub fn from_json_str(s: &str) -> CurveResult<Self> {
        serde_json::from_str(s).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Serializes the definition to JSON.
    pub fn to_json_string(&self) -> CurveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Interpolation methods need `dtm` and `zero_rates` and no
    /// `parameters`; parametric methods need `parameters` only. Anything
    /// else, and every error of the [`Curve`] constructors, is reported.
    pub fn build(&self) -> CurveResult<Curve> {
        if self.method.is_parametric() {
            if self.dtm.is_some() || self.zero_rates.is_some() {
                return Err(CurveError::invalid_curve(format!(
                    "curve '{}': {} takes parameters, not vertices",
                    self.name, self.method
                )));
            }
            let parameters = self.parameters.clone().ok_or_else(|| {
                CurveError::invalid_curve(format!("curve '{}': missing parameters", self.name))
            })?;
            return Curve::with_parameters(
                self.name.clone(),
                self.daycount.clone(),
                self.compounding,
                self.method.clone(),
                self.observation_date,
                parameters,
            );
        }

        if self.parameters.is_some() {
            return Err(CurveError::invalid_curve(format!(
                "curve '{}': {} takes vertices, not parameters",
                self.name, self.method
            )));
        }
        let (Some(dtm), Some(zero_rates)) = (&self.dtm, &self.zero_rates) else {
            return Err(CurveError::invalid_curve(format!(
                "curve '{}': {} needs both dtm and zero_rates",
                self.name, self.method
            )));
        };
        Curve::new(
            self.name.clone(),
            self.daycount.clone(),
            self.compounding,
            self.method.clone(),
            self.observation_date,
            dtm.clone(),
            zero_rates.clone(),
        )
    }
}

// =============================================================================
// CURVE SETS
// =============================================================================

/// Several curve definitions, as `[[curve]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSetConfig {
    /// The definitions.
    #[serde(default)]
    pub curve: Vec<CurveConfig>,
}

impl CurveSetConfig {
    /// Parses a set of definitions from TOML.
    pub fn from_toml_str(s: &str) -> CurveResult<Self> {
        toml::from_str(s).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Builds every curve, keyed by name.
    ///
    /// # Errors
    ///
    /// Fails on the first definition that does not build, or on a repeated
    /// name.
    pub fn build(&self) -> CurveResult<HashMap<String, Curve>> {
        let mut curves = HashMap::with_capacity(self.curve.len());
        for config in &self.curve {
            if curves.contains_key(&config.name) {
                return Err(CurveError::DuplicateCurve {
                    name: config.name.clone(),
                });
            }
            curves.insert(config.name.clone(), config.build()?);
        }
        tracing::debug!(count = curves.len(), "built curve set");
        Ok(curves)
    }
}
