//! Machine configuration.
//!
//! Configuration is plain serde data with defaults for every field. Validation
//! uses Stillwater's `Validation` so that every broken rule is reported in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use percolator::config::MachineConfig;
//!
//! let config = MachineConfig::from_json(r#"{ "readiness": { "water_min": 450 } }"#).unwrap();
//! assert_eq!(config.readiness.water_min, 450);
//! assert_eq!(config.readiness.beans_min, 300);
//!
//! assert!(MachineConfig::from_json(r#"{ "initial_strength": 0 }"#).is_err());
//! ```

use crate::device::Supplies;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Minimum supply levels the readiness chain requires before brewing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessThresholds {
    pub water_min: u32,
    pub beans_min: u32,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            water_min: 500,
            beans_min: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub readiness: ReadinessThresholds,

    /// Supplies loaded when the machine is assembled
    pub supplies: Supplies,

    /// Brew strength the settings holder starts with
    pub initial_strength: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            readiness: ReadinessThresholds::default(),
            supplies: Supplies::default(),
            initial_strength: 1,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validate every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(non_zero(self.readiness.water_min, "water_min"));
        checks.push(non_zero(self.readiness.beans_min, "beans_min"));

        let strength = if self.initial_strength == 0 {
            Validation::fail(ConfigViolation::ZeroStrength)
        } else {
            Validation::success(())
        };
        checks.push(strength);

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigViolation>> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

fn non_zero(value: u32, field: &'static str) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if value == 0 {
        Validation::fail(ConfigViolation::ZeroThreshold { field })
    } else {
        Validation::success(())
    }
}
