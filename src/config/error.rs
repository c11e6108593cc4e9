//! Configuration error types.

use thiserror::Error;

/// A single rule broken by a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Readiness threshold '{field}' must be greater than zero")]
    ZeroThreshold { field: &'static str },

    #[error("Initial brew strength must be at least 1")]
    ZeroStrength,
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a machine configuration
    #[error("Configuration parse failed: {0}")]
    Parse(String),

    /// The configuration parsed but broke one or more rules
    #[error("Configuration invalid: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

pub(crate) fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
