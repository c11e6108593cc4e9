//! Build errors for the machine and remote control builders.

use crate::config::error::format_violations;
use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when assembling a machine or a remote control.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Remote control has no command. Call .command(command) before .build()")]
    MissingCommand,

    #[error("Machine configuration invalid: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
