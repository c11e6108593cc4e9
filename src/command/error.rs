//! Command error types.

use super::Command;
use crate::core::DeviceState;
use crate::readiness::Veto;
use thiserror::Error;

/// Errors a command reports to its caller.
///
/// None of these are fatal: the machine is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `times` outside the command's inclusive range
    #[error("{command} times must be between {min} and {max}, got {times}")]
    InvalidParameter {
        command: Command,
        times: i32,
        min: i32,
        max: i32,
    },

    /// A readiness check vetoed the action
    #[error("{command} blocked by readiness check: {veto}")]
    PreconditionFailed { command: Command, veto: Veto },

    /// The current state does not lead to the command's target state
    #[error("{command} is not allowed while the machine is {state}")]
    IllegalState { command: Command, state: DeviceState },
}
