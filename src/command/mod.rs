//! Undoable commands and the remote control that invokes them.
//!
//! A [`Command`] is a closed set of actions over a [`CoffeeMachine`]. Each
//! command validates its `times` parameter against its own inclusive range
//! before touching the machine, so an invalid call leaves the machine, its
//! action log and its control panel exactly as they were.
//!
//! Commands hold no reference to the machine; the caller lends it for the
//! duration of `execute`/`undo`.

mod error;
mod invoker;

pub use error::CommandError;
pub use invoker::{RemoteControl, UndoOutcome};

use crate::core::DeviceState;
use crate::device::CoffeeMachine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Brew 0–2 cups. Gated by the readiness chain.
    Brew,
    /// Run 0–1 cleaning cycles.
    Clean,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Clean => "clean",
        }
    }

    /// Inclusive range of accepted `times` values.
    pub fn valid_range(&self) -> RangeInclusive<i32> {
        match self {
            Self::Brew => 0..=2,
            Self::Clean => 0..=1,
        }
    }

    /// State the machine moves into when the command succeeds.
    pub fn target_state(&self) -> DeviceState {
        match self {
            Self::Brew => DeviceState::Brewing,
            Self::Clean => DeviceState::Cleaning,
        }
    }

    /// Check `times` against the valid range, returning it as a count.
    pub fn validate(&self, times: i32) -> Result<u32, CommandError> {
        let range = self.valid_range();
        if !range.contains(&times) {
            return Err(CommandError::InvalidParameter {
                command: *self,
                times,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(times.unsigned_abs())
    }

    /// Run the command against `machine`.
    pub fn execute(
        &self,
        machine: &mut CoffeeMachine,
        times: i32,
    ) -> Result<Execution, CommandError> {
        let count = self.validate(times).inspect_err(|err| {
            warn!(command = self.name(), times, error = %err, "command rejected");
        })?;

        match self {
            Self::Brew => machine.brew(count),
            Self::Clean => machine.clean(count),
        }
    }

    /// Reverse the command's physical effect. Returns the resulting state.
    pub fn undo(&self, machine: &mut CoffeeMachine) -> DeviceState {
        match self {
            Self::Brew => machine.unbrew(),
            Self::Clean => machine.unclean(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a successful command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub command: Command,
    pub times: u32,
    /// State the machine was left in
    pub state: DeviceState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceAction, Supplies};

    fn stocked_machine() -> CoffeeMachine {
        let mut machine = CoffeeMachine::new();
        *machine.supplies_mut() = Supplies::new(600, 400, true);
        machine
    }

    #[test]
    fn ranges_match_each_command() {
        assert_eq!(Command::Brew.valid_range(), 0..=2);
        assert_eq!(Command::Clean.valid_range(), 0..=1);
    }

    #[test]
    fn validate_accepts_bounds() {
        assert_eq!(Command::Brew.validate(0), Ok(0));
        assert_eq!(Command::Brew.validate(2), Ok(2));
        assert_eq!(Command::Clean.validate(1), Ok(1));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(
            Command::Clean.validate(2),
            Err(CommandError::InvalidParameter {
                command: Command::Clean,
                times: 2,
                min: 0,
                max: 1,
            })
        );
        assert!(Command::Brew.validate(-1).is_err());
        assert!(Command::Brew.validate(3).is_err());
    }

    #[test]
    fn invalid_parameter_leaves_machine_untouched() {
        let mut machine = stocked_machine();

        let result = Command::Brew.execute(&mut machine, 3);

        assert!(matches!(result, Err(CommandError::InvalidParameter { .. })));
        assert_eq!(machine.state(), DeviceState::Idle);
        assert!(machine.actions().is_empty());
        assert!(machine.history().is_empty());
        assert!(machine.panel().effects().is_empty());
    }

    #[test]
    fn brew_executes_and_advances() {
        let mut machine = stocked_machine();

        let execution = Command::Brew.execute(&mut machine, 2).unwrap();

        assert_eq!(execution.command, Command::Brew);
        assert_eq!(execution.times, 2);
        assert_eq!(execution.state, DeviceState::Brewing);
        assert_eq!(
            machine.actions(),
            &[DeviceAction::Brewed {
                cups: 2,
                strength: 1
            }]
        );
    }

    #[test]
    fn undo_brew_cancels() {
        let mut machine = stocked_machine();
        Command::Brew.execute(&mut machine, 1).unwrap();

        let state = Command::Brew.undo(&mut machine);

        assert_eq!(state, DeviceState::Cancelled);
        assert_eq!(machine.actions().last(), Some(&DeviceAction::BrewCancelled));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = Command::Brew.validate(5).unwrap_err();
        assert_eq!(err.to_string(), "brew times must be between 0 and 2, got 5");
    }
}
