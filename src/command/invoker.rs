//! Remote control: the single invocation surface for commands.

use super::{Command, CommandError, Execution};
use crate::builder::RemoteControlBuilder;
use crate::core::DeviceState;
use crate::device::CoffeeMachine;
use tracing::{info, warn};

/// Result of pressing undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The pending execution was reversed.
    Reverted {
        execution: Execution,
        state: DeviceState,
    },
    /// Nothing was pending, or the machine had already moved past the
    /// state the pending execution produced.
    NoOp,
}

impl UndoOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// Holds one current command and the most recent successful execution.
///
/// Replacing the command does not discard the pending execution: undo
/// reverses whatever ran last, as long as the machine is still in the state
/// that execution left it in.
///
/// # Example
///
/// ```rust
/// use percolator::command::{Command, RemoteControl, UndoOutcome};
/// use percolator::core::DeviceState;
/// use percolator::device::{CoffeeMachine, Supplies};
///
/// let mut machine = CoffeeMachine::new();
/// *machine.supplies_mut() = Supplies::new(600, 400, true);
///
/// let mut remote = RemoteControl::new(Command::Brew);
/// remote.press_do(&mut machine, 2).unwrap();
/// assert_eq!(machine.state(), DeviceState::Brewing);
///
/// assert!(!remote.press_undo(&mut machine).is_noop());
/// assert_eq!(machine.state(), DeviceState::Cancelled);
/// assert_eq!(remote.press_undo(&mut machine), UndoOutcome::NoOp);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteControl {
    command: Command,
    pending: Option<Execution>,
}

impl RemoteControl {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            pending: None,
        }
    }

    pub fn builder() -> RemoteControlBuilder {
        RemoteControlBuilder::new()
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn set_command(&mut self, command: Command) {
        info!(from = %self.command, to = %command, "remote command replaced");
        self.command = command;
    }

    /// The execution `press_undo` would reverse.
    pub fn pending(&self) -> Option<&Execution> {
        self.pending.as_ref()
    }

    /// Execute the current command. On failure any earlier pending
    /// execution is kept.
    pub fn press_do(
        &mut self,
        machine: &mut CoffeeMachine,
        times: i32,
    ) -> Result<Execution, CommandError> {
        let execution = self.command.execute(machine, times)?;
        self.pending = Some(execution.clone());
        Ok(execution)
    }

    /// Reverse the pending execution, if any.
    ///
    /// A pending execution is only reversible while the machine is still in
    /// the state it produced. Once the machine has moved on the entry is
    /// discarded and nothing changes.
    pub fn press_undo(&mut self, machine: &mut CoffeeMachine) -> UndoOutcome {
        let Some(execution) = self.pending.take() else {
            warn!("nothing to undo");
            return UndoOutcome::NoOp;
        };

        if machine.state() != execution.state {
            warn!(
                command = %execution.command,
                produced = %execution.state,
                current = %machine.state(),
                "pending execution already finished, nothing to undo"
            );
            return UndoOutcome::NoOp;
        }

        let state = execution.command.undo(machine);
        UndoOutcome::Reverted { execution, state }
    }
}
