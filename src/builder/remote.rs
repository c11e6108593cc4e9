//! Builder for remote controls.

use crate::builder::error::BuildError;
use crate::command::{Command, RemoteControl};

/// Builder for a [`RemoteControl`]. A remote without a command cannot be built.
#[derive(Debug, Default)]
pub struct RemoteControlBuilder {
    command: Option<Command>,
}

impl RemoteControlBuilder {
    pub fn new() -> Self {
        Self { command: None }
    }

    /// Set the initial command (required).
    pub fn command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn build(self) -> Result<RemoteControl, BuildError> {
        let command = self.command.ok_or(BuildError::MissingCommand)?;
        Ok(RemoteControl::new(command))
    }
}
