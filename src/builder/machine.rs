//! Builder for assembling coffee machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::device::{CoffeeMachine, Supplies};
use crate::mediator::CoffeeMediator;

/// Builder for assembling a [`CoffeeMachine`] with a fluent API.
#[derive(Debug, Default)]
pub struct CoffeeMachineBuilder {
    config: Option<MachineConfig>,
    supplies: Option<Supplies>,
    panel: Option<CoffeeMediator>,
}

impl CoffeeMachineBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            supplies: None,
            panel: None,
        }
    }

    /// Use this configuration instead of the defaults.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the configured supplies.
    pub fn supplies(mut self, supplies: Supplies) -> Self {
        self.supplies = Some(supplies);
        self
    }

    /// Wire the machine to an existing control panel.
    pub fn panel(mut self, panel: CoffeeMediator) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Build the machine.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<CoffeeMachine, BuildError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(supplies) = self.supplies {
            config.supplies = supplies;
        }
        config.check().map_err(BuildError::InvalidConfig)?;

        let panel = self.panel.unwrap_or_default();
        Ok(CoffeeMachine::assemble(&config, panel))
    }
}
