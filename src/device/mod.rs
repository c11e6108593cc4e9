//! The coffee machine: device context around the pure state machine.
//!
//! [`CoffeeMachine`] is the single mutable resource of the crate. It owns the
//! current [`DeviceState`], the transition history, the supplies, the brew
//! settings and the control panel mediator.
//!
//! Within one command the order is fixed:
//! 1. state gate (the current state must lead to the command's target)
//! 2. readiness chain (brew only)
//! 3. physical action, appended to the action log
//! 4. state transition, recorded in history and published to subscribers
//! 5. mediator notification
//!
//! Every mutating operation takes `&mut self`. Callers that share a machine
//! between threads must serialize access themselves, e.g. behind a mutex.

mod supplies;

pub use supplies::Supplies;

use crate::builder::CoffeeMachineBuilder;
use crate::command::{Command, CommandError, Execution};
use crate::config::{MachineConfig, ReadinessThresholds};
use crate::core::{DeviceEvent, DeviceState, StateHistory, StateTransition};
use crate::mediator::{CoffeeMediator, Subscribers, SubscriptionId};
use crate::memento::BrewSettings;
use crate::readiness::ReadinessChain;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Physical side effect performed by the machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceAction {
    Brewed { cups: u32, strength: u32 },
    BrewCancelled,
    Cleaned { cycles: u32 },
    CleanCancelled,
}

/// Serializable point-in-time view of the machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineStatus {
    pub state: DeviceState,
    pub supplies: Supplies,
    pub strength: u32,
    pub transitions: usize,
    pub actions: usize,
}

#[derive(Debug)]
pub struct CoffeeMachine {
    state: DeviceState,
    history: StateHistory,
    supplies: Supplies,
    thresholds: ReadinessThresholds,
    settings: BrewSettings,
    actions: Vec<DeviceAction>,
    panel: CoffeeMediator,
    subscribers: Subscribers<StateTransition>,
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CoffeeMachine {
    /// A machine with the default configuration: empty supplies, idle.
    pub fn new() -> Self {
        Self::assemble(&MachineConfig::default(), CoffeeMediator::new())
    }

    pub fn builder() -> CoffeeMachineBuilder {
        CoffeeMachineBuilder::new()
    }

    pub(crate) fn assemble(config: &MachineConfig, panel: CoffeeMediator) -> Self {
        Self {
            state: DeviceState::default(),
            history: StateHistory::new(),
            supplies: config.supplies,
            thresholds: config.readiness,
            // builders validate the config first; a zero strength never gets here
            settings: BrewSettings::new(config.initial_strength).unwrap_or_default(),
            actions: Vec::new(),
            panel,
            subscribers: Subscribers::new(),
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn supplies(&self) -> &Supplies {
        &self.supplies
    }

    pub fn supplies_mut(&mut self) -> &mut Supplies {
        &mut self.supplies
    }

    pub fn thresholds(&self) -> &ReadinessThresholds {
        &self.thresholds
    }

    pub fn settings(&self) -> &BrewSettings {
        &self.settings
    }

    /// The configuration holder a [`SnapshotLog`](crate::memento::SnapshotLog)
    /// restores into.
    pub fn settings_mut(&mut self) -> &mut BrewSettings {
        &mut self.settings
    }

    /// Physical actions performed so far, oldest first.
    pub fn actions(&self) -> &[DeviceAction] {
        &self.actions
    }

    pub fn panel(&self) -> &CoffeeMediator {
        &self.panel
    }

    /// Readiness chain over the current supplies.
    pub fn readiness(&self) -> ReadinessChain {
        ReadinessChain::standard(&self.supplies, &self.thresholds)
    }

    /// Advance to the next state in the cycle.
    pub fn next(&mut self) -> DeviceState {
        self.transition(DeviceEvent::Next)
    }

    /// Cancel whatever the machine is doing.
    pub fn cancel(&mut self) -> DeviceState {
        self.transition(DeviceEvent::Cancel)
    }

    /// Register a handler for every installed transition.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&StateTransition) + Send + 'static,
    {
        self.subscribers.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            state: self.state,
            supplies: self.supplies,
            strength: self.settings.strength(),
            transitions: self.history.len(),
            actions: self.actions.len(),
        }
    }

    pub(crate) fn brew(&mut self, cups: u32) -> Result<Execution, CommandError> {
        self.ensure_permitted(Command::Brew)?;
        self.readiness()
            .inspect()
            .into_result()
            .map_err(|veto| CommandError::PreconditionFailed {
                command: Command::Brew,
                veto,
            })?;

        let strength = self.settings.strength();
        info!(cups, strength, "brewing coffee");
        self.actions.push(DeviceAction::Brewed { cups, strength });

        let state = self.next();
        self.panel.press_button();

        Ok(Execution {
            command: Command::Brew,
            times: cups,
            state,
        })
    }

    pub(crate) fn clean(&mut self, cycles: u32) -> Result<Execution, CommandError> {
        self.ensure_permitted(Command::Clean)?;

        info!(cycles, "cleaning coffee machine");
        self.actions.push(DeviceAction::Cleaned { cycles });

        let state = self.next();
        self.panel.cleaning_started();

        Ok(Execution {
            command: Command::Clean,
            times: cycles,
            state,
        })
    }

    pub(crate) fn unbrew(&mut self) -> DeviceState {
        info!("brewing cancelled");
        self.actions.push(DeviceAction::BrewCancelled);
        self.cancel()
    }

    pub(crate) fn unclean(&mut self) -> DeviceState {
        info!("cleaning cancelled");
        self.actions.push(DeviceAction::CleanCancelled);
        self.cancel()
    }

    fn ensure_permitted(&self, command: Command) -> Result<(), CommandError> {
        if self.state.next() == command.target_state() {
            return Ok(());
        }

        warn!(command = command.name(), state = %self.state, "command not permitted in current state");
        Err(CommandError::IllegalState {
            command,
            state: self.state,
        })
    }

    fn transition(&mut self, event: DeviceEvent) -> DeviceState {
        debug!(state = %self.state, event = event.name(), "current state");

        match (self.state, event) {
            (DeviceState::Cancelled, DeviceEvent::Cancel) => info!("coffee already cancelled"),
            (DeviceState::Cancelled, DeviceEvent::Next) => info!("coffee reset after cancel"),
            (state, DeviceEvent::Cancel) => info!(%state, "coffee cancelled"),
            (DeviceState::Idle, DeviceEvent::Next) => info!("coffee going to brew"),
            (DeviceState::Brewing, DeviceEvent::Next) => info!("coffee brewed, going to clean"),
            (DeviceState::Cleaning, DeviceEvent::Next) => info!("coffee cleaned, going idle"),
        }

        self.set_state(StateTransition::now(self.state, event))
    }

    fn set_state(&mut self, transition: StateTransition) -> DeviceState {
        self.state = transition.to;
        info!(from = %transition.from, to = %transition.to, "state installed");

        self.history = self.history.record(transition.clone());
        debug!(transitions = self.history.len(), "transition recorded");
        self.subscribers.publish(&transition);
        self.state
    }
}
