//! Percolator: an in-memory coffee machine model.
//!
//! The machine is a single stateful device. Before it brews, a chain of
//! readiness checks must approve; every action is an undoable command; its
//! progress is an explicit finite state machine; and its panel subsystems
//! talk to each other only through a mediator.
//!
//! # Components
//!
//! - **Readiness**: linked water / beans / cup checks with short-circuit veto
//! - **Commands**: `Brew` and `Clean`, invoked and undone through a remote control
//! - **State machine**: `Idle → Brewing → Cleaning → Idle`, with `cancel()` from anywhere
//! - **Mediator**: button, display and cleaner coordinated through one object
//! - **Memento**: a snapshot log for rolling back brew strength
//!
//! # Example
//!
//! ```rust
//! use percolator::command::{Command, RemoteControl};
//! use percolator::core::DeviceState;
//! use percolator::device::{CoffeeMachine, Supplies};
//! use percolator::memento::SnapshotLog;
//!
//! let mut machine = CoffeeMachine::builder()
//!     .supplies(Supplies::new(600, 400, true))
//!     .build()
//!     .unwrap();
//!
//! let mut strengths = SnapshotLog::new();
//! strengths.checkpoint(machine.settings());
//! machine.settings_mut().set_strength(3).unwrap();
//!
//! let mut remote = RemoteControl::new(Command::Brew);
//! remote.press_do(&mut machine, 2).unwrap();
//! assert_eq!(machine.state(), DeviceState::Brewing);
//! assert_eq!(machine.panel().display().current(), Some("Brewing"));
//!
//! remote.set_command(Command::Clean);
//! remote.press_do(&mut machine, 1).unwrap();
//! assert_eq!(machine.next(), DeviceState::Idle);
//!
//! assert_eq!(strengths.undo(machine.settings_mut()), Some(1));
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod core;
pub mod device;
pub mod mediator;
pub mod memento;
pub mod readiness;

// Re-export commonly used types
pub use builder::BuildError;
pub use command::{Command, CommandError, RemoteControl, UndoOutcome};
pub use config::MachineConfig;
pub use core::{DeviceEvent, DeviceState, StateHistory, StateTransition};
pub use device::{CoffeeMachine, Supplies};
pub use mediator::{CoffeeMediator, Mediator, MediatorEvent};
pub use memento::{BrewSettings, SnapshotLog};
pub use readiness::ReadinessChain;
