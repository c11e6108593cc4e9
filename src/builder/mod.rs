//! Builder API for assembling machines and remote controls.
//!
//! Assembly is where contract violations surface: a remote control without a
//! command, or a machine with an invalid configuration, fails here with a
//! [`BuildError`] instead of misbehaving later.
//!
//! # Example
//!
//! ```
//! use percolator::builder::BuildError;
//! use percolator::command::{Command, RemoteControl};
//! use percolator::device::{CoffeeMachine, Supplies};
//!
//! let machine = CoffeeMachine::builder()
//!     .supplies(Supplies::new(600, 400, true))
//!     .build()
//!     .unwrap();
//! assert!(machine.readiness().handle());
//!
//! let remote = RemoteControl::builder().command(Command::Brew).build();
//! assert!(remote.is_ok());
//!
//! let missing = RemoteControl::builder().build();
//! assert!(matches!(missing, Err(BuildError::MissingCommand)));
//! ```

pub mod error;
pub mod machine;
pub mod remote;

pub use error::BuildError;
pub use machine::CoffeeMachineBuilder;
pub use remote::RemoteControlBuilder;
