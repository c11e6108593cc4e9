//! Core state machine types.
//!
//! This module contains the pure part of the device model:
//! - [`DeviceState`] and [`DeviceEvent`] with the transition table
//! - Immutable [`StateHistory`] of installed transitions
//!
//! Nothing in here performs I/O or logging; the device context in
//! [`crate::device`] is the imperative shell around it.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{DeviceEvent, DeviceState};
