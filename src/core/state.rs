//! Device states and the pure transition table.
//!
//! The coffee machine is always in exactly one [`DeviceState`]. Callers can
//! only request a [`DeviceEvent`]; the new state is computed here without side
//! effects and installed by the device context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational state of the coffee machine.
///
/// # Example
///
/// ```rust
/// use percolator::core::{DeviceEvent, DeviceState};
///
/// let state = DeviceState::default();
/// assert_eq!(state, DeviceState::Idle);
///
/// let state = state.apply(DeviceEvent::Next);
/// assert_eq!(state, DeviceState::Brewing);
///
/// let state = state.apply(DeviceEvent::Cancel);
/// assert_eq!(state, DeviceState::Cancelled);
///
/// // Cancelled is not terminal: next() resets the machine.
/// assert_eq!(state.next(), DeviceState::Idle);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum DeviceState {
    #[default]
    Idle,
    Brewing,
    Cleaning,
    Cancelled,
}

impl DeviceState {
    /// Every state, in table order.
    pub const ALL: [DeviceState; 4] = [
        DeviceState::Idle,
        DeviceState::Brewing,
        DeviceState::Cleaning,
        DeviceState::Cancelled,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Brewing => "Brewing",
            Self::Cleaning => "Cleaning",
            Self::Cancelled => "Cancelled",
        }
    }

    /// State reached by `next()`.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Brewing,
            Self::Brewing => Self::Cleaning,
            Self::Cleaning => Self::Idle,
            Self::Cancelled => Self::Idle,
        }
    }

    /// State reached by `cancel()`. Every state cancels to `Cancelled`.
    pub fn cancel(self) -> Self {
        match self {
            Self::Idle | Self::Brewing | Self::Cleaning | Self::Cancelled => Self::Cancelled,
        }
    }

    /// Apply an event to this state (pure).
    pub fn apply(self, event: DeviceEvent) -> Self {
        match event {
            DeviceEvent::Next => self.next(),
            DeviceEvent::Cancel => self.cancel(),
        }
    }

    /// Check if the machine is doing physical work.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Brewing | Self::Cleaning)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The only requests an external caller can make of the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DeviceEvent {
    Next,
    Cancel,
}

impl DeviceEvent {
    pub const ALL: [DeviceEvent; 2] = [DeviceEvent::Next, DeviceEvent::Cancel];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Cancel => "cancel",
        }
    }
}
