//! Transition history for the device state machine.
//!
//! Every state the device installs is recorded as an immutable
//! [`StateTransition`]. [`StateHistory::record`] returns a new history rather
//! than mutating in place.

use super::state::{DeviceEvent, DeviceState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: DeviceState,
    /// The state being transitioned to
    pub to: DeviceState,
    /// The request that caused the transition
    pub event: DeviceEvent,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Build a transition stamped with the current time.
    pub fn now(from: DeviceState, event: DeviceEvent) -> Self {
        Self {
            from,
            to: from.apply(event),
            event,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use percolator::core::{DeviceEvent, DeviceState, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(DeviceState::Idle, DeviceEvent::Next))
///     .record(StateTransition::now(DeviceState::Brewing, DeviceEvent::Cancel));
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![DeviceState::Idle, DeviceState::Brewing, DeviceState::Cancelled]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first entry is the `from` state of the first transition, followed
    /// by the `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<DeviceState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
