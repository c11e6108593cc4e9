//! Mediated coordination between the machine's subsystems.
//!
//! Subsystems never hold references to one another. Each one reports to a
//! [`Mediator`], which owns every participant and decides who reacts to an
//! event. Participants are identified by [`ParticipantId`] handles handed out
//! by the mediator that owns them.
//!
//! Two mediators share the same contract:
//! - [`CoffeeMediator`]: button, display and cleaner of the control panel
//! - [`LoggerMediator`]: a logging panel driven by string event tags
//!
//! [`Subscribers`] is the plain publish/subscribe list the device uses to
//! announce state changes.

mod coffee;
mod logger;
mod subscribers;

pub use coffee::{Button, Cleaner, CoffeeMediator, Display, MediatorEvent, PanelEffect};
pub use logger::{LogButton, LogCleaner, LogDisplay, LogEvent, LoggerMediator, ParseEventError};
pub use subscribers::{Subscribers, SubscriptionId};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a participant registered with a mediator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(usize);

impl ParticipantId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant#{}", self.0)
    }
}

/// Single arbitration point for a set of participants.
///
/// `notify` runs synchronously; any follow-up events a participant reports
/// are dispatched before it returns.
pub trait Mediator {
    type Event;

    fn notify(&mut self, sender: ParticipantId, event: Self::Event);
}
