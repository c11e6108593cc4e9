//! Control panel mediator: button, display and cleaner.

use super::{Mediator, ParticipantId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Events exchanged on the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediatorEvent {
    ButtonPressed,
    CleaningStarted,
    CleaningCompleted,
}

/// Observable effect the mediator caused on a participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    DisplayShown(String),
    CleanerRan,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Button {
    presses: usize,
}

impl Button {
    fn press(&mut self) -> MediatorEvent {
        self.presses += 1;
        info!(presses = self.presses, "button pressed");
        MediatorEvent::ButtonPressed
    }

    pub fn presses(&self) -> usize {
        self.presses
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Display {
    messages: Vec<String>,
}

impl Display {
    fn show(&mut self, message: &str) {
        info!(text = message, "display updated");
        self.messages.push(message.to_string());
    }

    /// What the display currently shows.
    pub fn current(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Every message shown, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cleaner {
    cycles: usize,
}

impl Cleaner {
    /// Begin a cleaning cycle ordered by a cleaning command.
    fn start(&mut self) -> MediatorEvent {
        self.cycles += 1;
        info!(cycle = self.cycles, "cleaner starting cycle");
        MediatorEvent::CleaningStarted
    }

    /// Run one cleaning cycle and report completion.
    fn clean(&mut self) -> MediatorEvent {
        self.cycles += 1;
        info!(cycle = self.cycles, "cleaner running");
        MediatorEvent::CleaningCompleted
    }

    /// Cycles run, whether after a button press or for a cleaning command.
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}

/// Mediator owning the control panel's three participants.
///
/// # Example
///
/// ```rust
/// use percolator::mediator::{CoffeeMediator, PanelEffect};
///
/// let mut panel = CoffeeMediator::new();
/// panel.press_button();
///
/// assert_eq!(
///     panel.effects(),
///     &[PanelEffect::DisplayShown("Brewing".to_string()), PanelEffect::CleanerRan]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoffeeMediator {
    button: Button,
    display: Display,
    cleaner: Cleaner,
    button_id: ParticipantId,
    display_id: ParticipantId,
    cleaner_id: ParticipantId,
    effects: Vec<PanelEffect>,
}

impl Default for CoffeeMediator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoffeeMediator {
    pub fn new() -> Self {
        Self::with_participants(Button::default(), Display::default(), Cleaner::default())
    }

    /// Wire a mediator around existing participants.
    pub fn with_participants(button: Button, display: Display, cleaner: Cleaner) -> Self {
        Self {
            button,
            display,
            cleaner,
            button_id: ParticipantId::new(0),
            display_id: ParticipantId::new(1),
            cleaner_id: ParticipantId::new(2),
            effects: Vec::new(),
        }
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    pub fn button_id(&self) -> ParticipantId {
        self.button_id
    }

    pub fn display_id(&self) -> ParticipantId {
        self.display_id
    }

    pub fn cleaner_id(&self) -> ParticipantId {
        self.cleaner_id
    }

    /// Press the button; it reports to the mediator.
    pub fn press_button(&mut self) {
        let event = self.button.press();
        self.notify(self.button_id, event);
    }

    /// The cleaner starts a cycle for a cleaning command and reports it.
    pub fn cleaning_started(&mut self) {
        let event = self.cleaner.start();
        self.notify(self.cleaner_id, event);
    }

    /// Effects caused so far, in dispatch order.
    pub fn effects(&self) -> &[PanelEffect] {
        &self.effects
    }

    fn role_of(&self, id: ParticipantId) -> Option<&'static str> {
        if id == self.button_id {
            Some("button")
        } else if id == self.display_id {
            Some("display")
        } else if id == self.cleaner_id {
            Some("cleaner")
        } else {
            None
        }
    }

    fn show(&mut self, message: &str) {
        self.display.show(message);
        self.effects.push(PanelEffect::DisplayShown(message.to_string()));
    }
}

impl Mediator for CoffeeMediator {
    type Event = MediatorEvent;

    fn notify(&mut self, sender: ParticipantId, event: MediatorEvent) {
        match self.role_of(sender) {
            Some(role) => debug!(%sender, role, ?event, "mediator received event"),
            None => warn!(%sender, ?event, "mediator received event from unknown participant"),
        }

        match event {
            MediatorEvent::ButtonPressed => {
                info!("mediator starting brew");
                self.show("Brewing");
                let follow_up = self.cleaner.clean();
                self.effects.push(PanelEffect::CleanerRan);
                self.notify(self.cleaner_id, follow_up);
            }
            MediatorEvent::CleaningStarted => {
                info!("mediator starting cleaning");
                self.show("Cleaning");
            }
            MediatorEvent::CleaningCompleted => {
                info!("mediator end cleaning");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_press_shows_brewing_then_runs_cleaner() {
        let mut mediator = CoffeeMediator::new();
        let sender = mediator.button_id();

        mediator.notify(sender, MediatorEvent::ButtonPressed);

        assert_eq!(
            mediator.effects(),
            &[
                PanelEffect::DisplayShown("Brewing".to_string()),
                PanelEffect::CleanerRan,
            ]
        );
        assert_eq!(mediator.display().current(), Some("Brewing"));
        assert_eq!(mediator.cleaner().cycles(), 1);
    }

    #[test]
    fn press_button_goes_through_the_mediator() {
        let mut mediator = CoffeeMediator::new();
        mediator.press_button();
        mediator.press_button();

        assert_eq!(mediator.button().presses(), 2);
        assert_eq!(mediator.cleaner().cycles(), 2);
        assert_eq!(mediator.display().messages().len(), 2);
    }

    #[test]
    fn cleaning_completed_has_no_cascade() {
        let mut mediator = CoffeeMediator::new();
        let sender = mediator.cleaner_id();

        mediator.notify(sender, MediatorEvent::CleaningCompleted);

        assert!(mediator.effects().is_empty());
        assert!(mediator.display().current().is_none());
        assert_eq!(mediator.cleaner().cycles(), 0);
    }

    #[test]
    fn cleaning_command_runs_the_cleaner_and_updates_display() {
        let mut mediator = CoffeeMediator::new();
        mediator.cleaning_started();

        assert_eq!(
            mediator.effects(),
            &[PanelEffect::DisplayShown("Cleaning".to_string())]
        );
        assert_eq!(mediator.cleaner().cycles(), 1);
        assert_eq!(mediator.button().presses(), 0);
    }

    #[test]
    fn cleaning_started_event_alone_does_not_run_the_cleaner() {
        let mut mediator = CoffeeMediator::new();
        let sender = mediator.cleaner_id();

        mediator.notify(sender, MediatorEvent::CleaningStarted);

        assert_eq!(mediator.display().current(), Some("Cleaning"));
        assert_eq!(mediator.cleaner().cycles(), 0);
    }

    #[test]
    fn unknown_sender_is_still_dispatched() {
        let mut mediator = CoffeeMediator::new();
        mediator.notify(ParticipantId::new(99), MediatorEvent::CleaningStarted);

        assert_eq!(mediator.display().current(), Some("Cleaning"));
    }

    #[test]
    fn participants_have_distinct_ids() {
        let mediator = CoffeeMediator::new();
        assert_ne!(mediator.button_id(), mediator.display_id());
        assert_ne!(mediator.display_id(), mediator.cleaner_id());
        assert_ne!(mediator.button_id(), mediator.cleaner_id());
    }
}
