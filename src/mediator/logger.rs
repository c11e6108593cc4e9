//! Logging panel mediator driven by string event tags.

use super::{Mediator, ParticipantId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Events understood by the logging panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogEvent {
    BrewingButtonPress,
    CleaningStart,
}

impl LogEvent {
    /// Wire tag of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrewingButtonPress => "brewing button press",
            Self::CleaningStart => "cleaning start",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Unknown event tag '{0}'")]
    UnknownTag(String),
}

impl FromStr for LogEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brewing button press" => Ok(Self::BrewingButtonPress),
            "cleaning start" => Ok(Self::CleaningStart),
            other => Err(ParseEventError::UnknownTag(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogButton {
    presses: usize,
}

impl LogButton {
    fn press(&mut self) -> LogEvent {
        self.presses += 1;
        LogEvent::BrewingButtonPress
    }

    pub fn presses(&self) -> usize {
        self.presses
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogCleaner {
    runs: usize,
}

impl LogCleaner {
    fn clean(&mut self) -> LogEvent {
        self.runs += 1;
        LogEvent::CleaningStart
    }

    pub fn runs(&self) -> usize {
        self.runs
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogDisplay {
    lines: Vec<String>,
}

impl LogDisplay {
    fn display(&mut self, line: &str) {
        info!(line, "log display");
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Mediator for the logging panel.
///
/// # Example
///
/// ```rust
/// use percolator::mediator::{LogEvent, LoggerMediator, Mediator};
///
/// let mut panel = LoggerMediator::new();
/// let button = panel.button_id();
/// panel.notify(button, "brewing button press".parse::<LogEvent>().unwrap());
///
/// assert_eq!(panel.display().lines(), &["brewing button press", "cleaning start"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerMediator {
    button: LogButton,
    cleaner: LogCleaner,
    display: LogDisplay,
    button_id: ParticipantId,
    cleaner_id: ParticipantId,
    display_id: ParticipantId,
}

impl Default for LoggerMediator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerMediator {
    pub fn new() -> Self {
        Self {
            button: LogButton::default(),
            cleaner: LogCleaner::default(),
            display: LogDisplay::default(),
            button_id: ParticipantId::new(0),
            cleaner_id: ParticipantId::new(1),
            display_id: ParticipantId::new(2),
        }
    }

    pub fn button(&self) -> &LogButton {
        &self.button
    }

    pub fn cleaner(&self) -> &LogCleaner {
        &self.cleaner
    }

    pub fn display(&self) -> &LogDisplay {
        &self.display
    }

    pub fn button_id(&self) -> ParticipantId {
        self.button_id
    }

    pub fn cleaner_id(&self) -> ParticipantId {
        self.cleaner_id
    }

    pub fn display_id(&self) -> ParticipantId {
        self.display_id
    }

    pub fn press_button(&mut self) {
        let event = self.button.press();
        self.notify(self.button_id, event);
    }
}

impl Mediator for LoggerMediator {
    type Event = LogEvent;

    fn notify(&mut self, sender: ParticipantId, event: LogEvent) {
        debug!(%sender, %event, "logger mediator received event");

        match event {
            LogEvent::BrewingButtonPress => {
                info!("mediator start brew");
                self.display.display(event.as_str());
                let follow_up = self.cleaner.clean();
                self.notify(self.cleaner_id, follow_up);
            }
            LogEvent::CleaningStart => {
                info!("mediator start cleaning");
                self.display.display(event.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_both_ways() {
        for event in [LogEvent::BrewingButtonPress, LogEvent::CleaningStart] {
            assert_eq!(event.as_str().parse::<LogEvent>(), Ok(event));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "cleanning start".parse::<LogEvent>(),
            Err(ParseEventError::UnknownTag("cleanning start".to_string()))
        );
    }

    #[test]
    fn button_press_displays_both_tags_in_order() {
        let mut mediator = LoggerMediator::new();
        mediator.press_button();

        assert_eq!(mediator.button().presses(), 1);
        assert_eq!(mediator.cleaner().runs(), 1);
        assert_eq!(
            mediator.display().lines(),
            &["brewing button press", "cleaning start"]
        );
    }

    #[test]
    fn cleaning_start_only_displays() {
        let mut mediator = LoggerMediator::new();
        let sender = mediator.cleaner_id();
        mediator.notify(sender, LogEvent::CleaningStart);

        assert_eq!(mediator.cleaner().runs(), 0);
        assert_eq!(mediator.display().lines(), &["cleaning start"]);
    }

    #[test]
    fn participants_have_distinct_ids() {
        let mediator = LoggerMediator::new();
        assert_ne!(mediator.button_id(), mediator.cleaner_id());
        assert_ne!(mediator.cleaner_id(), mediator.display_id());
    }
}
