//! Brew settings: the configuration holder the snapshot log restores into.

use super::{Originator, SettingsError};
use serde::{Deserialize, Serialize};

/// Brew strength, never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewSettings {
    strength: u32,
}

impl Default for BrewSettings {
    fn default() -> Self {
        Self { strength: 1 }
    }
}

impl BrewSettings {
    pub fn new(strength: u32) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.set_strength(strength)?;
        Ok(settings)
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// Rejects 0 and leaves the current strength in place.
    pub fn set_strength(&mut self, strength: u32) -> Result<(), SettingsError> {
        if strength == 0 {
            return Err(SettingsError::ZeroStrength);
        }
        self.strength = strength;
        Ok(())
    }
}

impl Originator for BrewSettings {
    type Value = u32;
    type Error = SettingsError;

    fn capture(&self) -> u32 {
        self.strength
    }

    fn restore(&mut self, value: u32) -> Result<(), SettingsError> {
        self.set_strength(value)
    }
}
