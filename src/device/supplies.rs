//! Consumables the readiness chain inspects.

use serde::{Deserialize, Serialize};

/// Water, beans and cup presence as currently loaded into the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplies {
    pub water: u32,
    pub beans: u32,
    pub cup_present: bool,
}

impl Supplies {
    pub fn new(water: u32, beans: u32, cup_present: bool) -> Self {
        Self {
            water,
            beans,
            cup_present,
        }
    }

    /// Top up the water tank.
    pub fn fill_water(&mut self, amount: u32) {
        self.water = self.water.saturating_add(amount);
    }

    /// Top up the bean hopper.
    pub fn fill_beans(&mut self, amount: u32) {
        self.beans = self.beans.saturating_add(amount);
    }

    pub fn place_cup(&mut self) {
        self.cup_present = true;
    }

    pub fn remove_cup(&mut self) {
        self.cup_present = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_supplies_are_empty() {
        assert_eq!(Supplies::default(), Supplies::new(0, 0, false));
    }

    #[test]
    fn fill_adds_to_existing_level() {
        let mut supplies = Supplies::new(100, 50, false);
        supplies.fill_water(450);
        supplies.fill_beans(250);

        assert_eq!(supplies.water, 550);
        assert_eq!(supplies.beans, 300);
    }

    #[test]
    fn fill_saturates_instead_of_overflowing() {
        let mut supplies = Supplies::new(u32::MAX - 1, 0, false);
        supplies.fill_water(10);
        assert_eq!(supplies.water, u32::MAX);
    }

    #[test]
    fn cup_can_be_placed_and_removed() {
        let mut supplies = Supplies::default();
        supplies.place_cup();
        assert!(supplies.cup_present);
        supplies.remove_cup();
        assert!(!supplies.cup_present);
    }
}
