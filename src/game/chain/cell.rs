use serde::{Serialize, Deserialize};

use crate::game::types::Color;

/// One orb of the chain reaction board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCell {
    pub color: Color,
    pub energy: u8,
    /// Set only while a resolution pass is running.
    #[serde(skip)]
    pub exploding: bool,
}

impl EnergyCell {
    pub fn new(color: Color, energy: u8) -> Self {
        Self { color, energy, exploding: false }
    }

    pub fn is_saturated(&self, max_energy: u8) -> bool {
        self.energy >= max_energy
    }

    /// Add one unit of energy without going past `max_energy`.
    pub fn charge(&mut self, max_energy: u8) {
        self.energy = self.energy.saturating_add(1).min(max_energy);
    }
}
