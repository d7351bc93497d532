use serde::{Serialize, Deserialize};

use crate::game::types::Color;

/// One tile of the match board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCell {
    pub color: Color,
    /// True while the tile is part of a pending swap.
    pub selected: bool,
}

impl TileCell {
    pub fn new(color: Color) -> Self {
        Self { color, selected: false }
    }
}
