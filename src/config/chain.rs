//! Chain reaction configuration constants.
//!
//! Energy limits, scoring and level progression for the chain reaction board.
use super::game::POINTS_PER_UNIT;

/// Energy at which a cell detonates.
pub const MAX_ENERGY: u8 = 4;

/// Points for a single explosion.
pub const EXPLOSION_SCORE: u32 = POINTS_PER_UNIT;

/// Score required to clear level 1. Scales linearly with the level.
pub const TARGET_PER_LEVEL: u32 = 100;

/// Moves granted at level 0; each level removes one move.
pub const BASE_MOVES: u32 = 12;

/// Moves granted never fall below this floor.
pub const MIN_MOVES: u32 = 8;
