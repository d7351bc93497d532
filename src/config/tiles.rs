//! Tile match configuration constants.
use super::game::POINTS_PER_UNIT;

/// Points for each tile removed by a match.
pub const MATCH_SCORE: u32 = POINTS_PER_UNIT;

/// Shortest run of identical colors that counts as a match.
pub const MIN_RUN: usize = 3;

/// Upper bound on settle steps performed by a single stabilize call.
pub const MAX_SETTLE_STEPS: usize = 64;
