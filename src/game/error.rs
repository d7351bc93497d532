//! Rejected actions and configuration errors.
//!
//! Invalid clicks are expected during play, so nothing here is fatal: a
//! rejected action leaves the board untouched and the caller just carries on.
//! Every variant carries a stable code for the presentation layer.

use std::fmt;

use crate::game::types::Position;

/// Why an action was refused. The board is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejected {
    /// The coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The chain cell is already fully charged.
    Saturated(Position),
    /// Two cells are already pending a swap.
    SelectionFull,
    /// The session has ended (no moves left, or won/lost).
    GameOver,
    /// A level advance was requested before the level was won.
    LevelNotComplete,
}

impl ActionRejected {
    /// Unique error code (e.g. "OUT_OF_BOUNDS").
    pub fn code(&self) -> &'static str {
        match self {
            ActionRejected::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            ActionRejected::Saturated(_) => "CELL_SATURATED",
            ActionRejected::SelectionFull => "SELECTION_FULL",
            ActionRejected::GameOver => "GAME_OVER",
            ActionRejected::LevelNotComplete => "LEVEL_NOT_COMPLETE",
        }
    }
}

impl fmt::Display for ActionRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRejected::OutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) is outside the {size}x{size} grid")
            }
            ActionRejected::Saturated(pos) => {
                write!(f, "cell ({}, {}) is already fully charged", pos.row, pos.col)
            }
            ActionRejected::SelectionFull => write!(f, "two cells are already selected"),
            ActionRejected::GameOver => write!(f, "the game is over"),
            ActionRejected::LevelNotComplete => write!(f, "the current level has not been won"),
        }
    }
}

impl std::error::Error for ActionRejected {}

/// Invalid parameters passed when building a grid or an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    /// Rows of a hand-built grid do not form a square.
    NotSquare { rows: usize, found: usize },
    EmptyPalette,
    DuplicateColor,
    /// `max_energy` must be at least 1.
    ZeroMaxEnergy,
    /// A match needs at least two tiles.
    RunTooShort(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "grid size must be at least 1"),
            ConfigError::NotSquare { rows, found } => {
                write!(f, "grid has {rows} rows but a row of length {found}")
            }
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one color"),
            ConfigError::DuplicateColor => write!(f, "palette colors must be distinct"),
            ConfigError::ZeroMaxEnergy => write!(f, "max energy must be at least 1"),
            ConfigError::RunTooShort(len) => write!(f, "minimum run of {len} is too short"),
        }
    }
}

impl std::error::Error for ConfigError {}
