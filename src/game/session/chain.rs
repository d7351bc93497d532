//! Level-based chain reaction game: a move budget and a target score per level.

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::config::chain::{BASE_MOVES, MIN_MOVES, TARGET_PER_LEVEL};
use crate::game::chain::{ChainEngine, ChainReport, EnergyCell};
use crate::game::error::ActionRejected;
use crate::game::grid::Grid;
use crate::game::rng::{ColorSource, RandomSource};
use crate::game::session::SessionStatus;

/// Score needed to clear `level`.
pub fn target_for_level(level: u32) -> u32 {
    TARGET_PER_LEVEL.saturating_mul(level)
}

/// Moves granted for `level`.
pub fn moves_for_level(level: u32) -> u32 {
    BASE_MOVES.saturating_sub(level).max(MIN_MOVES)
}

/// Serializable view of a chain session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub level: u32,
    pub score: u32,
    pub moves_left: u32,
    pub target: u32,
    pub status: SessionStatus,
    pub grid: Grid<EnergyCell>,
}

pub struct ChainSession<S = RandomSource> {
    engine: ChainEngine<S>,
    level: u32,
    score: u32,
    moves_left: u32,
    target: u32,
    status: SessionStatus,
}

impl<S: ColorSource> ChainSession<S> {
    /// Start at level 1 on the engine's current board.
    pub fn new(engine: ChainEngine<S>) -> Self {
        Self {
            engine,
            level: 1,
            score: 0,
            moves_left: moves_for_level(1),
            target: target_for_level(1),
            status: SessionStatus::Playing,
        }
    }

    pub fn engine(&self) -> &ChainEngine<S> {
        &self.engine
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Spend one move on `(row, col)`. Rejected clicks cost nothing.
    pub fn activate(&mut self, row: usize, col: usize) -> Result<ChainReport, ActionRejected> {
        if self.status != SessionStatus::Playing || self.moves_left == 0 {
            return Err(ActionRejected::GameOver);
        }
        let report = self.engine.activate(row, col).inspect_err(|err| {
            debug!("[ChainSession] Rejected activation ({}, {}): {}", row, col, err);
        })?;

        self.score = self.score.saturating_add(report.score);
        self.moves_left -= 1;
        if self.moves_left == 0 {
            self.status = if self.score >= self.target {
                SessionStatus::Won
            } else {
                SessionStatus::Lost
            };
            info!(
                "[ChainSession] Level {} ended {:?} with {}/{} points",
                self.level, self.status, self.score, self.target
            );
        }
        Ok(report)
    }

    /// Advance to the next level. Only allowed once the current level is won.
    pub fn next_level(&mut self) -> Result<(), ActionRejected> {
        if self.status != SessionStatus::Won {
            return Err(ActionRejected::LevelNotComplete);
        }
        self.level += 1;
        self.start_level();
        info!("[ChainSession] Level {} started, target {}", self.level, self.target);
        Ok(())
    }

    /// Back to level 1 with a fresh board.
    pub fn restart(&mut self) {
        self.level = 1;
        self.start_level();
        info!("[ChainSession] Restarted");
    }

    fn start_level(&mut self) {
        self.engine.regenerate();
        self.score = 0;
        self.target = target_for_level(self.level);
        self.moves_left = moves_for_level(self.level);
        self.status = SessionStatus::Playing;
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            level: self.level,
            score: self.score,
            moves_left: self.moves_left,
            target: self.target,
            status: self.status,
            grid: self.engine.grid().clone(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}
