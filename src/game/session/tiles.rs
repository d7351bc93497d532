//! Endless tile match game: score and swap counter.

use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::game::error::ActionRejected;
use crate::game::grid::Grid;
use crate::game::rng::{ColorSource, RandomSource};
use crate::game::tiles::{CollapseReport, MatchEngine, SelectOutcome, TileCell};
use crate::game::types::Position;

/// Serializable view of a tile match session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub score: u32,
    pub moves: u32,
    pub selection: Vec<Position>,
    pub grid: Grid<TileCell>,
}

pub struct MatchSession<S = RandomSource> {
    engine: MatchEngine<S>,
    score: u32,
    moves: u32,
}

impl<S: ColorSource> MatchSession<S> {
    pub fn new(engine: MatchEngine<S>) -> Self {
        Self { engine, score: 0, moves: 0 }
    }

    pub fn engine(&self) -> &MatchEngine<S> {
        &self.engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Swaps performed so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Forward a click to the engine. An adjacent swap counts as a move even
    /// when it matches nothing.
    pub fn select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, ActionRejected> {
        let outcome = self.engine.select(row, col).inspect_err(|err| {
            debug!("[MatchSession] Rejected selection ({}, {}): {}", row, col, err);
        })?;
        if let SelectOutcome::Swapped(_) = outcome {
            self.moves += 1;
        }
        self.score = self.score.saturating_add(outcome.score());
        Ok(outcome)
    }

    /// One detect + collapse step on the current board.
    pub fn settle(&mut self) -> CollapseReport {
        let report = self.engine.settle();
        self.score = self.score.saturating_add(report.score);
        report
    }

    /// Settle until no run is left. Returns the points earned.
    pub fn stabilize(&mut self) -> u32 {
        let earned: u32 = self.engine.stabilize().iter().map(|step| step.score).sum();
        self.score = self.score.saturating_add(earned);
        earned
    }

    /// Fresh board, zero score and moves.
    pub fn new_game(&mut self) {
        self.engine.regenerate();
        self.score = 0;
        self.moves = 0;
        info!("[MatchSession] New game");
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            score: self.score,
            moves: self.moves,
            selection: self.engine.selection().to_vec(),
            grid: self.engine.grid().clone(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::ScriptedSource;
    use crate::game::tiles::MatchSettings;
    use crate::game::types::{Color, Palette};

    /// Checkerboard of Teal/Pink with Reds at (0,0), (0,1) and (0,3):
    /// swapping (0,2) and (0,3) lines up three reds.
    fn session() -> MatchSession<ScriptedSource> {
        let grid = Grid::generate(6, |p| {
            let color = match (p.row, p.col) {
                (0, 0) | (0, 1) | (0, 3) => Color::Red,
                (r, c) if (r + c) % 2 == 0 => Color::Teal,
                _ => Color::Pink,
            };
            TileCell::new(color)
        })
        .expect("grid");
        let engine = MatchEngine::with_grid(
            MatchSettings::default(),
            Palette::tiles(),
            grid,
            ScriptedSource::new(vec![1, 2, 3]),
        )
        .expect("engine");
        MatchSession::new(engine)
    }

    #[test]
    fn test_swap_scores_and_counts_a_move() {
        let mut session = session();
        session.select(0, 2).expect("first");
        let outcome = session.select(0, 3).expect("second");

        assert_eq!(outcome.score(), 30);
        assert_eq!(session.score(), 30);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_non_adjacent_pair_is_not_a_move() {
        let mut session = session();
        session.select(0, 0).expect("first");
        session.select(4, 4).expect("second");
        assert_eq!(session.moves(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_new_game_clears_counters() {
        let mut session = session();
        session.select(0, 2).expect("first");
        session.select(0, 3).expect("second");
        session.new_game();

        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert!(session.engine().selection().is_empty());
        assert!(session.engine().detect_matches().is_empty());
    }

    #[test]
    fn test_snapshot_lists_pending_selection() {
        let mut session = session();
        session.select(3, 3).expect("select");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.selection, vec![Position::new(3, 3)]);
        assert!(snapshot.grid[Position::new(3, 3)].selected);
        assert!(session.snapshot_json().expect("json").contains("\"selected\":true"));
    }
}
