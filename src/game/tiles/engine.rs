//! Tile match engine.
//!
//! Two clicks on adjacent tiles swap their colors; runs of three or more are
//! then cleared, the columns fall and the gaps are refilled. Matches created
//! by the falling tiles are left for the next `settle` call.

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::config::game::GRID_SIZE;
use crate::config::tiles::{MATCH_SCORE, MAX_SETTLE_STEPS, MIN_RUN};
use crate::game::error::{ActionRejected, ConfigError};
use crate::game::grid::Grid;
use crate::game::rng::{ColorSource, RandomSource};
use crate::game::tiles::cell::TileCell;
use crate::game::tiles::collapse::collapse;
use crate::game::tiles::matching::detect_runs;
use crate::game::types::{Color, Palette, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub size: usize,
    pub match_score: u32,
    pub min_run: usize,
    pub max_settle_steps: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            match_score: MATCH_SCORE,
            min_run: MIN_RUN,
            max_settle_steps: MAX_SETTLE_STEPS,
        }
    }
}

impl MatchSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.min_run < 2 {
            return Err(ConfigError::RunTooShort(self.min_run));
        }
        Ok(())
    }
}

/// Tiles cleared by one detect + collapse step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseReport {
    pub matched: BTreeSet<Position>,
    pub score: u32,
}

impl CollapseReport {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    pub first: Position,
    pub second: Position,
    pub collapse: CollapseReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First tile of a pair is pending.
    Selected(Position),
    /// A pending tile was clicked again.
    Deselected(Position),
    /// The pair was adjacent and its colors were exchanged.
    Swapped(SwapReport),
    /// The pair was dropped without touching the board.
    NotAdjacent { first: Position, second: Position },
}

impl SelectOutcome {
    pub fn score(&self) -> u32 {
        match self {
            SelectOutcome::Swapped(report) => report.collapse.score,
            _ => 0,
        }
    }
}

/// Color shared by every entry of `colors`, if any.
fn repeated(colors: &[Color]) -> Option<Color> {
    let first = *colors.first()?;
    colors.iter().all(|&c| c == first).then_some(first)
}

/// Fill a fresh board with random tiles, re-rolling any color that would
/// complete a run with the tiles to its left or above.
///
/// Unlike a purely random fill, a new game therefore never opens with runs
/// that clear and score before the first swap.
pub fn new_grid(
    size: usize,
    palette: &Palette,
    min_run: usize,
    source: &mut dyn ColorSource,
) -> Result<Grid<TileCell>, ConfigError> {
    if size == 0 {
        return Err(ConfigError::ZeroSize);
    }
    let need = min_run.saturating_sub(1).max(1);
    let mut rows: Vec<Vec<TileCell>> = Vec::with_capacity(size);

    for row in 0..size {
        let mut line: Vec<TileCell> = Vec::with_capacity(size);
        for col in 0..size {
            let mut excluded = Vec::with_capacity(2);
            if col >= need {
                let left: Vec<Color> = line[col - need..].iter().map(|t| t.color).collect();
                excluded.extend(repeated(&left));
            }
            if row >= need {
                let above: Vec<Color> = rows[row - need..].iter().map(|r| r[col].color).collect();
                excluded.extend(repeated(&above));
            }
            line.push(TileCell::new(palette.draw_excluding(source, &excluded)));
        }
        rows.push(line);
    }
    Grid::from_rows(rows)
}

pub struct MatchEngine<S = RandomSource> {
    grid: Grid<TileCell>,
    palette: Palette,
    settings: MatchSettings,
    source: S,
    selection: Vec<Position>,
}

impl<S: ColorSource> MatchEngine<S> {
    pub fn new(settings: MatchSettings, palette: Palette, mut source: S) -> Result<Self, ConfigError> {
        settings.validate()?;
        let grid = new_grid(settings.size, &palette, settings.min_run, &mut source)?;
        Ok(Self { grid, palette, settings, source, selection: Vec::with_capacity(2) })
    }

    /// Build an engine on an existing board. The board is taken as is: runs
    /// already present are left for the first `settle`.
    pub fn with_grid(
        mut settings: MatchSettings,
        palette: Palette,
        mut grid: Grid<TileCell>,
        source: S,
    ) -> Result<Self, ConfigError> {
        settings.size = grid.size();
        settings.validate()?;
        for p in grid.positions() {
            grid[p].selected = false;
        }
        Ok(Self { grid, palette, settings, source, selection: Vec::with_capacity(2) })
    }

    pub fn grid(&self) -> &Grid<TileCell> {
        &self.grid
    }

    /// Pending tiles, in click order.
    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the board with a freshly generated one and drop the selection.
    pub fn regenerate(&mut self) {
        match new_grid(self.settings.size, &self.palette, self.settings.min_run, &mut self.source) {
            Ok(grid) => {
                self.grid = grid;
                self.selection.clear();
            }
            Err(err) => warn!("[Match] Could not regenerate the board: {}", err),
        }
    }

    /// Toggle `(row, col)` in the pending selection. The second distinct
    /// tile resolves the pair and clears the selection whatever happens.
    pub fn select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, ActionRejected> {
        let pos = self.grid.checked(row, col)?;

        if let Some(index) = self.selection.iter().position(|&p| p == pos) {
            self.selection.remove(index);
            self.grid[pos].selected = false;
            return Ok(SelectOutcome::Deselected(pos));
        }
        if self.selection.len() >= 2 {
            return Err(ActionRejected::SelectionFull);
        }

        self.selection.push(pos);
        self.grid[pos].selected = true;
        if self.selection.len() < 2 {
            return Ok(SelectOutcome::Selected(pos));
        }

        let (first, second) = (self.selection[0], self.selection[1]);
        self.clear_selection();
        if !first.is_adjacent(second) {
            debug!(
                "[Match] Swap ({}, {}) <-> ({}, {}) ignored, tiles are not adjacent",
                first.row, first.col, second.row, second.col
            );
            return Ok(SelectOutcome::NotAdjacent { first, second });
        }

        self.grid.swap(first, second);
        let collapse = self.settle();
        debug!(
            "[Match] Swapped ({}, {}) <-> ({}, {}): {} tiles matched, +{}",
            first.row, first.col, second.row, second.col, collapse.matched.len(), collapse.score
        );
        Ok(SelectOutcome::Swapped(SwapReport { first, second, collapse }))
    }

    pub fn clear_selection(&mut self) {
        for p in self.selection.drain(..) {
            self.grid[p].selected = false;
        }
    }

    /// Tiles currently part of a run, without changing the board.
    pub fn detect_matches(&self) -> BTreeSet<Position> {
        detect_runs(&self.grid, self.settings.min_run)
    }

    /// One detect + collapse step. Runs formed by the refill are not chained.
    pub fn settle(&mut self) -> CollapseReport {
        let matched = self.detect_matches();
        if matched.is_empty() {
            return CollapseReport::default();
        }
        collapse(&mut self.grid, &matched, &self.palette, &mut self.source);
        let score = matched.len() as u32 * self.settings.match_score;
        CollapseReport { matched, score }
    }

    /// Repeat `settle` until the board has no run, up to the configured
    /// number of steps. Returns the non-empty steps in order.
    pub fn stabilize(&mut self) -> Vec<CollapseReport> {
        let mut steps = Vec::new();
        for _ in 0..self.settings.max_settle_steps {
            let step = self.settle();
            if step.is_empty() {
                return steps;
            }
            steps.push(step);
        }
        if !self.detect_matches().is_empty() {
            warn!(
                "[Match] Board still has runs after {} settle steps",
                self.settings.max_settle_steps
            );
        }
        steps
    }
}
