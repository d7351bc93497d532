//! Chain reaction engine.
//!
//! Owns the energy board. Each activation charges one cell and resolves the
//! resulting explosions before returning, so callers never observe a
//! saturated cell.

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::config::chain::{EXPLOSION_SCORE, MAX_ENERGY};
use crate::config::game::GRID_SIZE;
use crate::game::chain::cell::EnergyCell;
use crate::game::chain::resolve::{resolve, Resolution, ResolutionOrder};
use crate::game::error::{ActionRejected, ConfigError};
use crate::game::grid::Grid;
use crate::game::rng::{ColorSource, RandomSource};
use crate::game::types::{Palette, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSettings {
    pub size: usize,
    pub max_energy: u8,
    pub explosion_score: u32,
    pub order: ResolutionOrder,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            max_energy: MAX_ENERGY,
            explosion_score: EXPLOSION_SCORE,
            order: ResolutionOrder::BreadthFirst,
        }
    }
}

impl ChainSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.max_energy == 0 {
            return Err(ConfigError::ZeroMaxEnergy);
        }
        Ok(())
    }
}

/// Result of one accepted activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainReport {
    pub target: Position,
    /// Cells exploded per pass.
    pub waves: Vec<Vec<Position>>,
    pub score: u32,
    pub truncated: bool,
}

impl ChainReport {
    pub fn explosions(&self) -> usize {
        self.waves.iter().map(Vec::len).sum()
    }
}

/// Fill a fresh board: random colors, starting energy in `1..max_energy`.
pub fn new_grid(
    size: usize,
    palette: &Palette,
    max_energy: u8,
    source: &mut dyn ColorSource,
) -> Result<Grid<EnergyCell>, ConfigError> {
    if max_energy == 0 {
        return Err(ConfigError::ZeroMaxEnergy);
    }
    Grid::generate(size, |_| {
        let color = palette.draw(&mut *source);
        // Never start saturated.
        let energy = if max_energy > 1 {
            1 + source.pick_index(usize::from(max_energy - 1)) as u8
        } else {
            0
        };
        EnergyCell::new(color, energy)
    })
}

pub struct ChainEngine<S = RandomSource> {
    grid: Grid<EnergyCell>,
    palette: Palette,
    settings: ChainSettings,
    source: S,
}

impl<S: ColorSource> ChainEngine<S> {
    /// Build an engine on a freshly generated board.
    pub fn new(settings: ChainSettings, palette: Palette, mut source: S) -> Result<Self, ConfigError> {
        settings.validate()?;
        let grid = new_grid(settings.size, &palette, settings.max_energy, &mut source)?;
        Ok(Self { grid, palette, settings, source })
    }

    /// Build an engine on an existing board. Energies above the limit are
    /// clamped and any saturated cell is resolved straight away.
    pub fn with_grid(
        mut settings: ChainSettings,
        palette: Palette,
        mut grid: Grid<EnergyCell>,
        mut source: S,
    ) -> Result<Self, ConfigError> {
        settings.size = grid.size();
        settings.validate()?;
        for p in grid.positions() {
            let cell = &mut grid[p];
            cell.energy = cell.energy.min(settings.max_energy);
            cell.exploding = false;
        }
        resolve(&mut grid, settings.max_energy, settings.order, &palette, &mut source);
        Ok(Self { grid, palette, settings, source })
    }

    pub fn grid(&self) -> &Grid<EnergyCell> {
        &self.grid
    }

    pub fn settings(&self) -> &ChainSettings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the board with a freshly generated one.
    pub fn regenerate(&mut self) {
        match new_grid(self.settings.size, &self.palette, self.settings.max_energy, &mut self.source) {
            Ok(grid) => {
                self.grid = grid;
            }
            Err(err) => warn!("[Chain] Could not regenerate the board: {}", err),
        }
    }

    /// Add one unit of energy to `(row, col)` and resolve every explosion it causes.
    pub fn activate(&mut self, row: usize, col: usize) -> Result<ChainReport, ActionRejected> {
        let target = self.grid.checked(row, col)?;
        let max_energy = self.settings.max_energy;
        if self.grid[target].is_saturated(max_energy) {
            return Err(ActionRejected::Saturated(target));
        }

        self.grid[target].charge(max_energy);
        let Resolution { waves, truncated } = resolve(
            &mut self.grid,
            max_energy,
            self.settings.order,
            &self.palette,
            &mut self.source,
        );
        let explosions: usize = waves.iter().map(Vec::len).sum();
        let score = explosions as u32 * self.settings.explosion_score;

        debug!(
            "[Chain] Activated ({}, {}): {} explosions over {} passes, +{}",
            row, col, explosions, waves.len(), score
        );

        Ok(ChainReport { target, waves, score, truncated })
    }
}
