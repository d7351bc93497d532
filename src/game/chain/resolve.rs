//! Explosion resolution for the chain reaction board.
//!
//! A pass explodes saturated cells, spreads one unit of energy to each
//! same-colored orthogonal neighbour and then resets the exploded cells with a
//! fresh color. Passes repeat until nothing is saturated.

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::game::chain::cell::EnergyCell;
use crate::game::grid::Grid;
use crate::game::rng::ColorSource;
use crate::game::types::{Palette, Position};

/// How cells saturated during a pass are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolutionOrder {
    /// Each pass explodes exactly the cells saturated when it starts; cells
    /// they saturate form the next wave. Independent of scan order.
    #[default]
    BreadthFirst,
    /// Cells are visited top-left to bottom-right and a cell saturated
    /// earlier in the same scan explodes later in that scan.
    RowMajorScan,
}

/// Outcome of resolving a board to quiescence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Cells exploded in each pass, in row-major order within a pass.
    pub waves: Vec<Vec<Position>>,
    /// The pass bound was reached and an extra pass discharged what was
    /// still saturated without spreading.
    pub truncated: bool,
}

impl Resolution {
    pub fn explosions(&self) -> usize {
        self.waves.iter().map(Vec::len).sum()
    }
}

/// Most passes a single resolution may take on a board.
pub fn pass_limit(size: usize, max_energy: u8) -> usize {
    (size * size * max_energy as usize).max(1)
}

/// Resolve every saturated cell of `grid`.
///
/// On return no cell is saturated and no cell is flagged as exploding.
pub fn resolve(
    grid: &mut Grid<EnergyCell>,
    max_energy: u8,
    order: ResolutionOrder,
    palette: &Palette,
    source: &mut dyn ColorSource,
) -> Resolution {
    let limit = pass_limit(grid.size(), max_energy);
    let mut resolution = Resolution::default();

    for pass in 0..limit {
        let exploded = match order {
            ResolutionOrder::BreadthFirst => breadth_first_pass(grid, max_energy),
            ResolutionOrder::RowMajorScan => row_major_pass(grid, max_energy),
        };
        if exploded.is_empty() {
            return resolution;
        }

        reset_exploded(grid, &exploded, palette, source);
        debug!("[Chain] Pass {} exploded {} cells", pass + 1, exploded.len());
        resolution.waves.push(exploded);
    }

    let leftover = discharge_pass(grid, max_energy);
    if !leftover.is_empty() {
        reset_exploded(grid, &leftover, palette, source);
        warn!(
            "[Chain] Resolution hit the {} pass bound, {} cells discharged",
            limit,
            leftover.len()
        );
        resolution.waves.push(leftover);
        resolution.truncated = true;
    }

    resolution
}

fn is_pending(cell: &EnergyCell, max_energy: u8) -> bool {
    cell.is_saturated(max_energy) && !cell.exploding
}

fn spread(grid: &mut Grid<EnergyCell>, origin: Position, max_energy: u8) {
    let color = grid[origin].color;
    for n in grid.neighbors(origin) {
        if grid[n].color == color {
            grid[n].charge(max_energy);
        }
    }
}

fn breadth_first_pass(grid: &mut Grid<EnergyCell>, max_energy: u8) -> Vec<Position> {
    let frontier: Vec<Position> = grid.positions()
        .filter(|&p| is_pending(&grid[p], max_energy))
        .collect();

    for &p in &frontier {
        grid[p].exploding = true;
    }
    for &p in &frontier {
        spread(grid, p, max_energy);
    }
    frontier
}

fn row_major_pass(grid: &mut Grid<EnergyCell>, max_energy: u8) -> Vec<Position> {
    let mut exploded = Vec::new();
    for p in grid.positions() {
        if is_pending(&grid[p], max_energy) {
            grid[p].exploding = true;
            exploded.push(p);
            spread(grid, p, max_energy);
        }
    }
    exploded
}

/// Explode whatever is still saturated without feeding any neighbour.
fn discharge_pass(grid: &mut Grid<EnergyCell>, max_energy: u8) -> Vec<Position> {
    let saturated: Vec<Position> = grid.positions()
        .filter(|&p| is_pending(&grid[p], max_energy))
        .collect();
    for &p in &saturated {
        grid[p].exploding = true;
    }
    saturated
}

fn reset_exploded(
    grid: &mut Grid<EnergyCell>,
    exploded: &[Position],
    palette: &Palette,
    source: &mut dyn ColorSource,
) {
    for &p in exploded {
        let cell = &mut grid[p];
        cell.energy = 0;
        cell.exploding = false;
        cell.color = palette.draw(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::ScriptedSource;
    use crate::game::types::Color;

    fn palette() -> Palette {
        Palette::new(vec![Color::Blue, Color::Red]).expect("palette")
    }

    fn board(rows: &[&[(Color, u8)]]) -> Grid<EnergyCell> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&(c, e)| EnergyCell::new(c, e)).collect())
                .collect(),
        )
        .expect("square board")
    }

    const R: Color = Color::Red;
    const B: Color = Color::Blue;

    #[test]
    fn test_quiet_board_needs_no_pass() {
        let mut grid = board(&[&[(R, 1), (R, 1)], &[(R, 0), (B, 1)]]);
        let before = grid.clone();
        let res = resolve(&mut grid, 2, ResolutionOrder::BreadthFirst, &palette(), &mut ScriptedSource::constant());
        assert!(res.waves.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spread_ignores_other_colors() {
        // Recolors to Blue, so the exploded cell cannot be re-fed by red neighbours.
        let mut grid = board(&[&[(R, 2), (B, 1)], &[(B, 1), (B, 1)]]);
        let res = resolve(&mut grid, 2, ResolutionOrder::BreadthFirst, &palette(), &mut ScriptedSource::constant());
        assert_eq!(res.waves, vec![vec![Position::new(0, 0)]]);
        assert_eq!(grid[Position::new(0, 1)].energy, 1);
        assert_eq!(grid[Position::new(1, 0)].energy, 1);
        assert_eq!(grid[Position::new(0, 0)], EnergyCell::new(B, 0));
    }

    #[test]
    fn test_row_major_scan_chains_within_one_pass() {
        // (0,0) saturates (0,1) which is scanned later in the same pass.
        let row: &[(Color, u8)] = &[(R, 2), (R, 1), (B, 0)];
        let mut scan = board(&[row, &[(B, 0); 3], &[(B, 0); 3]]);
        let mut bfs = scan.clone();

        let by_scan = resolve(&mut scan, 2, ResolutionOrder::RowMajorScan, &palette(), &mut ScriptedSource::constant());
        let by_wave = resolve(&mut bfs, 2, ResolutionOrder::BreadthFirst, &palette(), &mut ScriptedSource::constant());

        assert_eq!(by_scan.waves, vec![vec![Position::new(0, 0), Position::new(0, 1)]]);
        assert_eq!(by_wave.waves, vec![vec![Position::new(0, 0)], vec![Position::new(0, 1)]]);
        assert_eq!(by_scan.explosions(), by_wave.explosions());
    }

    #[test]
    fn test_endless_cycle_is_cut_at_the_bound() {
        // A red 2x2 block that is always recolored red feeds itself forever.
        let red_only = Palette::new(vec![R]).expect("palette");
        let mut grid = board(&[&[(R, 2), (R, 1)], &[(R, 1), (R, 0)]]);
        let res = resolve(&mut grid, 2, ResolutionOrder::BreadthFirst, &red_only, &mut ScriptedSource::constant());

        assert!(res.truncated);
        assert_eq!(res.waves.len(), pass_limit(2, 2) + 1);
        for (_, cell) in grid.iter() {
            assert!(cell.energy < 2);
            assert!(!cell.exploding);
        }
    }

    #[test]
    fn test_chain_ending_at_the_bound_is_not_truncated() {
        // 1x1 with max energy 1: the bound is one pass and the chain needs exactly one.
        let mut grid = board(&[&[(R, 1)]]);
        let res = resolve(&mut grid, 1, ResolutionOrder::BreadthFirst, &palette(), &mut ScriptedSource::constant());

        assert_eq!(pass_limit(1, 1), 1);
        assert_eq!(res.waves, vec![vec![Position::new(0, 0)]]);
        assert!(!res.truncated);
        assert_eq!(grid[Position::new(0, 0)], EnergyCell::new(B, 0));
    }
}
