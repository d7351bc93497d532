//! Removal, gravity and refill for the tile match board.

use std::collections::BTreeSet;

use crate::game::grid::Grid;
use crate::game::rng::ColorSource;
use crate::game::tiles::cell::TileCell;
use crate::game::types::{Palette, Position};

/// Clear `removed`, let the surviving tiles of each column fall to the
/// bottom in their original order, and fill the gap above with new tiles.
pub fn collapse(
    grid: &mut Grid<TileCell>,
    removed: &BTreeSet<Position>,
    palette: &Palette,
    source: &mut dyn ColorSource,
) {
    if removed.is_empty() {
        return;
    }
    let size = grid.size();
    for col in 0..size {
        // Bottom to top.
        let survivors: Vec<TileCell> = (0..size).rev()
            .map(|row| Position::new(row, col))
            .filter(|p| !removed.contains(p))
            .map(|p| grid[p])
            .collect();
        if survivors.len() == size {
            continue;
        }

        let mut survivors = survivors.into_iter();
        for row in (0..size).rev() {
            grid[Position::new(row, col)] = match survivors.next() {
                Some(tile) => tile,
                None => TileCell::new(palette.draw(&mut *source)),
            };
        }
    }
}
