//! Run detection for the tile match board.

use std::collections::BTreeSet;

use crate::config::tiles::MIN_RUN;
use crate::game::grid::Grid;
use crate::game::tiles::cell::TileCell;
use crate::game::types::{Color, Position};

/// Every tile belonging to a horizontal or vertical run of at least three
/// identical colors. A tile in both a row run and a column run appears once.
pub fn detect_matches(grid: &Grid<TileCell>) -> BTreeSet<Position> {
    detect_runs(grid, MIN_RUN)
}

/// Same as [`detect_matches`] with a custom minimum run length.
pub fn detect_runs(grid: &Grid<TileCell>, min_run: usize) -> BTreeSet<Position> {
    let size = grid.size();
    let mut matches = BTreeSet::new();

    for line in 0..size {
        scan_line(size, min_run, &mut matches, |i| {
            let pos = Position::new(line, i);
            (pos, grid[pos].color)
        });
        scan_line(size, min_run, &mut matches, |i| {
            let pos = Position::new(i, line);
            (pos, grid[pos].color)
        });
    }
    matches
}

/// Walk one row or column. A run closes when the color changes or the line
/// ends; runs of `min_run` or more are added whole.
fn scan_line(
    len: usize,
    min_run: usize,
    matches: &mut BTreeSet<Position>,
    at: impl Fn(usize) -> (Position, Color),
) {
    let mut start = 0;
    for i in 1..=len {
        let closes = i == len || at(i).1 != at(start).1;
        if closes {
            if i - start >= min_run {
                matches.extend((start..i).map(|j| at(j).0));
            }
            start = i;
        }
    }
}
