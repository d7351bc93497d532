use std::ops::{Index, IndexMut};

use serde::{Serialize, Deserialize};

use crate::game::error::{ActionRejected, ConfigError};
use crate::game::types::{Direction, Position};

/// Square board of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<C>")]
pub struct Grid<C> {
    cells: Vec<Vec<C>>,
}

/// Same shape as `Grid` on the wire, checked through `from_rows` on the way in.
#[derive(Deserialize)]
struct RawGrid<C> {
    cells: Vec<Vec<C>>,
}

impl<C> TryFrom<RawGrid<C>> for Grid<C> {
    type Error = ConfigError;

    fn try_from(raw: RawGrid<C>) -> Result<Self, Self::Error> {
        Grid::from_rows(raw.cells)
    }
}

impl<C> Grid<C> {
    /// Build a `size` x `size` grid, calling `make` once per cell in row-major order.
    pub fn generate(size: usize, mut make: impl FnMut(Position) -> C) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        let cells = (0..size)
            .map(|row| (0..size).map(|col| make(Position::new(row, col))).collect())
            .collect();
        Ok(Self { cells })
    }

    /// Wrap hand-built rows. The rows must form a non-empty square.
    pub fn from_rows(cells: Vec<Vec<C>>) -> Result<Self, ConfigError> {
        if cells.is_empty() {
            return Err(ConfigError::ZeroSize);
        }
        let rows = cells.len();
        if let Some(bad) = cells.iter().find(|r| r.len() != rows) {
            return Err(ConfigError::NotSquare { rows, found: bad.len() });
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    /// Validate a raw coordinate coming from the presentation layer.
    pub fn checked(&self, row: usize, col: usize) -> Result<Position, ActionRejected> {
        let pos = Position::new(row, col);
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(ActionRejected::OutOfBounds { row, col, size: self.size() })
        }
    }

    pub fn get(&self, pos: Position) -> Option<&C> {
        self.cells.get(pos.row).and_then(|r| r.get(pos.col))
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut C> {
        self.cells.get_mut(pos.row).and_then(|r| r.get_mut(pos.col))
    }

    /// All positions, top-left to bottom-right.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<C> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// In-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<C> {
        let size = self.size();
        Direction::ALL.into_iter().filter_map(move |d| pos.step(d, size))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &C)> {
        self.cells.iter().enumerate().flat_map(|(row, r)| {
            r.iter().enumerate().map(move |(col, cell)| (Position::new(row, col), cell))
        })
    }

    /// Exchange the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        if a.row == b.row {
            self.cells[a.row].swap(a.col, b.col);
        } else {
            let (lo, hi) = if a.row < b.row { (a, b) } else { (b, a) };
            let (top, bottom) = self.cells.split_at_mut(hi.row);
            std::mem::swap(&mut top[lo.row][lo.col], &mut bottom[0][hi.col]);
        }
    }
}

impl<C> Index<Position> for Grid<C> {
    type Output = C;

    fn index(&self, pos: Position) -> &C {
        &self.cells[pos.row][pos.col]
    }
}

impl<C> IndexMut<Position> for Grid<C> {
    fn index_mut(&mut self, pos: Position) -> &mut C {
        &mut self.cells[pos.row][pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_generation_size() {
        let grid = Grid::generate(10, |_| 0u8).expect("grid");
        assert_eq!(grid.size(), 10);
        assert!(grid.rows().all(|row| row.len() == 10));
        assert_eq!(Grid::generate(0, |_| 0u8), Err(ConfigError::ZeroSize));
    }

    #[test]
    fn test_from_rows_requires_square() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, ConfigError::NotSquare { rows: 2, found: 1 });
    }

    #[test]
    fn test_json_keeps_the_square_check() {
        let grid = Grid::generate(2, |p| p.row * 2 + p.col).expect("grid");
        let json = serde_json::to_string(&grid).expect("json");
        let back: Grid<usize> = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, grid);

        assert!(serde_json::from_str::<Grid<usize>>(r#"{"cells":[[1],[2,3]]}"#).is_err());
        assert!(serde_json::from_str::<Grid<usize>>(r#"{"cells":[]}"#).is_err());
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = Grid::generate(3, |_| ()).expect("grid");
        let corner: Vec<Position> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 4);
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        let grid = Grid::generate(4, |_| ()).expect("grid");
        assert_eq!(grid.checked(3, 3), Ok(Position::new(3, 3)));
        assert_eq!(
            grid.checked(4, 0),
            Err(ActionRejected::OutOfBounds { row: 4, col: 0, size: 4 })
        );
    }

    #[test]
    fn test_swap_across_rows() {
        let mut grid = Grid::generate(3, |p| p.row * 3 + p.col).expect("grid");
        grid.swap(Position::new(2, 1), Position::new(1, 1));
        assert_eq!(grid[Position::new(1, 1)], 7);
        assert_eq!(grid[Position::new(2, 1)], 4);
        grid.swap(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(grid[Position::new(0, 0)], 1);
    }
}
