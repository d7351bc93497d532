use serde::{Serialize, Deserialize};

use crate::game::error::ConfigError;
use crate::game::rng::ColorSource;

/// A cell coordinate, row-major and 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is an orthogonal neighbour (Manhattan distance exactly 1).
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// The neighbouring position in `direction`, if it stays inside a `size` x `size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let mut next = self;
        match direction {
            Direction::Up => {
                if next.row == 0 { return None; }
                next.row -= 1;
            }
            Direction::Down => {
                if next.row + 1 >= size { return None; }
                next.row += 1;
            }
            Direction::Left => {
                if next.col == 0 { return None; }
                next.col -= 1;
            }
            Direction::Right => {
                if next.col + 1 >= size { return None; }
                next.col += 1;
            }
        }
        Some(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// Every color either board can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Sky,
    Blue,
    Purple,
    Pink,
}

impl Color {
    /// One-letter code used by the terminal renderer.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Teal => 'T',
            Color::Sky => 'S',
            Color::Blue => 'B',
            Color::Purple => 'P',
            Color::Pink => 'K',
        }
    }
}

/// The fixed set of colors a board draws from. Never empty, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ConfigError::DuplicateColor);
            }
        }
        Ok(Self { colors })
    }

    /// Seven colors of the chain reaction board.
    pub fn chain() -> Self {
        Self {
            colors: vec![
                Color::Red,
                Color::Teal,
                Color::Sky,
                Color::Green,
                Color::Yellow,
                Color::Pink,
                Color::Blue,
            ],
        }
    }

    /// Six colors of the tile match board.
    pub fn tiles() -> Self {
        Self {
            colors: vec![
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Yellow,
                Color::Purple,
                Color::Orange,
            ],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Draw a color uniformly from the palette.
    pub fn draw(&self, source: &mut dyn ColorSource) -> Color {
        self.colors[source.pick_index(self.colors.len())]
    }

    /// Draw a color uniformly among those not in `excluded`.
    /// Falls back to the whole palette when every color is excluded.
    pub fn draw_excluding(&self, source: &mut dyn ColorSource, excluded: &[Color]) -> Color {
        let allowed: Vec<Color> = self.colors.iter()
            .copied()
            .filter(|c| !excluded.contains(c))
            .collect();
        if allowed.is_empty() {
            return self.draw(source);
        }
        allowed[source.pick_index(allowed.len())]
    }
}
