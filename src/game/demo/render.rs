//! Terminal rendering of both boards.

use crate::game::chain::EnergyCell;
use crate::game::grid::Grid;
use crate::game::session::{ChainSnapshot, MatchSnapshot};
use crate::game::tiles::TileCell;

fn header(out: &mut String, size: usize) {
    out.push_str("    ");
    for col in 0..size {
        out.push_str(&format!("{:<4}", col));
    }
    out.push('\n');
}

/// Each orb as its color letter followed by its energy, e.g. `R2`.
pub fn render_chain_grid(grid: &Grid<EnergyCell>) -> String {
    let mut out = String::new();
    header(&mut out, grid.size());
    for (row, cells) in grid.rows().enumerate() {
        out.push_str(&format!("{:<4}", row));
        for cell in cells {
            let symbol = format!("{}{}", cell.color.letter(), cell.energy);
            out.push_str(&format!("{:<4}", symbol));
        }
        out.push('\n');
    }
    out
}

/// Each tile as its color letter; pending tiles are bracketed.
pub fn render_tile_grid(grid: &Grid<TileCell>) -> String {
    let mut out = String::new();
    header(&mut out, grid.size());
    for (row, cells) in grid.rows().enumerate() {
        out.push_str(&format!("{:<4}", row));
        for tile in cells {
            let symbol = if tile.selected {
                format!("[{}]", tile.color.letter())
            } else {
                format!(" {} ", tile.color.letter())
            };
            out.push_str(&format!("{:<4}", symbol));
        }
        out.push('\n');
    }
    out
}

pub fn render_chain_status(snapshot: &ChainSnapshot) -> String {
    format!(
        "Level {} | Score {} / {} | Moves {} | {:?}",
        snapshot.level, snapshot.score, snapshot.target, snapshot.moves_left, snapshot.status
    )
}

pub fn render_match_status(snapshot: &MatchSnapshot) -> String {
    format!("Score {} | Moves {}", snapshot.score, snapshot.moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Color, Position};

    #[test]
    fn test_chain_grid_shows_color_and_energy() {
        let grid = Grid::generate(2, |p| EnergyCell::new(Color::Red, p.col as u8)).expect("grid");
        let text = render_chain_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0"));
        assert!(lines[1].contains("R0"));
        assert!(lines[1].contains("R1"));
    }

    #[test]
    fn test_columns_are_four_wide() {
        let grid = Grid::generate(2, |_| EnergyCell::new(Color::Green, 3)).expect("grid");
        let text = render_chain_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    0   1   ");
        assert_eq!(lines[2], "1   G3  G3  ");
    }

    #[test]
    fn test_selected_tile_is_bracketed() {
        let mut grid = Grid::generate(2, |_| TileCell::new(Color::Blue)).expect("grid");
        grid[Position::new(1, 1)].selected = true;
        let text = render_tile_grid(&grid);
        assert_eq!(text.matches("[B]").count(), 1);
        assert_eq!(text.matches(" B ").count(), 3);
    }
}
