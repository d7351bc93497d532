//! Tile match board.
//!
//! Swap two adjacent tiles to line up three or more of the same color.

pub mod cell;
pub mod collapse;
pub mod engine;
pub mod matching;

pub use cell::*;
pub use collapse::*;
pub use engine::*;
pub use matching::*;
