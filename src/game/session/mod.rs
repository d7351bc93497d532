//! Game sessions layered on the engines: score, move counters and levels.

use serde::{Serialize, Deserialize};

pub mod chain;
pub mod tiles;

pub use chain::*;
pub use tiles::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}
