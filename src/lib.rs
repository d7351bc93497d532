//! Cores of two grid puzzle games.
//!
//! - [`game::chain`]: color chain reaction. Charging an orb to its maximum
//!   energy makes it explode and feed same-colored neighbours.
//! - [`game::tiles`]: tile match. Swapping adjacent tiles clears runs of
//!   three or more, then the columns fall and refill.
//!
//! Both engines draw randomness from an injected [`game::rng::ColorSource`],
//! so a seed fully determines a game. [`game::session`] adds scores, move
//! counters and levels on top.

pub mod config;
pub mod game;

pub use game::chain::{ChainEngine, ChainReport, ChainSettings, EnergyCell, ResolutionOrder};
pub use game::error::{ActionRejected, ConfigError};
pub use game::grid::Grid;
pub use game::rng::{ColorSource, RandomSource, ScriptedSource};
pub use game::session::{ChainSession, MatchSession, SessionStatus};
pub use game::tiles::{detect_matches, MatchEngine, MatchSettings, SelectOutcome, TileCell};
pub use game::types::{Color, Palette, Position};
