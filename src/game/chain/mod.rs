//! Chain reaction board.
//!
//! Clicking an orb adds energy; a fully charged orb explodes, feeding its
//! same-colored neighbours and possibly setting off a cascade.

pub mod cell;
pub mod engine;
pub mod resolve;

pub use cell::*;
pub use engine::*;
pub use resolve::*;
