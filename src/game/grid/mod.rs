//! Square grid storage shared by both boards.

pub mod grid;

pub use grid::*;
