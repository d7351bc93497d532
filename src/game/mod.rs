pub mod types;
pub mod error;
pub mod rng;

pub mod grid;
pub mod chain;
pub mod tiles;
pub mod session;
pub mod demo;
