/// Main configuration module.
///
/// Re-exports submodules for shared, chain reaction and tile match configuration.
pub mod game;
pub mod chain;
pub mod tiles;
