// Demo module for the games. Provides the interactive terminal loops and
// the text rendering they use.
pub mod game_loop;
pub mod render;
