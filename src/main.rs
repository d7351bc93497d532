//! Main entry point for the terminal demo.
//!
//! Usage: `puzzle-grid [chain|match] [seed]`. Without a seed the board is
//! seeded from the operating system. Log verbosity follows `RUST_LOG`.

use std::io;

use log::info;

use puzzle_grid::game::demo::game_loop::{run_chain_loop, run_match_loop};
use puzzle_grid::{
    ChainEngine, ChainSession, ChainSettings, MatchEngine, MatchSession, MatchSettings, Palette,
    RandomSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger from environment variable.
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "chain".to_string());
    let source = match args.next() {
        Some(seed) => RandomSource::seeded(seed.parse()?),
        None => RandomSource::from_os(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match mode.as_str() {
        "chain" => {
            info!("[Demo] Starting color chain reaction");
            let engine = ChainEngine::new(ChainSettings::default(), Palette::chain(), source)?;
            run_chain_loop(&mut ChainSession::new(engine), &mut input, &mut output)?;
        }
        "match" => {
            info!("[Demo] Starting tile match");
            let engine = MatchEngine::new(MatchSettings::default(), Palette::tiles(), source)?;
            run_match_loop(&mut MatchSession::new(engine), &mut input, &mut output)?;
        }
        other => {
            eprintln!("Unknown game `{}`, expected `chain` or `match`", other);
            std::process::exit(2);
        }
    }
    Ok(())
}
