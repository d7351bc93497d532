//! Interactive terminal loops for both games.
//!
//! Input and output are generic so the loops can be driven from a script.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::game::demo::render::{
    render_chain_grid, render_chain_status, render_match_status, render_tile_grid,
};
use crate::game::rng::ColorSource;
use crate::game::session::{ChainSession, MatchSession, SessionStatus};
use crate::game::tiles::SelectOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell { row: usize, col: usize },
    Settle,
    NextLevel,
    Restart,
    Json,
    Quit,
    Unknown,
}

/// Parse one input line: `row col`, or a single-letter command.
pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let (Some(first), second) = (parts.next(), parts.next()) else {
        return Command::Unknown;
    };
    if let Some(second) = second {
        return match (first.parse(), second.parse(), parts.next()) {
            (Ok(row), Ok(col), None) => Command::Cell { row, col },
            _ => Command::Unknown,
        };
    }
    match first {
        "s" => Command::Settle,
        "n" => Command::NextLevel,
        "r" => Command::Restart,
        "j" => Command::Json,
        "q" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Prompt and read the next command. `None` on end of input.
fn read_command(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<Command>> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(parse_command(line.trim())))
}

fn write_json(output: &mut impl Write, json: Result<String, serde_json::Error>) -> io::Result<()> {
    match json {
        Ok(text) => writeln!(output, "{}", text),
        Err(err) => {
            warn!("[Demo] Could not serialize the snapshot: {}", err);
            Ok(())
        }
    }
}

/// Run the chain reaction game until `q` or end of input.
pub fn run_chain_loop<S: ColorSource>(
    session: &mut ChainSession<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Color Chain Reaction: enter `row col` to charge an orb.")?;
    writeln!(output, "Commands: n next level, r restart, j json, q quit.")?;

    loop {
        let snapshot = session.snapshot();
        write!(output, "{}", render_chain_grid(&snapshot.grid))?;
        writeln!(output, "{}", render_chain_status(&snapshot))?;

        let Some(command) = read_command(input, output)? else {
            return Ok(());
        };
        match command {
            Command::Cell { row, col } => match session.activate(row, col) {
                Ok(report) => writeln!(
                    output,
                    "{} explosions in {} waves, +{}",
                    report.explosions(),
                    report.waves.len(),
                    report.score
                )?,
                Err(err) => writeln!(output, "Rejected: {}", err)?,
            },
            Command::NextLevel => {
                if let Err(err) = session.next_level() {
                    writeln!(output, "Rejected: {}", err)?;
                }
            }
            Command::Restart => session.restart(),
            Command::Json => write_json(output, session.snapshot_json())?,
            Command::Quit => return Ok(()),
            Command::Settle | Command::Unknown => writeln!(output, "Unknown command")?,
        }

        match session.status() {
            SessionStatus::Won => writeln!(output, "Level complete! `n` for the next level.")?,
            SessionStatus::Lost => writeln!(output, "Game over. `r` to try again.")?,
            SessionStatus::Playing => {}
        }
    }
}

/// Run the tile match game until `q` or end of input.
pub fn run_match_loop<S: ColorSource>(
    session: &mut MatchSession<S>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Tile Match: select two adjacent tiles with `row col` to swap them.")?;
    writeln!(output, "Commands: s settle, r new game, j json, q quit.")?;

    loop {
        let snapshot = session.snapshot();
        write!(output, "{}", render_tile_grid(&snapshot.grid))?;
        writeln!(output, "{}", render_match_status(&snapshot))?;

        let Some(command) = read_command(input, output)? else {
            return Ok(());
        };
        match command {
            Command::Cell { row, col } => match session.select(row, col) {
                Ok(SelectOutcome::Swapped(report)) => writeln!(
                    output,
                    "Swapped, {} tiles matched, +{}",
                    report.collapse.matched.len(),
                    report.collapse.score
                )?,
                Ok(SelectOutcome::NotAdjacent { .. }) => writeln!(output, "Tiles are not adjacent")?,
                Ok(_) => {}
                Err(err) => writeln!(output, "Rejected: {}", err)?,
            },
            Command::Settle => {
                let report = session.settle();
                writeln!(output, "{} tiles matched, +{}", report.matched.len(), report.score)?;
            }
            Command::Restart => session.new_game(),
            Command::Json => write_json(output, session.snapshot_json())?,
            Command::Quit => return Ok(()),
            Command::NextLevel | Command::Unknown => writeln!(output, "Unknown command")?,
        }
    }
}
