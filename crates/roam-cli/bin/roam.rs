//! Roam: data-driven exploration of a room graph
//!
//! Main entry point for the game.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use roam_cli::Repl;
use roam_core::world::load_from_file;

/// Fallback data file when none is named on the command line.
const DEFAULT_DATA_FILE: &str = "Rooms.txt";

/// Roam - explore a world of rooms loaded from a data file
#[derive(Parser, Debug)]
#[command(name = "roam")]
#[command(author, version, about = "Roam - explore a room graph!", long_about = None)]
struct Args {
    /// Path to the room data file
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data_file: String,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    // A blank argument falls back to the default, same as no argument.
    let path = match args.data_file.trim() {
        "" => DEFAULT_DATA_FILE,
        trimmed => trimmed,
    };

    let graph = match load_from_file(path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("ERROR loading room data from '{path}': {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    log::info!("loaded {} rooms from {path}", graph.len());

    let start = graph
        .start_room()
        .context("room data yielded no start room")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(graph, start, stdin.lock(), stdout.lock());
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}
