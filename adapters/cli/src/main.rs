#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that solves lumberjack puzzles.

mod puzzle;
mod report;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lumberjack_core::Position;
use lumberjack_system_solver::{Solver, SolverConfig};
use lumberjack_world::ForestState;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::puzzle::{parse_position, Puzzle};

/// Finds the shortest walk that cuts down every tree, shortest trees first.
#[derive(Debug, Parser)]
#[command(name = "lumberjack", version)]
struct Args {
    /// TOML puzzle file declaring `start` and `grid`.
    puzzle: PathBuf,
    /// Starting position as ROW,COLUMN, overriding the puzzle file.
    #[arg(long, value_parser = parse_start, allow_hyphen_values = true)]
    start: Option<Position>,
    /// Abort after recording this many distinct forest states.
    #[arg(long)]
    max_states: Option<usize>,
    /// Render the grid after every chop.
    #[arg(long)]
    show_path: bool,
    /// Print a JSON report instead of text.
    #[arg(long, conflicts_with = "show_path")]
    json: bool,
    /// Raise log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the lumberjack command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let puzzle = Puzzle::load(&args.puzzle)?;
    let start = args.start.unwrap_or_else(|| puzzle.start());
    let config = SolverConfig {
        max_states: args.max_states.or_else(|| puzzle.max_states()),
    };
    debug!(puzzle = %args.puzzle.display(), %start, ?config, "loaded puzzle");

    let initial = ForestState::from_rows(puzzle.into_grid(), start)
        .with_context(|| format!("invalid puzzle {}", args.puzzle.display()))?;
    let solution = Solver::with_config(initial, config)
        .detailed_solve()
        .context("search stopped before finding an answer")?;

    let mut out = io::stdout().lock();
    if args.json {
        report::write_json(&mut out, solution.as_ref())?;
    } else {
        report::write_text(&mut out, solution.as_ref(), args.show_path)?;
    }

    Ok(())
}

fn parse_start(value: &str) -> Result<Position, String> {
    parse_position(value).map_err(|error| format!("{error:#}"))
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
