use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use lumberjack_core::{Height, Position};
use serde::Deserialize;

/// Puzzle description loaded from a TOML file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Puzzle {
    /// Starting cell of the lumberjack as `[row, column]`.
    start: [i32; 2],
    /// Terrain rows: -1 trench, 0 flat ground, n > 0 tree of height n.
    grid: Vec<Vec<Height>>,
    /// Optional search limits.
    #[serde(default)]
    solver: SolverSection,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct SolverSection {
    max_states: Option<usize>,
}

impl Puzzle {
    /// Loads a puzzle from the file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to load puzzle from {}", path.display()))
    }

    /// Parses a puzzle from TOML contents.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse puzzle toml contents")
    }

    /// Starting position declared by the puzzle.
    pub(crate) fn start(&self) -> Position {
        Position::new(self.start[0], self.start[1])
    }

    /// State limit declared by the puzzle, if any.
    pub(crate) fn max_states(&self) -> Option<usize> {
        self.solver.max_states
    }

    /// Consumes the puzzle, yielding its terrain rows.
    pub(crate) fn into_grid(self) -> Vec<Vec<Height>> {
        self.grid
    }
}

/// Parses a `ROW,COLUMN` pair given on the command line.
pub(crate) fn parse_position(value: &str) -> Result<Position> {
    let Some((row, column)) = value.split_once(',') else {
        bail!("expected ROW,COLUMN but got '{value}'");
    };

    let row = row
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid row in '{value}'"))?;
    let column = column
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid column in '{value}'"))?;

    Ok(Position::new(row, column))
}
