#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the lumberjack planner.
//!
//! This crate defines the value types that connect the terrain grid, the
//! forest state search and the adapters that drive it. Positions and cells are
//! plain data: they know how to name their cardinal neighbours and how to
//! render themselves, but they never consult a grid. Passability strategies
//! describe which cells a walk may step onto, and the error taxonomy separates
//! malformed input from contract violations inside the core.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height stored in a single terrain cell.
///
/// Negative one marks an impassable trench, zero marks flat ground and any
/// positive value marks a standing tree of that height.
pub type Height = i32;

/// Height recorded for an impassable trench.
pub const TRENCH: Height = -1;

/// Height recorded for flat, walkable ground.
pub const FLAT: Height = 0;

/// Cardinal movement directions available to the lumberjack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];
}

/// Location of a single grid cell expressed as row and column coordinates.
///
/// Coordinates are signed so that callers can describe positions that fall
/// outside a grid; the grid rejects them with [`OutOfBounds`] instead of
/// wrapping or clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the position.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index of the position.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Position reached by a single step in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.row.saturating_sub(1), self.column),
            Direction::East => Self::new(self.row, self.column.saturating_add(1)),
            Direction::South => Self::new(self.row.saturating_add(1), self.column),
            Direction::West => Self::new(self.row, self.column.saturating_sub(1)),
        }
    }

    /// The four cardinal neighbours in [`Direction::ALL`] order.
    ///
    /// No bounds filtering happens here; neighbours of an edge cell may lie
    /// outside any grid.
    #[must_use]
    pub fn cardinal_neighbors(self) -> [Position; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Snapshot of what a grid holds at a position.
///
/// Cells are derived from a grid lookup and handed to passability checks so
/// that predicates never have to query the grid again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    height: Height,
}

impl Cell {
    /// Creates a new cell snapshot.
    #[must_use]
    pub const fn new(position: Position, height: Height) -> Self {
        Self { position, height }
    }

    /// Position the snapshot was taken at.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Height recorded at the position.
    #[must_use]
    pub const fn height(&self) -> Height {
        self.height
    }

    /// Reports whether the cell is flat ground.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.height == FLAT
    }

    /// Reports whether the cell holds a standing tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.height > FLAT
    }

    /// Reports whether the cell is a trench.
    #[must_use]
    pub const fn is_trench(&self) -> bool {
        self.height < FLAT
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.position.row, self.position.column, self.height
        )
    }
}

/// Strategies deciding which cells a walk may step onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Passability {
    /// Every in-bounds cell may be entered.
    Any,
    /// Only flat ground may be entered.
    FlatOnly,
    /// Flat ground may be entered, as may the destination tree itself.
    ///
    /// A trench is never admitted, even when it is the destination.
    FlatOrDestination(Position),
}

impl Passability {
    /// Reports whether the strategy allows stepping onto the cell.
    #[must_use]
    pub fn admits(self, cell: Cell) -> bool {
        match self {
            Self::Any => true,
            Self::FlatOnly => cell.is_flat(),
            Self::FlatOrDestination(destination) => {
                cell.is_flat() || (cell.position() == destination && !cell.is_trench())
            }
        }
    }
}

/// Reasons an initial puzzle description may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// The grid has no rows or no columns.
    #[error("terrain grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyDimension {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns found in the first row.
        columns: usize,
    },
    /// The grid is too large to address with signed coordinates.
    #[error("terrain grid {rows}x{columns} exceeds the addressable range")]
    Oversized {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns found in the first row.
        columns: usize,
    },
    /// A row does not have the same length as the first row.
    #[error("terrain row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Column count taken from the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// An entry failed the grid's validation predicate.
    #[error("invalid terrain entry {height} at {position}")]
    InvalidEntry {
        /// Position of the rejected entry.
        position: Position,
        /// Value that failed validation.
        height: Height,
    },
    /// The lumberjack's starting position lies outside the grid.
    #[error("starting position {position} lies outside the {rows}x{columns} grid")]
    StartOutOfBounds {
        /// Requested starting position.
        position: Position,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        columns: usize,
    },
}

/// A position query fell outside the grid extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("position {position} lies outside the {rows}x{columns} grid")]
pub struct OutOfBounds {
    /// Position that was queried.
    pub position: Position,
    /// Number of rows in the grid.
    pub rows: usize,
    /// Number of columns in the grid.
    pub columns: usize,
}
