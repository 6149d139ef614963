//! Dense terrain storage with bounds-checked access and text rendering.

use std::fmt;

use lumberjack_core::{Cell, Height, InputError, OutOfBounds, Position, TRENCH};

/// Rectangular grid of terrain heights stored in row-major order.
///
/// Grids are validated when constructed and never resized afterwards. Every
/// forest state owns its own copy, so writing a cell through one state can
/// never be observed through another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TerrainGrid {
    rows: usize,
    columns: usize,
    heights: Vec<Height>,
}

impl TerrainGrid {
    /// Builds a grid from nested rows without validating entry values.
    pub fn new(rows: Vec<Vec<Height>>) -> Result<Self, InputError> {
        Self::with_validation(rows, |_| true)
    }

    /// Builds a grid whose entries are all trenches, flat ground or trees.
    pub fn terrain(rows: Vec<Vec<Height>>) -> Result<Self, InputError> {
        Self::with_validation(rows, |height| height >= TRENCH)
    }

    /// Builds a grid, rejecting any entry for which `is_valid` returns false.
    pub fn with_validation<F>(rows: Vec<Vec<Height>>, mut is_valid: F) -> Result<Self, InputError>
    where
        F: FnMut(Height) -> bool,
    {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);

        if row_count == 0 || column_count == 0 {
            return Err(InputError::EmptyDimension {
                rows: row_count,
                columns: column_count,
            });
        }

        if i32::try_from(row_count).is_err() || i32::try_from(column_count).is_err() {
            return Err(InputError::Oversized {
                rows: row_count,
                columns: column_count,
            });
        }

        if let Some((row_index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_count)
        {
            return Err(InputError::RaggedRow {
                row: row_index,
                expected: column_count,
                found: row.len(),
            });
        }

        let mut heights = Vec::with_capacity(row_count * column_count);
        for (row_index, row) in rows.into_iter().enumerate() {
            for (column_index, height) in row.into_iter().enumerate() {
                if !is_valid(height) {
                    return Err(InputError::InvalidEntry {
                        position: position_of(row_index, column_index),
                        height,
                    });
                }
                heights.push(height);
            }
        }

        Ok(Self {
            rows: row_count,
            columns: column_count,
            heights,
        })
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Heights stored in row-major order.
    #[must_use]
    pub fn heights(&self) -> &[Height] {
        &self.heights
    }

    /// Reports whether the position lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Height stored at the position.
    pub fn height(&self, position: Position) -> Result<Height, OutOfBounds> {
        self.index(position)
            .map(|index| self.heights[index])
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Snapshot of the cell stored at the position.
    pub fn cell(&self, position: Position) -> Result<Cell, OutOfBounds> {
        self.height(position).map(|height| Cell::new(position, height))
    }

    pub(crate) fn set_height(
        &mut self,
        position: Position,
        height: Height,
    ) -> Result<(), OutOfBounds> {
        let index = self
            .index(position)
            .ok_or_else(|| self.out_of_bounds(position))?;
        self.heights[index] = height;
        Ok(())
    }

    /// Iterates over every cell exactly once, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns;
        self.heights.iter().enumerate().map(move |(index, &height)| {
            Cell::new(position_of(index / columns, index % columns), height)
        })
    }

    /// In-bounds cardinal neighbours of `position` that satisfy `passable`.
    pub fn neighbors<F>(&self, position: Position, mut passable: F) -> Vec<Position>
    where
        F: FnMut(Cell) -> bool,
    {
        position
            .cardinal_neighbors()
            .into_iter()
            .filter(|&neighbor| self.cell(neighbor).is_ok_and(|cell| passable(cell)))
            .collect()
    }

    /// Renders the grid with the entry at `position` replaced by `mark`.
    ///
    /// An empty mark renders the grid unchanged.
    #[must_use]
    pub fn annotate(&self, position: Position, mark: &str) -> String {
        let mut rendered = String::new();
        let marker = (!mark.is_empty()).then_some((position, mark));
        self.render(&mut rendered, marker)
            .expect("rendering into a String never fails");
        rendered
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, position: Position) -> OutOfBounds {
        OutOfBounds {
            position,
            rows: self.rows,
            columns: self.columns,
        }
    }

    fn render<W: fmt::Write>(&self, out: &mut W, marker: Option<(Position, &str)>) -> fmt::Result {
        let entry_width = self
            .heights
            .iter()
            .map(|height| height.to_string().len())
            .max()
            .unwrap_or(1);
        let width = marker.map_or(entry_width, |(_, mark)| {
            entry_width.max(mark.chars().count())
        });

        for cell in self.cells() {
            match marker {
                Some((position, mark)) if position == cell.position() => {
                    write!(out, " {mark:>width$}")?;
                }
                _ => write!(out, " {:>width$}", cell.height())?,
            }
            if usize::try_from(cell.position().column()).ok() == Some(self.columns - 1) {
                out.write_char('\n')?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, None)
    }
}

fn position_of(row: usize, column: usize) -> Position {
    // Constructors reject grids whose extents do not fit in an i32.
    Position::new(
        i32::try_from(row).unwrap_or(i32::MAX),
        i32::try_from(column).unwrap_or(i32::MAX),
    )
}
