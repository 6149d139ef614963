//! Immutable snapshots of a partially cleared forest.

use std::{collections::BTreeSet, fmt};

use lumberjack_core::{Height, InputError, OutOfBounds, Passability, Position, FLAT, TRENCH};

use crate::{navigation::min_distance, TerrainGrid};

/// Terrain together with the lumberjack's position.
///
/// Two states are equal when their grids match cell for cell and the
/// lumberjack stands in the same place, which makes states usable as search
/// keys. States are never mutated: [`ForestState::chop`] returns a new state
/// owning its own copy of the terrain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForestState {
    grid: TerrainGrid,
    actor: Position,
}

impl ForestState {
    /// Creates a state, checking the terrain heights and the starting position.
    pub fn new(grid: TerrainGrid, actor: Position) -> Result<Self, InputError> {
        if let Some(cell) = grid.cells().find(|cell| cell.height() < TRENCH) {
            return Err(InputError::InvalidEntry {
                position: cell.position(),
                height: cell.height(),
            });
        }

        if !grid.in_bounds(actor) {
            return Err(InputError::StartOutOfBounds {
                position: actor,
                rows: grid.rows(),
                columns: grid.columns(),
            });
        }

        Ok(Self { grid, actor })
    }

    /// Creates a state directly from nested terrain rows.
    pub fn from_rows(rows: Vec<Vec<Height>>, actor: Position) -> Result<Self, InputError> {
        Self::new(TerrainGrid::terrain(rows)?, actor)
    }

    /// Terrain owned by the state.
    #[must_use]
    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    /// Cell the lumberjack currently occupies.
    #[must_use]
    pub const fn actor(&self) -> Position {
        self.actor
    }

    /// Number of rows in the terrain.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns in the terrain.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Height of the terrain at the position.
    pub fn height_at(&self, position: Position) -> Result<Height, OutOfBounds> {
        self.grid.height(position)
    }

    /// Reports whether any tree is still standing.
    #[must_use]
    pub fn has_standing_trees(&self) -> bool {
        self.grid.heights().iter().any(|&height| height > FLAT)
    }

    /// Positions whose height equals `height`.
    #[must_use]
    pub fn contour(&self, height: Height) -> BTreeSet<Position> {
        self.grid
            .cells()
            .filter(|cell| cell.height() == height)
            .map(|cell| cell.position())
            .collect()
    }

    /// Trees of the lowest standing height, all of which are candidates for
    /// the next chop.
    ///
    /// Empty once the forest is cleared. Whether a candidate can actually be
    /// reached is decided by [`ForestState::find_path`].
    #[must_use]
    pub fn next_choppable_trees(&self) -> BTreeSet<Position> {
        self.grid
            .heights()
            .iter()
            .copied()
            .filter(|&height| height > FLAT)
            .min()
            .map(|shortest| self.contour(shortest))
            .unwrap_or_default()
    }

    /// Walking distance from the lumberjack to `to`.
    ///
    /// The walk may cross flat ground only, except that it may end on the
    /// destination when that is a tree. Trenches are never entered.
    #[must_use]
    pub fn find_path(&self, to: Position) -> Option<u32> {
        min_distance(
            &self.grid,
            self.actor,
            to,
            Passability::FlatOrDestination(to),
        )
    }

    /// State after cutting down the tree at `position` and standing on its
    /// stump.
    pub fn chop(&self, position: Position) -> Result<ForestState, OutOfBounds> {
        let mut grid = self.grid.clone();
        grid.set_height(position, FLAT)?;
        Ok(Self {
            grid,
            actor: position,
        })
    }

    /// Every state reachable by walking to one of the next choppable trees and
    /// cutting it down, in row-major order of the chopped tree.
    ///
    /// Unreachable candidates are left out, so a forest whose shortest trees
    /// are all walled off yields no successors even though trees remain.
    #[must_use]
    pub fn successors(&self) -> Vec<StateJump> {
        self.next_choppable_trees()
            .into_iter()
            .filter_map(|tree| {
                let distance = self.find_path(tree)?;
                let state = self.chop(tree).ok()?;
                Some(StateJump { state, distance })
            })
            .collect()
    }
}

impl fmt::Display for ForestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}actor = {}", self.grid, self.actor)
    }
}

/// A state paired with the distance walked to reach it from its predecessor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateJump {
    /// State reached by the jump.
    pub state: ForestState,
    /// Number of steps walked to reach the state.
    pub distance: u32,
}

impl StateJump {
    /// Creates a new jump.
    #[must_use]
    pub const fn new(state: ForestState, distance: u32) -> Self {
        Self { state, distance }
    }
}
