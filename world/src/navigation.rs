//! Shortest walking distances over a terrain grid.

use lumberjack_core::{Cell, Passability, Position};

use crate::TerrainGrid;

const UNREACHED: u32 = u32::MAX;

/// Minimum number of cardinal steps from `from` to `to` under a passability
/// strategy.
///
/// Returns `None` when no route exists or either endpoint lies outside the
/// grid.
#[must_use]
pub fn min_distance(
    grid: &TerrainGrid,
    from: Position,
    to: Position,
    passability: Passability,
) -> Option<u32> {
    min_distance_with(grid, from, to, |cell| passability.admits(cell))
}

/// Minimum number of cardinal steps from `from` to `to`, entering only cells
/// for which `passable` returns true.
///
/// The predicate is consulted for cells reached by expanding a neighbour,
/// never for `from` itself: the walker is already standing there. Every edge
/// has unit weight, so the search expands one distance layer at a time and
/// stops as soon as the layer containing `to` has been recorded.
pub fn min_distance_with<F>(
    grid: &TerrainGrid,
    from: Position,
    to: Position,
    mut passable: F,
) -> Option<u32>
where
    F: FnMut(Cell) -> bool,
{
    let origin = grid.index(from)?;
    let destination = grid.index(to)?;

    let mut distances = vec![UNREACHED; grid.heights().len()];
    distances[origin] = 0;

    let mut frontier = vec![from];
    let mut next_frontier = Vec::new();
    let mut layer = 0;

    while !frontier.is_empty() && distances[destination] == UNREACHED {
        layer += 1;

        for &position in &frontier {
            for neighbor in position.cardinal_neighbors() {
                let Some(index) = grid.index(neighbor) else {
                    continue;
                };

                if distances[index] <= layer {
                    continue;
                }

                if !passable(Cell::new(neighbor, grid.heights()[index])) {
                    continue;
                }

                distances[index] = layer;
                next_frontier.push(neighbor);
            }
        }

        std::mem::swap(&mut frontier, &mut next_frontier);
        next_frontier.clear();
    }

    let distance = distances[destination];
    (distance != UNREACHED).then_some(distance)
}
