#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terrain, walking distances and forest states for the lumberjack planner.
//!
//! The [`TerrainGrid`] stores heights and renders them, the navigation
//! functions answer shortest-walk queries against a grid under a passability
//! strategy, and [`ForestState`] ties a grid to the lumberjack's position and
//! derives the chops available next.

mod forest;
mod grid;
mod navigation;

pub use forest::{ForestState, StateJump};
pub use grid::TerrainGrid;
pub use navigation::{min_distance, min_distance_with};
