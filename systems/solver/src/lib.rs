#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pruned breadth-first search for the cheapest way to clear a forest.
//!
//! Trees must be cut shortest first. The solver explores forest states one
//! chop at a time: every round extends each frontier path by the successors of
//! its last state. Many chop orders lead to the same terrain and position, and
//! the future of a search only depends on that state, so a path survives into
//! the next round only when it reaches its state more cheaply than any path
//! seen before.
//!
//! Paths whose last state has no successors are terminal. Those that still
//! have trees standing are dead ends and are discarded; the cheapest of the
//! rest is the answer.

mod path;

use std::collections::HashMap;

use lumberjack_world::ForestState;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use path::Path;

/// Limits applied to a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest number of distinct forest states the search may record, or
    /// `None` for no limit.
    pub max_states: Option<usize>,
}

/// Reasons a search may stop without an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The search recorded more distinct states than the configured limit.
    #[error("search exceeded the budget of {limit} forest states")]
    StateBudgetExceeded {
        /// Configured state limit.
        limit: usize,
    },
}

/// Counters describing a finished search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of breadth-first rounds expanded.
    pub rounds: usize,
    /// Number of distinct forest states recorded.
    pub states: usize,
    /// Number of paths that ended with no successors.
    pub terminal_paths: usize,
    /// Terminal paths discarded because trees were still standing.
    pub dead_ends: usize,
}

/// Finds the shortest walk that cuts down every tree in height order.
#[derive(Clone, Debug)]
pub struct Solver {
    initial: ForestState,
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver without a state limit.
    #[must_use]
    pub fn new(initial: ForestState) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    /// Creates a solver with explicit limits.
    #[must_use]
    pub fn with_config(initial: ForestState, config: SolverConfig) -> Self {
        Self { initial, config }
    }

    /// State the search starts from.
    #[must_use]
    pub fn initial(&self) -> &ForestState {
        &self.initial
    }

    /// Minimum distance needed to clear the forest, or `None` when it cannot
    /// be cleared.
    pub fn solve(&self) -> Result<Option<u32>, SolveError> {
        Ok(self.detailed_solve()?.map(|path| path.total_distance()))
    }

    /// A cheapest path that clears the forest, or `None` when it cannot be
    /// cleared.
    pub fn detailed_solve(&self) -> Result<Option<Path>, SolveError> {
        self.detailed_solve_with_stats().map(|(path, _)| path)
    }

    /// Same as [`Solver::detailed_solve`], also reporting search counters.
    pub fn detailed_solve_with_stats(&self) -> Result<(Option<Path>, SearchStats), SolveError> {
        let mut best_known: HashMap<ForestState, u32> = HashMap::new();
        let _ = best_known.insert(self.initial.clone(), 0);

        let mut frontier = vec![Path::new(self.initial.clone())];
        let mut terminal = Vec::new();
        let mut stats = SearchStats::default();

        while !frontier.is_empty() {
            stats.rounds += 1;
            let mut next_frontier = Vec::new();

            for path in frontier {
                let successors = path.head().state.successors();
                if successors.is_empty() {
                    terminal.push(path);
                    continue;
                }

                for jump in successors {
                    let candidate = path.total_distance().saturating_add(jump.distance);
                    let improves = best_known
                        .get(&jump.state)
                        .map_or(true, |&known| known > candidate);
                    if !improves {
                        continue;
                    }

                    let _ = best_known.insert(jump.state.clone(), candidate);
                    self.check_budget(best_known.len())?;
                    next_frontier.push(path.extended(jump));
                }
            }

            debug!(
                round = stats.rounds,
                frontier = next_frontier.len(),
                states = best_known.len(),
                "expanded search round"
            );
            frontier = next_frontier;
        }

        stats.states = best_known.len();
        stats.terminal_paths = terminal.len();

        let (cleared, dead_ends): (Vec<Path>, Vec<Path>) = terminal
            .into_iter()
            .partition(|path| !path.head().state.has_standing_trees());
        stats.dead_ends = dead_ends.len();
        if stats.dead_ends > 0 {
            warn!(
                dead_ends = stats.dead_ends,
                "discarded terminal paths with trees still standing"
            );
        }

        let best = cleared.into_iter().min_by_key(Path::total_distance);
        match &best {
            Some(path) => info!(
                distance = path.total_distance(),
                rounds = stats.rounds,
                states = stats.states,
                "forest cleared"
            ),
            None => warn!(
                rounds = stats.rounds,
                dead_ends = stats.dead_ends,
                "no path clears the forest"
            ),
        }

        Ok((best, stats))
    }

    fn check_budget(&self, recorded: usize) -> Result<(), SolveError> {
        match self.config.max_states {
            Some(limit) if recorded > limit => {
                warn!(limit, "search state budget exhausted");
                Err(SolveError::StateBudgetExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
