//! Ordered records of the chops taken through the forest.

use std::fmt;

use lumberjack_core::Position;
use lumberjack_world::{ForestState, StateJump};

/// Sequence of jumps starting from an initial state, with the total distance
/// walked.
///
/// Paths are extended by value: [`Path::extended`] returns a new path and
/// leaves the receiver untouched, so frontier entries never share mutable
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: Vec<StateJump>,
    total_distance: u32,
}

// A path always holds at least its initial state.
#[allow(clippy::len_without_is_empty)]
impl Path {
    /// Creates a path standing at the initial state without having walked.
    #[must_use]
    pub fn new(initial: ForestState) -> Self {
        Self {
            steps: vec![StateJump::new(initial, 0)],
            total_distance: 0,
        }
    }

    /// Creates a path from explicit steps, or `None` when there are none.
    #[must_use]
    pub fn from_steps(steps: Vec<StateJump>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }

        let total_distance = steps
            .iter()
            .fold(0u32, |total, step| total.saturating_add(step.distance));
        Some(Self {
            steps,
            total_distance,
        })
    }

    /// Returns a copy of the path with `step` appended.
    #[must_use]
    pub fn extended(&self, step: StateJump) -> Self {
        let total_distance = self.total_distance.saturating_add(step.distance);
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self {
            steps,
            total_distance,
        }
    }

    /// Most recent step of the path.
    #[must_use]
    pub fn head(&self) -> &StateJump {
        // Every constructor stores at least one step.
        &self.steps[self.steps.len() - 1]
    }

    /// Steps in the order they were taken.
    #[must_use]
    pub fn steps(&self) -> &[StateJump] {
        &self.steps
    }

    /// Number of steps, including the initial state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Total distance walked along the path.
    #[must_use]
    pub const fn total_distance(&self) -> u32 {
        self.total_distance
    }

    /// Lumberjack positions visited, starting with the initial position.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().map(|step| step.state.actor())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, position) in self.positions().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> ForestState {
        ForestState::from_rows(
            vec![vec![0, 1, 0], vec![0, 0, -1], vec![3, 0, 0]],
            Position::new(0, 0),
        )
        .expect("valid state")
    }

    #[test]
    fn new_path_starts_at_zero() {
        let path = Path::new(forest());

        assert_eq!(path.len(), 1);
        assert_eq!(path.total_distance(), 0);
        assert_eq!(path.head().distance, 0);
        assert_eq!(path.head().state, forest());
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let path = Path::new(forest());
        let chopped = forest().chop(Position::new(0, 1)).expect("in bounds");

        let longer = path.extended(StateJump::new(chopped.clone(), 1));

        assert_eq!(path.len(), 1);
        assert_eq!(path.total_distance(), 0);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.total_distance(), 1);
        assert_eq!(longer.head().state, chopped);
    }

    #[test]
    fn from_steps_sums_distances() {
        let steps = vec![
            StateJump::new(forest(), 0),
            StateJump::new(forest(), 4),
            StateJump::new(forest(), 3),
        ];

        let path = Path::from_steps(steps).expect("non-empty steps");

        assert_eq!(path.total_distance(), 7);
        assert!(Path::from_steps(Vec::new()).is_none());
    }

    #[test]
    fn display_joins_positions() {
        let first = forest().chop(Position::new(0, 1)).expect("in bounds");
        let second = first.chop(Position::new(2, 0)).expect("in bounds");
        let path = Path::new(forest())
            .extended(StateJump::new(first, 1))
            .extended(StateJump::new(second, 3));

        assert_eq!(path.to_string(), "(0, 0) -> (0, 1) -> (2, 0)");
    }
}
