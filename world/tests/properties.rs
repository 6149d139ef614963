use lumberjack_core::{Height, Passability, Position, FLAT};
use lumberjack_world::{min_distance, ForestState, TerrainGrid};
use proptest::prelude::*;

fn terrain() -> impl Strategy<Value = (Vec<Vec<Height>>, Position, Position)> {
    (1usize..7, 1usize..7).prop_flat_map(|(rows, columns)| {
        (
            prop::collection::vec(prop::collection::vec(-1i32..=4, columns), rows),
            position_within(rows, columns),
            position_within(rows, columns),
        )
    })
}

fn position_within(rows: usize, columns: usize) -> impl Strategy<Value = Position> {
    (0..rows as i32, 0..columns as i32).prop_map(|(row, column)| Position::new(row, column))
}

fn flatten(rows: &mut [Vec<Height>], position: Position) {
    rows[position.row() as usize][position.column() as usize] = FLAT;
}

proptest! {
    #[test]
    fn flat_only_distance_is_symmetric((mut rows, from, to) in terrain()) {
        flatten(&mut rows, from);
        flatten(&mut rows, to);
        let grid = TerrainGrid::terrain(rows).expect("generated terrain is valid");

        let forward = min_distance(&grid, from, to, Passability::FlatOnly);
        let backward = min_distance(&grid, to, from, Passability::FlatOnly);

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn distance_never_beats_manhattan((rows, from, to) in terrain()) {
        let grid = TerrainGrid::terrain(rows).expect("generated terrain is valid");

        if let Some(distance) = min_distance(&grid, from, to, Passability::FlatOrDestination(to)) {
            prop_assert!(distance >= from.manhattan_distance(to));
        }
        prop_assert_eq!(
            min_distance(&grid, from, to, Passability::Any),
            Some(from.manhattan_distance(to))
        );
    }

    #[test]
    fn chop_never_touches_the_source_state((rows, actor, tree) in terrain()) {
        let source = ForestState::from_rows(rows, actor).expect("generated terrain is valid");
        let snapshot = source.clone();

        let chopped = source.chop(tree).expect("tree lies inside the grid");

        prop_assert_eq!(chopped.height_at(tree), Ok(FLAT));
        prop_assert_eq!(chopped.actor(), tree);
        prop_assert_eq!(&source, &snapshot);
    }

    #[test]
    fn successors_chop_only_shortest_trees((rows, actor, _) in terrain()) {
        let state = ForestState::from_rows(rows, actor).expect("generated terrain is valid");
        let candidates = state.next_choppable_trees();

        for jump in state.successors() {
            prop_assert!(candidates.contains(&jump.state.actor()));
            prop_assert_eq!(state.find_path(jump.state.actor()), Some(jump.distance));
        }
    }
}
