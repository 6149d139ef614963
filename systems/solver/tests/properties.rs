use lumberjack_core::{Height, Position};
use lumberjack_system_solver::Solver;
use lumberjack_world::ForestState;
use proptest::prelude::*;

fn forest(max_height: Height) -> impl Strategy<Value = ForestState> {
    (1usize..4, 1usize..4).prop_flat_map(move |(rows, columns)| {
        (
            prop::collection::vec(prop::collection::vec(-1..=max_height, columns), rows),
            0..rows as i32,
            0..columns as i32,
        )
            .prop_map(|(grid, row, column)| {
                ForestState::from_rows(grid, Position::new(row, column))
                    .expect("generated terrain is valid")
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solving_is_deterministic(initial in forest(3)) {
        let solver = Solver::new(initial);
        prop_assert_eq!(solver.detailed_solve(), solver.detailed_solve());
    }

    #[test]
    fn treeless_forests_need_no_walking(initial in forest(0)) {
        prop_assert_eq!(Solver::new(initial).solve(), Ok(Some(0)));
    }

    #[test]
    fn solutions_clear_the_forest_in_height_order(initial in forest(3)) {
        let Some(path) = Solver::new(initial).detailed_solve().expect("unbounded search") else {
            return Ok(());
        };

        let sum: u32 = path.steps().iter().map(|step| step.distance).sum();
        prop_assert_eq!(path.total_distance(), sum);
        prop_assert!(!path.head().state.has_standing_trees());

        for window in path.steps().windows(2) {
            let (before, after) = (&window[0].state, &window[1].state);
            prop_assert!(before.next_choppable_trees().contains(&after.actor()));
            prop_assert_eq!(before.find_path(after.actor()), Some(window[1].distance));
        }
    }
}
