mod common;

use common::{all_entries, grid};
use lasergrid::config::{BoardParams, GenerateParams};
use lasergrid::evaluator::evaluate;
use lasergrid::generator::{derive_clues, generate};
use lasergrid::geometry::{Direction, Grid, Offset};
use lasergrid::mirrors::{Mirror, MirrorField};
use lasergrid::tracer::{shoot_laser, Termination};
use lasergrid::PuzzleEngine;
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_mirror() -> impl Strategy<Value = Option<Mirror>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(Mirror::Forward)),
        1 => Just(Some(Mirror::Backward)),
    ]
}

prop_compose! {
    fn arb_board()(size in 1usize..9)(
        cells in proptest::collection::vec(arb_mirror(), size * size),
        size in Just(size)
    ) -> (Grid, MirrorField) {
        let mut field = MirrorField::new(size);
        for (i, cell) in cells.into_iter().enumerate() {
            field.set(Offset::new(i / size, i % size), cell).unwrap();
        }
        (grid(size), field)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_every_ray_terminates_on_the_ring((g, field) in arb_board()) {
        for (side, index) in all_entries(g.center_size()) {
            let trace = shoot_laser(&g, &field, g.entry_dot(side, index), side.direction());
            prop_assert_eq!(trace.termination, Termination::DotRing);
            prop_assert!(g.on_dot_ring(trace.final_dot));
            prop_assert!(!trace.segments.is_empty());
        }
    }

    #[test]
    fn test_product_is_product_of_segment_steps((g, field) in arb_board()) {
        for (side, index) in all_entries(g.center_size()) {
            let trace = shoot_laser(&g, &field, g.entry_dot(side, index), side.direction());
            let expected: u64 = trace.segments.iter().map(|s| s.steps as u64).product();
            prop_assert_eq!(trace.product, expected);
            prop_assert!(trace.product >= 1);
            prop_assert!(trace.segments.iter().all(|s| s.steps >= 1));
            for pair in trace.segments.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_paths_are_reversible((g, field) in arb_board()) {
        for (side, index) in all_entries(g.center_size()) {
            let forward = shoot_laser(&g, &field, g.entry_dot(side, index), side.direction());
            let last = forward.segments.last().unwrap();
            let heading = if last.end.row > last.start.row {
                Direction::Up
            } else if last.end.row < last.start.row {
                Direction::Down
            } else if last.end.col > last.start.col {
                Direction::Left
            } else {
                Direction::Right
            };
            let back = shoot_laser(&g, &field, forward.final_dot, heading);
            prop_assert_eq!(back.product, forward.product);
            prop_assert_eq!(back.final_dot, g.entry_dot(side, index));
        }
    }

    #[test]
    fn test_derived_clues_are_solved_without_collisions((g, field) in arb_board()) {
        let clues = derive_clues(&g, &field, false);
        let first = evaluate(&g, &field, &clues);
        prop_assert!(first.solved);
        prop_assert_eq!(first.collisions().count(), 0);
        prop_assert_eq!(first.outputs.len(), clues.len());

        let again = evaluate(&g, &field, &clues);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn test_solved_iff_all_products_match(
        (g, field) in arb_board(),
        bump in 0usize..64
    ) {
        let mut clues = derive_clues(&g, &field, false);
        let positions: Vec<_> = clues.iter().map(|(s, i, _)| (s, i)).collect();
        let (side, index) = positions[bump % positions.len()];
        *clues.side_mut(side).get_mut(&index).unwrap() += 1;

        let eval = evaluate(&g, &field, &clues);
        prop_assert!(!eval.solved);
        prop_assert_eq!(eval.matched(), eval.results.len() - 1);
        prop_assert_eq!(
            eval.solved,
            eval.results.iter().all(|r| r.trace.product == r.expected)
        );
    }

    #[test]
    fn test_generated_puzzle_round_trips(
        size in 1usize..8,
        density in 0.0f32..=1.0,
        hidden in 0usize..6,
        seed in any::<u64>()
    ) {
        let board = BoardParams { center_size: size };
        let params = GenerateParams { density, hidden, require_reflection: false, seed: Some(seed) };
        let def = generate(&board, &params).unwrap();
        prop_assert!(def.validate().is_ok());

        let mut engine = PuzzleEngine::from_definition(&def).unwrap();
        engine.place_all(&def.solution).unwrap();
        prop_assert!(engine.is_solved());

        if let Some(table) = def.hidden.clone() {
            let answer = engine.reveal_hidden(table.clone()).unwrap().clone();
            for (side, index, value) in table.iter() {
                if value != 0 {
                    continue;
                }
                let original = def.clues.side(side)[&index];
                let got = answer.side(side).iter().find(|r| r.index == index).map(|r| r.value);
                prop_assert_eq!(got, Some(original));
            }
        }
    }

    #[test]
    fn test_generation_is_reproducible(size in 1usize..8, seed in any::<u64>()) {
        let board = BoardParams { center_size: size };
        let params = GenerateParams { seed: Some(seed), ..Default::default() };
        prop_assert_eq!(generate(&board, &params).unwrap(), generate(&board, &params).unwrap());
    }
}
