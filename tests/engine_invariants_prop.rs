//! Property tests for the board invariants of both engines.
//!
//! Invariants covered:
//! - No chain cell is left saturated or flagged as exploding after a call.
//! - Chain score equals 10 per explosion and passes stay within the bound.
//! - Swap score equals 10 per matched tile.
//! - A non-adjacent pair never changes the colors of the board.
//! - A stabilized tile board has no run left.
use proptest::prelude::*;
use puzzle_grid::game::chain::pass_limit;
use puzzle_grid::{
    ChainEngine, ChainSettings, Color, MatchEngine, MatchSettings, Palette, Position, RandomSource,
    ResolutionOrder, SelectOutcome, detect_matches,
};

fn colors(engine: &MatchEngine) -> Vec<Color> {
    engine.grid().iter().map(|(_, t)| t.color).collect()
}

proptest! {
    #[test]
    fn chain_board_is_quiet_after_every_activation(
        seed in any::<u64>(),
        size in 2usize..9,
        max_energy in 1u8..6,
        row_major in any::<bool>(),
        clicks in prop::collection::vec((0usize..8, 0usize..8), 1..40),
    ) {
        let order = if row_major { ResolutionOrder::RowMajorScan } else { ResolutionOrder::BreadthFirst };
        let settings = ChainSettings { size, max_energy, order, ..ChainSettings::default() };
        let mut engine = ChainEngine::new(settings, Palette::chain(), RandomSource::seeded(seed))
            .expect("engine");

        for (row, col) in clicks {
            match engine.activate(row, col) {
                Ok(report) => {
                    prop_assert_eq!(report.score, 10 * report.explosions() as u32);
                    prop_assert!(report.waves.len() <= pass_limit(size, max_energy));
                }
                Err(_) => prop_assert!(row >= size || col >= size),
            }
            for (_, cell) in engine.grid().iter() {
                prop_assert!(cell.energy < max_energy);
                prop_assert!(!cell.exploding);
            }
        }
    }

    #[test]
    fn match_swaps_score_per_tile_and_far_pairs_do_nothing(
        seed in any::<u64>(),
        pairs in prop::collection::vec(((0usize..8, 0usize..8), (0usize..8, 0usize..8)), 1..30),
    ) {
        let mut engine = MatchEngine::new(MatchSettings::default(), Palette::tiles(), RandomSource::seeded(seed))
            .expect("engine");

        for ((r1, c1), (r2, c2)) in pairs {
            if (r1, c1) == (r2, c2) {
                continue;
            }
            let before = colors(&engine);
            engine.select(r1, c1).expect("first");
            let outcome = engine.select(r2, c2).expect("second");

            match outcome {
                SelectOutcome::Swapped(report) => {
                    prop_assert!(Position::new(r1, c1).is_adjacent(Position::new(r2, c2)));
                    prop_assert_eq!(report.collapse.score, 10 * report.collapse.matched.len() as u32);
                }
                SelectOutcome::NotAdjacent { .. } => {
                    prop_assert_eq!(colors(&engine), before);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
            prop_assert!(engine.selection().is_empty());
            prop_assert!(engine.grid().iter().all(|(_, t)| !t.selected));
        }
    }

    #[test]
    fn stabilized_board_has_no_match(seed in any::<u64>(), swaps in 0usize..10) {
        let mut engine = MatchEngine::new(MatchSettings::default(), Palette::tiles(), RandomSource::seeded(seed))
            .expect("engine");
        for i in 0..swaps {
            let row = i % 8;
            engine.select(row, 3).expect("first");
            engine.select(row, 4).expect("second");
        }
        engine.stabilize();
        prop_assert!(detect_matches(engine.grid()).is_empty());
        prop_assert!(engine.detect_matches().is_empty());
    }
}
