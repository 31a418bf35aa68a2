//! Property-based tests for elorank-core
//!
//! Uses proptest to check the rating update and persistence invariants.

use elorank_core::elo::update;
use elorank_core::{apply_decision, initialize, Decision, EngineConfig, RatingStore};
use proptest::prelude::*;

proptest! {
    #[test]
    fn winner_never_drops_loser_never_rises(
        winner in -5_000i64..5_000,
        loser in -5_000i64..5_000,
        k in 1u32..100,
    ) {
        let (w, l) = update(winner, loser, k as f64);
        prop_assert!(w >= winner);
        prop_assert!(l <= loser);
    }

    #[test]
    fn single_step_change_bounded_by_k(
        winner in -5_000i64..5_000,
        loser in -5_000i64..5_000,
        k in 1u32..100,
    ) {
        let (w, l) = update(winner, loser, k as f64);
        prop_assert!((w - winner).abs() <= k as i64);
        prop_assert!((l - loser).abs() <= k as i64);
    }

    #[test]
    fn swapping_roles_reflects_the_change(
        a in -5_000i64..5_000,
        b in -5_000i64..5_000,
    ) {
        // a beats b, then (separately) b beats a.
        let (a_won, b_lost) = update(a, b, 32.0);
        let (b_won, a_lost) = update(b, a, 32.0);

        // Unrounded, the winner's gain equals the loser's loss in each case,
        // and the two cases sum to k. Rounding can shift each side by one.
        prop_assert!(((a_won - a) - (b - b_lost)).abs() <= 1);
        prop_assert!(((b_won - b) - (a - a_lost)).abs() <= 1);
        prop_assert!(((a_won - a) + (b_won - b) - 32).abs() <= 1);
    }

    #[test]
    fn update_is_deterministic(a in -5_000i64..5_000, b in -5_000i64..5_000) {
        prop_assert_eq!(update(a, b, 32.0), update(a, b, 32.0));
    }

    #[test]
    fn save_then_load_is_identity(
        n_items in 2usize..8,
        decisions in prop::collection::vec((0usize..8, 0usize..8, 1.0f64..2e9), 0..40),
    ) {
        let items: Vec<String> = (0..n_items).map(|i| format!("item{i}.jpg")).collect();
        let config = EngineConfig::default();
        let mut state = initialize(&items, config.base_rating);

        for (w, l, now) in decisions {
            let (w, l) = (w % n_items, l % n_items);
            if w == l {
                continue;
            }
            let shown = (items[w].clone(), items[l].clone());
            let decision = Decision::new(items[w].clone(), items[l].clone());
            apply_decision(&mut state, &shown, &decision, now, &config).unwrap();
        }

        let dir = tempfile::TempDir::new().unwrap();
        let store = RatingStore::new(dir.path().join("elo.json"));
        store.save(&state).unwrap();
        let loaded = store.load(&items, config.base_rating).unwrap();
        prop_assert_eq!(loaded, state);
    }
}
