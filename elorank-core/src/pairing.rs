/// Pair selection for the next comparison.
///
/// Policy: the item that has gone longest without being shown is always one
/// side of the next pair, and its opponent is drawn uniformly at random from
/// everything else.
use std::cmp::Ordering;

use rand::Rng;

use crate::error::{RankError, Result};
use crate::state::RankingState;
use crate::types::Pair;

/// Order items by ascending `last_used`, ties broken by id.
///
/// Duplicate ids collapse to a single entry.
pub fn order_by_staleness<'a, S: AsRef<str>>(state: &RankingState, item_ids: &'a [S]) -> Vec<&'a str> {
    let mut ordered: Vec<&str> = item_ids.iter().map(|s| s.as_ref()).collect();
    ordered.sort_by(|a, b| {
        state
            .last_used(a)
            .partial_cmp(&state.last_used(b))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(b))
    });
    ordered.dedup();
    ordered
}

/// Pick the next pair to present: `(stalest item, random other item)`.
pub fn pick_pair<S: AsRef<str>>(
    state: &RankingState,
    item_ids: &[S],
    rng: &mut impl Rng,
) -> Result<Pair> {
    let ordered = order_by_staleness(state, item_ids);
    if ordered.len() < 2 {
        return Err(RankError::InsufficientItems { available: ordered.len() });
    }

    let first = ordered[0];
    let candidates: Vec<&str> = ordered[1..].iter().copied().filter(|&id| id != first).collect();
    if candidates.is_empty() {
        return Err(RankError::InsufficientItems { available: 1 });
    }

    let second = candidates[rng.random_range(0..candidates.len())];
    Ok((first.to_string(), second.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img{i:02}.png")).collect()
    }

    #[test]
    fn test_stalest_item_goes_first() {
        let items = ids(4);
        let mut state = RankingState::initialize(&items, 1000);
        state.touch("img00.png", 30.0);
        state.touch("img01.png", 10.0);
        state.touch("img02.png", 5.0);
        state.touch("img03.png", 20.0);

        let mut rng = StdRng::seed_from_u64(7);
        let (first, second) = pick_pair(&state, &items, &mut rng).unwrap();
        assert_eq!(first, "img02.png");
        assert_ne!(second, first);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let items = vec!["c", "a", "b"];
        let state = RankingState::initialize(&items, 1000);
        let ordered = order_by_staleness(&state, &items);
        assert_eq!(ordered, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_items_count_as_never_used() {
        let mut state = RankingState::initialize(&["old"], 1000);
        state.touch("old", 100.0);
        let items = vec!["old", "new"];
        let ordered = order_by_staleness(&state, &items);
        assert_eq!(ordered[0], "new");
    }

    #[test]
    fn test_partner_is_never_the_same_item() {
        let items = ids(2);
        let state = RankingState::initialize(&items, 1000);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let (a, b) = pick_pair(&state, &items, &mut rng).unwrap();
            assert_eq!(a, "img00.png");
            assert_eq!(b, "img01.png");
        }
    }

    #[test]
    fn test_partner_covers_all_others() {
        let items = ids(5);
        let state = RankingState::initialize(&items, 1000);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let (_, b) = pick_pair(&state, &items, &mut rng).unwrap();
            seen.insert(b);
        }
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains("img00.png"));
    }

    #[test]
    fn test_insufficient_items() {
        let state = RankingState::default();
        let mut rng = StdRng::seed_from_u64(0);

        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            pick_pair(&state, &empty, &mut rng),
            Err(RankError::InsufficientItems { available: 0 })
        ));
        assert!(matches!(
            pick_pair(&state, &["only"], &mut rng),
            Err(RankError::InsufficientItems { available: 1 })
        ));
    }

    #[test]
    fn test_duplicates_do_not_count_as_distinct_items() {
        let state = RankingState::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            pick_pair(&state, &["same", "same"], &mut rng),
            Err(RankError::InsufficientItems { available: 1 })
        ));
    }

    #[test]
    fn test_no_starvation_over_item_count_rounds() {
        let items = ids(12);
        let mut state = RankingState::initialize(&items, 1000);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut touched = HashSet::new();

        for round in 0..items.len() {
            let (a, b) = pick_pair(&state, &items, &mut rng).unwrap();
            let now = (round + 1) as f64;
            state.touch(&a, now);
            state.touch(&b, now);
            touched.insert(a);
            touched.insert(b);
        }
        assert_eq!(touched.len(), items.len());
    }
}
