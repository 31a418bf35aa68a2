/// ELO rating update using the standard logistic expected-score model.
///
/// Ratings are integers. Each update rounds half-to-even (banker's rounding),
/// so a result exactly halfway between two integers goes to the even one.
/// There is no floor or ceiling; ratings may drift without bound.
use crate::constants::ELO_SCALE;

/// Probability that an item rated `rating` beats one rated `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / ELO_SCALE))
}

/// New rating after one game with outcome `score` (1.0 win, 0.0 loss).
fn adjust(rating: i64, opponent: i64, score: f64, k: f64) -> i64 {
    let expected = expected_score(rating as f64, opponent as f64);
    (rating as f64 + k * (score - expected)).round_ties_even() as i64
}

/// Apply one decided comparison. Returns `(new_winner_rating, new_loser_rating)`.
///
/// `k` is the K-factor: the largest possible change for either side.
pub fn update(winner_rating: i64, loser_rating: i64, k: f64) -> (i64, i64) {
    (
        adjust(winner_rating, loser_rating, 1.0, k),
        adjust(loser_rating, winner_rating, 0.0, k),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_K_FACTOR;

    #[test]
    fn test_expected_score_equal_ratings() {
        assert!((expected_score(1000.0, 1000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let a = expected_score(1200.0, 950.0);
        let b = expected_score(950.0, 1200.0);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a > 0.5);
    }

    #[test]
    fn test_expected_score_ten_to_one_at_scale() {
        let e = expected_score(1400.0, 1000.0);
        assert!((e - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_ratings_move_by_half_k() {
        assert_eq!(update(1000, 1000, DEFAULT_K_FACTOR), (1016, 984));
    }

    #[test]
    fn test_rematch_after_first_result() {
        // expected(984 vs 1016) = 1 / (1 + 10^(32/400)) ≈ 0.4541, delta ≈ 17.47
        let (b, a) = update(984, 1016, DEFAULT_K_FACTOR);
        assert_eq!(b, 1001);
        assert_eq!(a, 999);
    }

    #[test]
    fn test_upset_moves_more_than_expected_win() {
        let (favorite, _) = update(1400, 1000, DEFAULT_K_FACTOR);
        let (underdog, _) = update(1000, 1400, DEFAULT_K_FACTOR);
        assert!(underdog - 1000 > favorite - 1400);
    }

    #[test]
    fn test_ratings_can_go_negative() {
        let (_, loser) = update(10, -5, DEFAULT_K_FACTOR);
        assert!(loser < -5);
    }

    #[test]
    fn test_huge_gap_does_not_overflow() {
        let (w, l) = update(1_000_000, -1_000_000, DEFAULT_K_FACTOR);
        assert_eq!((w, l), (1_000_000, -1_000_000));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // k = 1 and equal ratings give an exact ±0.5 change.
        assert_eq!(update(1000, 1000, 1.0), (1000, 1000));
        assert_eq!(update(1001, 1001, 1.0), (1002, 1000));
    }
}
