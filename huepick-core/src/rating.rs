/// The rating update rule: a logistic expected-score model with a per-item
/// K factor that shrinks as a color accumulates comparison rounds.
///
/// Pure math on already-validated data — no failure modes. Finite ratings are
/// assumed; the snapshot boundary guards against externally corrupted pools.
use crate::constants::{K_BASE, K_DECAY_PER_COMPARISON, K_FLOOR};
use crate::types::ColorItem;

/// Probability that a rating-`rating_a` color beats a rating-`rating_b` one.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// Maximum rating adjustment for a color with `comparisons` prior rounds.
///
/// Starts at K_BASE, shrinks by K_DECAY_PER_COMPARISON per round, floors at
/// K_FLOOR. Each side of a pair uses the K derived from its *own* history.
pub fn k_factor(comparisons: usize) -> f64 {
    (K_BASE - K_DECAY_PER_COMPARISON * comparisons as f64).max(K_FLOOR)
}

/// Rating deltas for one winner/loser pair, computed from the pair's current
/// (pre-round) ratings and comparison counts.
///
/// The session accumulates these against a frozen copy of the pool when a
/// round decomposes into many pairs, so the order of pairs within a round
/// cannot change where anyone ends up.
pub fn pair_deltas(winner: &ColorItem, loser: &ColorItem, is_draw: bool) -> (f64, f64) {
    debug_assert!(winner.rating.is_finite() && loser.rating.is_finite());

    let expected_winner = expected_score(winner.rating, loser.rating);
    let expected_loser = expected_score(loser.rating, winner.rating);
    let (score_winner, score_loser) = if is_draw { (0.5, 0.5) } else { (1.0, 0.0) };

    let delta_winner = k_factor(winner.comparisons) * (score_winner - expected_winner);
    let delta_loser = k_factor(loser.comparisons) * (score_loser - expected_loser);
    (delta_winner, delta_loser)
}

/// Apply a single-pair comparison round in place.
///
/// The winner moves toward 1 and the loser toward 0 (both toward 0.5 on a
/// draw), each by its own K. Both sides' `comparisons` advance; `wins` and
/// `losses` advance only when the round was decided.
pub fn update(winner: &mut ColorItem, loser: &mut ColorItem, is_draw: bool) {
    let (delta_winner, delta_loser) = pair_deltas(winner, loser, is_draw);
    winner.rating += delta_winner;
    loser.rating += delta_loser;

    winner.comparisons += 1;
    loser.comparisons += 1;
    if !is_draw {
        winner.wins += 1;
        loser.losses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_RATING;

    fn item(rating: f64, comparisons: usize) -> ColorItem {
        let mut item = ColorItem::new(0, 180.0, 80.0, 50.0);
        item.rating = rating;
        item.comparisons = comparisons;
        item
    }

    #[test]
    fn test_expected_score_anchors() {
        assert!((expected_score(1500.0, 1500.0) - 0.5).abs() < 1e-12);
        // A 400-point lead wins 10 times out of 11.
        assert!((expected_score(1900.0, 1500.0) - 10.0 / 11.0).abs() < 1e-12);
        assert!((expected_score(1500.0, 1900.0) - 1.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_k_factor_shrinks_to_floor() {
        assert_eq!(k_factor(0), 64.0);
        assert_eq!(k_factor(1), 62.0);
        assert_eq!(k_factor(15), 34.0);
        assert_eq!(k_factor(16), 32.0);
        assert_eq!(k_factor(100), 32.0);
    }

    #[test]
    fn test_equal_priors_move_by_equal_magnitude() {
        let mut winner = item(INITIAL_RATING, 0);
        let mut loser = item(INITIAL_RATING, 0);
        update(&mut winner, &mut loser, false);

        let gain = winner.rating - INITIAL_RATING;
        let loss = INITIAL_RATING - loser.rating;
        assert!(gain > 0.0);
        assert!(loss > 0.0);
        assert!((gain - loss).abs() < 1e-12);
        // K = 64 and expectation 0.5 give exactly half-K steps.
        assert!((gain - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_draw_between_equals_changes_nothing_but_counts() {
        let mut a = item(INITIAL_RATING, 2);
        let mut b = item(INITIAL_RATING, 2);
        update(&mut a, &mut b, true);

        assert_eq!(a.rating, INITIAL_RATING);
        assert_eq!(b.rating, INITIAL_RATING);
        assert_eq!(a.comparisons, 3);
        assert_eq!(b.comparisons, 3);
        assert_eq!(a.wins + a.losses, 0);
        assert_eq!(b.wins + b.losses, 0);
    }

    #[test]
    fn test_draw_pulls_unequal_ratings_together() {
        let mut high = item(1600.0, 0);
        let mut low = item(1400.0, 0);
        update(&mut high, &mut low, true);

        assert!(high.rating < 1600.0);
        assert!(low.rating > 1400.0);
        // A draw never lets them cross.
        assert!(high.rating > low.rating);
    }

    #[test]
    fn test_each_side_uses_its_own_k() {
        // A veteran winner at the K floor gains half of what a fresh loser
        // at full K gives up.
        let mut winner = item(INITIAL_RATING, 16);
        let mut loser = item(INITIAL_RATING, 0);
        update(&mut winner, &mut loser, false);

        assert!((winner.rating - (INITIAL_RATING + 16.0)).abs() < 1e-12);
        assert!((loser.rating - (INITIAL_RATING - 32.0)).abs() < 1e-12);
    }

    #[test]
    fn test_win_loss_counters_only_move_on_decided_pairs() {
        let mut winner = item(INITIAL_RATING, 0);
        let mut loser = item(INITIAL_RATING, 0);
        update(&mut winner, &mut loser, false);
        assert_eq!((winner.wins, winner.losses), (1, 0));
        assert_eq!((loser.wins, loser.losses), (0, 1));

        update(&mut winner, &mut loser, true);
        assert_eq!((winner.wins, winner.losses), (1, 0));
        assert_eq!((loser.wins, loser.losses), (0, 1));
        assert_eq!(winner.comparisons, 2);
        assert_eq!(loser.comparisons, 2);
    }

    #[test]
    fn test_ratings_stay_finite_over_long_streaks() {
        let mut winner = item(INITIAL_RATING, 0);
        let mut loser = item(INITIAL_RATING, 0);
        for _ in 0..500 {
            update(&mut winner, &mut loser, false);
        }
        assert!(winner.rating.is_finite());
        assert!(loser.rating.is_finite());
        assert!(winner.rating > loser.rating);
        assert!(winner.wins + winner.losses <= winner.comparisons);
        assert!(loser.wins + loser.losses <= loser.comparisons);
    }
}
