use itertools::Itertools;
use tracing::trace;

use crate::model::constants::ELO_SCALE;

/// Rating points transferred from `rating_loser` to `rating_winner` when the winner
/// finishes directly ahead of the loser.
///
/// The transfer shrinks towards 0 the more the winner was already favoured and
/// grows towards `k` when the loser was the favourite. Swapping the two ratings
/// yields `k - delta`.
pub fn pairwise_delta(rating_loser: f64, rating_winner: f64, k: f64) -> f64 {
    let gap = rating_winner - rating_loser;
    k / (1.0 + 10f64.powf(gap / ELO_SCALE))
}

/// Computes the rating change of every player for one game.
///
/// `ordering` lists player indices from best to worst. Only players at adjacent
/// positions exchange rating: each player in the middle of the ordering loses
/// against the player directly above and gains against the player directly
/// below. All deltas use the pre-game ratings, so the result is independent of
/// the order in which pairs are visited and sums to zero.
pub fn rating_changes(ratings: &[f64], ordering: &[usize], k: f64) -> Vec<f64> {
    debug_assert_eq!(ratings.len(), ordering.len());

    let mut changes = vec![0.0; ratings.len()];
    for (&winner, &loser) in ordering.iter().tuple_windows() {
        let delta = pairwise_delta(ratings[loser], ratings[winner], k);
        trace!(winner, loser, delta, "Pairwise transfer");

        changes[winner] += delta;
        changes[loser] -= delta;
    }

    changes
}

/// Expected probability that a player rated `rating` finishes ahead of one rated `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / ELO_SCALE))
}
