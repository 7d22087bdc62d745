use std::cmp::Ordering;

use crate::error::RatingError;

/// Returns the player indices of one game ordered from best (lowest score) to worst.
///
/// The sort is stable, so among equal scores the lower player index comes first.
/// This is reproducible but not symmetric: tied players are never treated as equals.
pub fn rank_game(scores: &[f64]) -> Result<Vec<usize>, RatingError> {
    validate_scores(scores)?;
    Ok(ordering(scores))
}

/// Returns a vector of rankings as follows:
/// - The minimum score has a rank of 1.
/// - The maximum score has a rank equal to the size of the collection.
///
/// The results are returned in the same order as the input scores.
pub fn rank_positions(scores: &[f64]) -> Result<Vec<usize>, RatingError> {
    validate_scores(scores)?;
    Ok(positions_from_ordering(&ordering(scores)))
}

/// Inverts a best-to-worst ordering into 1-based ranks per player.
pub fn positions_from_ordering(ordering: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; ordering.len()];
    for (rank, &idx) in ordering.iter().enumerate() {
        ranks[idx] = rank + 1;
    }

    ranks
}

/// Ordering for scores already known to be finite.
pub(crate) fn ordering(scores: &[f64]) -> Vec<usize> {
    let mut sorted_indices = (0..scores.len()).collect::<Vec<_>>();

    // Stable sort; finite scores always compare
    sorted_indices.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));

    sorted_indices
}

fn validate_scores(scores: &[f64]) -> Result<(), RatingError> {
    if scores.is_empty() {
        return Err(RatingError::NoPlayers);
    }

    match scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        Some((player, &value)) => Err(RatingError::NonFiniteScore { player, value }),
        None => Ok(())
    }
}
