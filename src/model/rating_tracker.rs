use crate::model::structures::rating_history::RatingHistory;

/// Append-only record of rating vectors owned by the sequential driver.
///
/// The most recent vector is the current rating state. Vectors are never modified
/// once pushed; `finish` hands the record over as a read-only [`RatingHistory`].
pub struct RatingTracker {
    ratings: Vec<Vec<f64>>,
    learning_rates: Vec<f64>
}

impl RatingTracker {
    pub fn new(initial_ratings: Vec<f64>) -> RatingTracker {
        RatingTracker {
            ratings: vec![initial_ratings],
            learning_rates: Vec::new()
        }
    }

    pub fn with_capacity(initial_ratings: Vec<f64>, games: usize) -> RatingTracker {
        let mut ratings = Vec::with_capacity(games + 1);
        ratings.push(initial_ratings);

        RatingTracker {
            ratings,
            learning_rates: Vec::with_capacity(games)
        }
    }

    /// Returns the current rating vector.
    pub fn current(&self) -> &[f64] {
        // Never empty: the seed vector is pushed on construction
        &self.ratings[self.ratings.len() - 1]
    }

    /// Records the outcome of one game: the current ratings plus `changes`, rated with `k`.
    pub fn apply(&mut self, changes: &[f64], k: f64) {
        let next = self.current().iter().zip(changes).map(|(r, c)| r + c).collect();

        self.ratings.push(next);
        self.learning_rates.push(k);
    }

    pub fn games_recorded(&self) -> usize {
        self.learning_rates.len()
    }

    pub fn finish(self) -> RatingHistory {
        RatingHistory::new(self.ratings, self.learning_rates)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::rating_tracker::RatingTracker;

    #[test]
    fn test_apply_appends() {
        let mut tracker = RatingTracker::new(vec![1500.0, 1500.0, 1500.0]);
        tracker.apply(&[0.0, 10.0, -10.0], 20.0);

        assert_eq!(tracker.current(), &[1500.0, 1510.0, 1490.0]);
        assert_eq!(tracker.games_recorded(), 1);

        tracker.apply(&[-4.0, 0.0, 4.0], 19.8);
        let history = tracker.finish();

        assert_eq!(
            history.rows(),
            &[
                vec![1500.0, 1500.0, 1500.0],
                vec![1500.0, 1510.0, 1490.0],
                vec![1496.0, 1510.0, 1494.0]
            ]
        );
        assert_eq!(history.learning_rates(), &[20.0, 19.8]);
    }

    #[test]
    fn test_empty_tracker_finishes_with_seed() {
        let history = RatingTracker::with_capacity(vec![1500.0, 1501.0], 10).finish();

        assert_eq!(history.len(), 1);
        assert_eq!(history.num_games(), 0);
        assert_eq!(history.final_ratings(), &[1500.0, 1501.0]);
    }
}
