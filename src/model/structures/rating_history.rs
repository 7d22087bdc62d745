use serde::{Deserialize, Serialize};

/// Rating trajectory produced by one sequential pass.
///
/// `ratings[0]` holds the seed ratings and `ratings[g + 1]` the ratings after game `g`,
/// so a pass over `G` games yields `G + 1` vectors. `learning_rates[g]` is the k that
/// was applied to game `g`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistory {
    ratings: Vec<Vec<f64>>,
    learning_rates: Vec<f64>
}

impl RatingHistory {
    pub(crate) fn new(ratings: Vec<Vec<f64>>, learning_rates: Vec<f64>) -> RatingHistory {
        debug_assert_eq!(ratings.len(), learning_rates.len() + 1);
        RatingHistory {
            ratings,
            learning_rates
        }
    }

    /// Number of rating vectors, one more than the number of games.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn num_games(&self) -> usize {
        self.learning_rates.len()
    }

    pub fn num_players(&self) -> usize {
        self.ratings.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.ratings
    }

    pub fn learning_rates(&self) -> &[f64] {
        &self.learning_rates
    }

    pub fn initial_ratings(&self) -> &[f64] {
        &self.ratings[0]
    }

    /// The skill estimate after the last game.
    pub fn final_ratings(&self) -> &[f64] {
        &self.ratings[self.ratings.len() - 1]
    }

    /// Ratings after game `game` (0-based).
    pub fn after_game(&self, game: usize) -> Option<&[f64]> {
        self.ratings.get(game + 1).map(Vec::as_slice)
    }

    /// The change vector applied by game `game` (0-based).
    pub fn changes(&self, game: usize) -> Option<Vec<f64>> {
        let before = self.ratings.get(game)?;
        let after = self.ratings.get(game + 1)?;

        Some(after.iter().zip(before).map(|(a, b)| a - b).collect())
    }

    /// Rating of a single player across the whole pass.
    pub fn trajectory(&self, player: usize) -> Option<Vec<f64>> {
        if player >= self.num_players() {
            return None;
        }

        Some(self.ratings.iter().map(|r| r[player]).collect())
    }
}
