use serde::{Deserialize, Serialize};

use crate::{
    error::RatingError,
    model::{
        constants::{BASE_RATING, DEFAULT_K, K_DECAY, K_FLOOR},
        structures::seed_strategy::SeedStrategy
    }
};

/// Configuration for one rating pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Learning rate applied to the first game
    pub initial_k: f64,
    /// Multiplier applied to k after every game
    pub k_decay: f64,
    /// k never decays below this value
    pub k_floor: f64,
    /// Rating every player is seeded around
    pub base_rating: f64,
    pub seed: SeedStrategy
}

impl EloConfig {
    pub fn validate(&self) -> Result<(), RatingError> {
        if !self.initial_k.is_finite() || self.initial_k <= 0.0 {
            return Err(RatingError::InvalidConfig(format!(
                "initial k must be a positive finite number, got {}",
                self.initial_k
            )));
        }

        if !(self.k_decay > 0.0 && self.k_decay <= 1.0) {
            return Err(RatingError::InvalidConfig(format!(
                "k decay must lie in (0, 1], got {}",
                self.k_decay
            )));
        }

        if !self.k_floor.is_finite() || self.k_floor < 0.0 {
            return Err(RatingError::InvalidConfig(format!(
                "k floor must be a non-negative finite number, got {}",
                self.k_floor
            )));
        }

        // Otherwise the first decay step would raise k to the floor.
        if self.initial_k < self.k_floor {
            return Err(RatingError::InvalidConfig(format!(
                "initial k {} is below the k floor {}",
                self.initial_k, self.k_floor
            )));
        }

        if !self.base_rating.is_finite() {
            return Err(RatingError::InvalidConfig(format!(
                "base rating must be finite, got {}",
                self.base_rating
            )));
        }

        Ok(())
    }

    pub fn with_initial_k(self, initial_k: f64) -> Self {
        EloConfig { initial_k, ..self }
    }

    pub fn with_seed(self, seed: SeedStrategy) -> Self {
        EloConfig { seed, ..self }
    }

    /// Initial rating vector for `players` players.
    pub fn initial_ratings(&self, players: usize) -> Vec<f64> {
        self.seed.seed(self.base_rating, players)
    }
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            initial_k: DEFAULT_K,
            k_decay: K_DECAY,
            k_floor: K_FLOOR,
            base_rating: BASE_RATING,
            seed: SeedStrategy::Offset
        }
    }
}
