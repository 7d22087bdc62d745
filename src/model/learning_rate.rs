use crate::model::structures::elo_config::EloConfig;

/// # Learning-rate schedule
///
/// k starts at the configured initial value and is multiplied by the decay
/// factor after every game, never dropping below the floor:
///
/// `k <- max(decay * k, floor)`
///
/// Each pass owns its own schedule. Provided the initial k is at least the floor
/// the sequence is non-increasing and settles on the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningRate {
    k: f64,
    decay: f64,
    floor: f64
}

impl LearningRate {
    pub fn new(initial: f64, decay: f64, floor: f64) -> LearningRate {
        LearningRate {
            k: initial,
            decay,
            floor
        }
    }

    pub fn from_config(config: &EloConfig) -> LearningRate {
        LearningRate::new(config.initial_k, config.k_decay, config.k_floor)
    }

    /// The k applied to the next game.
    pub fn current(&self) -> f64 {
        self.k
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Decays k after a game and returns the new value.
    pub fn step(&mut self) -> f64 {
        self.k = (self.decay * self.k).max(self.floor);
        self.k
    }

    /// The k that will be applied to game `game` (0-based).
    pub fn at_game(&self, game: usize) -> f64 {
        let mut schedule = *self;
        for _ in 0..game {
            schedule.step();
        }

        schedule.k
    }
}

impl Iterator for LearningRate {
    type Item = f64;

    /// Yields the k for each successive game, without end.
    fn next(&mut self) -> Option<f64> {
        let k = self.k;
        self.step();
        Some(k)
    }
}

impl Default for LearningRate {
    fn default() -> Self {
        LearningRate::from_config(&EloConfig::default())
    }
}
