use tracing::{debug, info};

use crate::{
    error::RatingError,
    model::{
        constants::ZERO_SUM_TOLERANCE,
        elo::rating_changes,
        learning_rate::LearningRate,
        ranking::ordering,
        rating_tracker::RatingTracker,
        structures::{elo_config::EloConfig, rating_history::RatingHistory, score_table::ScoreTable}
    },
    utils::progress_utils::progress_bar
};

/// Sequential rating driver: carries the rating vector and learning rate forward
/// through the games of one score table.
pub struct EloModel {
    pub config: EloConfig,
    initial_ratings: Vec<f64>,
    show_progress: bool
}

impl EloModel {
    /// Creates a model seeded according to `config` for `players` players.
    pub fn new(config: EloConfig, players: usize) -> Result<EloModel, RatingError> {
        let initial_ratings = config.initial_ratings(players);
        EloModel::with_ratings(config, initial_ratings)
    }

    /// Creates a model starting from explicit initial ratings.
    pub fn with_ratings(config: EloConfig, initial_ratings: Vec<f64>) -> Result<EloModel, RatingError> {
        config.validate()?;

        if initial_ratings.is_empty() {
            return Err(RatingError::NoPlayers);
        }

        if let Some((player, &value)) = initial_ratings.iter().enumerate().find(|(_, r)| !r.is_finite()) {
            return Err(RatingError::NonFiniteRating { player, value });
        }

        Ok(EloModel {
            config,
            initial_ratings,
            show_progress: false
        })
    }

    /// Shows a progress bar on stderr while processing.
    pub fn with_progress(mut self, show_progress: bool) -> EloModel {
        self.show_progress = show_progress;
        self
    }

    pub fn num_players(&self) -> usize {
        self.initial_ratings.len()
    }

    pub fn initial_ratings(&self) -> &[f64] {
        &self.initial_ratings
    }

    /// # Rating pass
    ///
    /// Folds every game of `table` into the ratings, in order:
    /// 1. Order the players from best to worst by score.
    /// 2. Compute the change vector from the adjacent pairs of that ordering,
    ///     using the ratings from before the game.
    /// 3. Append `current + change` to the history.
    /// 4. Decay k.
    ///
    /// Each game depends on the ratings and k left by the previous one, so the
    /// loop is strictly sequential.
    pub fn process(&self, table: &ScoreTable) -> Result<RatingHistory, RatingError> {
        if table.num_players() != self.num_players() {
            return Err(RatingError::SeedLength {
                expected: table.num_players(),
                found: self.num_players()
            });
        }

        info!(
            games = table.num_games(),
            players = table.num_players(),
            initial_k = self.config.initial_k,
            "Processing score table"
        );

        let progress_bar = if self.show_progress {
            progress_bar(table.num_games() as u64, "Processing games".to_string())
        } else {
            None
        };

        let mut tracker = RatingTracker::with_capacity(self.initial_ratings.clone(), table.num_games());
        let mut learning_rate = LearningRate::from_config(&self.config);

        for (game, scores) in table.games().enumerate() {
            let k = learning_rate.current();
            let changes = Self::process_game(tracker.current(), scores, k);

            debug!(game, k, ?changes, "Game rated");
            tracker.apply(&changes, k);
            learning_rate.step();

            if let Some(bar) = &progress_bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress_bar {
            bar.finish_and_clear();
        }

        let history = tracker.finish();
        info!(
            final_k = learning_rate.current(),
            final_ratings = ?history.final_ratings(),
            "Rating pass complete"
        );

        Ok(history)
    }

    /// Rates a single game. Returns the change vector for `ratings`.
    fn process_game(ratings: &[f64], scores: &[f64], k: f64) -> Vec<f64> {
        let ordering = ordering(scores);
        let changes = rating_changes(ratings, &ordering, k);

        debug_assert!(changes.iter().sum::<f64>().abs() < ZERO_SUM_TOLERANCE * ratings.len() as f64 * k.max(1.0));

        changes
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        error::RatingError,
        model::{
            constants::ZERO_SUM_TOLERANCE,
            elo_model::EloModel,
            structures::{elo_config::EloConfig, score_table::ScoreTable, seed_strategy::SeedStrategy}
        },
        utils::test_utils::{generate_score_table, generate_skilled_score_table}
    };

    fn uniform() -> EloConfig {
        EloConfig::default().with_seed(SeedStrategy::Uniform)
    }

    #[test]
    fn test_single_game() {
        let table = ScoreTable::new(vec![vec![10.0, 5.0, 20.0]]).unwrap();
        let history = EloModel::new(uniform(), 3).unwrap().process(&table).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.initial_ratings(), &[1500.0, 1500.0, 1500.0]);

        let ratings = history.final_ratings();
        assert_abs_diff_eq!(ratings[0], 1500.0);
        assert_abs_diff_eq!(ratings[1], 1510.0);
        assert_abs_diff_eq!(ratings[2], 1490.0);
        assert_eq!(history.learning_rates(), &[20.0]);
    }

    #[test]
    fn test_second_game_uses_decayed_k_and_updated_ratings() {
        let table = ScoreTable::new(vec![vec![10.0, 5.0, 20.0], vec![1.0, 2.0, 3.0]]).unwrap();
        let history = EloModel::new(uniform(), 3).unwrap().process(&table).unwrap();

        // Second game ordering is [0, 1, 2] against ratings [1500, 1510, 1490]
        let k = 0.99 * 20.0;
        let d01 = k / (1.0 + 10f64.powf((1500.0 - 1510.0) / 400.0));
        let d12 = k / (1.0 + 10f64.powf((1510.0 - 1490.0) / 400.0));

        let ratings = history.final_ratings();
        assert_abs_diff_eq!(ratings[0], 1500.0 + d01, epsilon = 1e-9);
        assert_abs_diff_eq!(ratings[1], 1510.0 - d01 + d12, epsilon = 1e-9);
        assert_abs_diff_eq!(ratings[2], 1490.0 - d12, epsilon = 1e-9);
        assert_abs_diff_eq!(history.learning_rates()[1], k, epsilon = 1e-12);
    }

    #[test]
    fn test_history_length() {
        let table = ScoreTable::new(generate_score_table(57, 4, 7)).unwrap();
        let history = EloModel::new(EloConfig::default(), 4).unwrap().process(&table).unwrap();

        assert_eq!(history.len(), 58);
        assert_eq!(history.num_games(), 57);
    }

    #[test]
    fn test_every_game_is_zero_sum() {
        let table = ScoreTable::new(generate_score_table(200, 6, 11)).unwrap();
        let history = EloModel::new(EloConfig::default(), 6).unwrap().process(&table).unwrap();

        let initial_total: f64 = history.initial_ratings().iter().sum();
        for game in 0..history.num_games() {
            let changes = history.changes(game).unwrap();
            assert!(changes.iter().sum::<f64>().abs() < 1e3 * ZERO_SUM_TOLERANCE);
        }

        let final_total: f64 = history.final_ratings().iter().sum();
        assert_abs_diff_eq!(initial_total, final_total, epsilon = 1e-6);
    }

    #[test]
    fn test_stronger_players_rise() {
        // Lower skill means lower scores, which means better finishes
        let table = ScoreTable::new(generate_skilled_score_table(400, &[0.0, 1.0, 2.0, 3.0], 3)).unwrap();
        let history = EloModel::new(uniform(), 4).unwrap().process(&table).unwrap();
        let ratings = history.final_ratings();

        assert!(ratings[0] > ratings[1]);
        assert!(ratings[1] > ratings[2]);
        assert!(ratings[2] > ratings[3]);
    }

    #[test]
    fn test_single_player_history_is_constant() {
        let table = ScoreTable::new(vec![vec![3.0], vec![-1.0], vec![8.0]]).unwrap();
        let history = EloModel::new(EloConfig::default(), 1).unwrap().process(&table).unwrap();

        assert_eq!(history.len(), 4);
        assert!(history.rows().iter().all(|r| r == &vec![1500.0]));
        for game in 0..3 {
            assert_eq!(history.changes(game), Some(vec![0.0]));
        }
    }

    #[test]
    fn test_custom_initial_ratings() {
        let table = ScoreTable::new(vec![vec![2.0, 1.0]]).unwrap();
        let history = EloModel::with_ratings(EloConfig::default(), vec![1900.0, 1100.0])
            .unwrap()
            .process(&table)
            .unwrap();

        // A 800 point underdog win transfers almost all of k
        let delta = 20.0 / (1.0 + 10f64.powf(-2.0));
        assert_abs_diff_eq!(history.final_ratings()[1], 1100.0 + delta, epsilon = 1e-9);
        assert_abs_diff_eq!(history.final_ratings()[0], 1900.0 - delta, epsilon = 1e-9);
    }

    #[test]
    fn test_seed_length_mismatch() {
        let table = ScoreTable::new(vec![vec![2.0, 1.0, 0.0]]).unwrap();
        let result = EloModel::new(EloConfig::default(), 2).unwrap().process(&table);

        assert_eq!(result, Err(RatingError::SeedLength { expected: 3, found: 2 }));
    }

    #[test]
    fn test_non_finite_seed_rejected() {
        let result = EloModel::with_ratings(EloConfig::default(), vec![1500.0, f64::NAN]);

        assert!(matches!(result, Err(RatingError::NonFiniteRating { player: 1, .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = EloModel::new(EloConfig::default().with_initial_k(-1.0), 2);

        assert!(matches!(result, Err(RatingError::InvalidConfig(_))));
    }

    #[test]
    fn test_deterministic() {
        let table = ScoreTable::new(generate_score_table(120, 5, 99)).unwrap();
        let model = EloModel::new(EloConfig::default(), 5).unwrap();

        assert_eq!(model.process(&table).unwrap(), model.process(&table).unwrap());
    }
}
