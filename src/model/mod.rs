use rayon::prelude::*;
use tracing::info;

use crate::{
    error::RatingError,
    model::{
        elo_model::EloModel,
        structures::{elo_config::EloConfig, rating_history::RatingHistory, score_table::ScoreTable}
    }
};

pub use ranking::{rank_game, rank_positions};

// The flow of the rating engine:
// score row -> ranking -> pairwise Elo changes -> sequential driver
pub mod constants;
pub mod elo;
pub mod elo_model;
pub mod learning_rate;
pub mod ranking;
pub mod rating_tracker;
pub mod structures;
pub mod summary;

/// Seed ratings for `players` players: `1500 + player_index`.
pub fn default_seed(players: usize) -> Vec<f64> {
    EloConfig::default().initial_ratings(players)
}

/// Runs one full rating pass over `scores` (one row per game, one column per player).
///
/// When `initial_ratings` is `None` the players are seeded according to `config`.
/// The returned history holds `games + 1` rating vectors, the first being the seed.
pub fn run_ratings(
    scores: &[Vec<f64>],
    config: &EloConfig,
    initial_ratings: Option<&[f64]>
) -> Result<RatingHistory, RatingError> {
    let table = ScoreTable::new(scores.to_vec())?;
    let model = match initial_ratings {
        Some(ratings) => EloModel::with_ratings(*config, ratings.to_vec())?,
        None => EloModel::new(*config, table.num_players())?
    };

    model.process(&table)
}

/// Runs an independent rating pass for each table on the rayon thread pool.
///
/// Passes share nothing, so only whole passes run concurrently; the games inside
/// each pass are still folded in order. Results are returned in input order.
pub fn run_tournaments(tables: &[Vec<Vec<f64>>], config: &EloConfig) -> Vec<Result<RatingHistory, RatingError>> {
    info!(tournaments = tables.len(), "Processing tournaments");

    tables
        .par_iter()
        .map(|scores| run_ratings(scores, config, None))
        .collect()
}
