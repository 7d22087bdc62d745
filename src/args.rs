use std::path::PathBuf;

use clap::Parser;

use crate::model::{
    constants::{BASE_RATING, DEFAULT_K, K_DECAY, K_FLOOR},
    structures::{elo_config::EloConfig, output_format::OutputFormat, seed_strategy::SeedStrategy}
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Placement Elo",
    long_about = "Ranks players game by game from a table of scores (lower is better) \
    and tracks an Elo rating for each player across the games"
)]
pub struct Args {
    /// CSV file with one row per game and one column per player.
    /// Scores are read from stdin when no file is given.
    #[arg(short, long, env = "SCORES_PATH")]
    pub input: Option<PathBuf>,

    /// Treats the first CSV row as player names
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub header: bool,

    /// Comma separated player names, in column order
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,

    #[arg(short = 'k', long, env = "ELO_INITIAL_K", default_value_t = DEFAULT_K, help = "Learning rate for the first game")]
    pub initial_k: f64,

    #[arg(long, env = "ELO_K_DECAY", default_value_t = K_DECAY, help = "Multiplier applied to k after every game")]
    pub k_decay: f64,

    #[arg(long, env = "ELO_K_FLOOR", default_value_t = K_FLOOR, help = "Lowest value k decays to")]
    pub k_floor: f64,

    #[arg(long, env = "ELO_BASE_RATING", default_value_t = BASE_RATING, help = "Rating players are seeded at")]
    pub base_rating: f64,

    /// `offset` seeds player i at base + i, `uniform` seeds everyone at base
    #[arg(long, default_value_t = SeedStrategy::Offset)]
    pub seed: SeedStrategy,

    /// Writes the full rating history to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value_t = OutputFormat::Json, help = "Format of the rating history file (json, csv)")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn elo_config(&self) -> EloConfig {
        EloConfig {
            initial_k: self.initial_k,
            k_decay: self.k_decay,
            k_floor: self.k_floor,
            base_rating: self.base_rating,
            seed: self.seed
        }
    }
}
