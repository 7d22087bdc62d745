pub mod elo_config;
pub mod output_format;
pub mod rating_history;
pub mod score_table;
pub mod seed_strategy;
