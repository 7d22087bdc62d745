//! Rating engine for repeated multi-player games.
//!
//! Each game is a row of scores, one per player, where the lowest score wins.
//! Every row is turned into a best-to-worst ordering, and rank-adjacent players
//! exchange Elo points game by game under a decaying learning rate, giving a
//! rating trajectory per player.
//!
//! ```
//! use placement_elo::model::{rank_game, run_ratings, structures::elo_config::EloConfig};
//!
//! assert_eq!(rank_game(&[10.0, 5.0, 20.0]).unwrap(), vec![1, 0, 2]);
//!
//! let history = run_ratings(&[vec![10.0, 5.0, 20.0]], &EloConfig::default(), Some(&[1500.0; 3][..])).unwrap();
//! assert_eq!(history.len(), 2);
//! assert!(history.final_ratings()[1] > history.final_ratings()[0]);
//! ```

pub mod args;
pub mod data;
pub mod error;
pub mod model;
pub mod report;
pub mod utils;
