use thiserror::Error;

/// Validation failures raised by the rating engine.
///
/// Every failure is a pure function of the input, so nothing is retried and no
/// partial result is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("Score table contains no games")]
    NoGames,

    #[error("Score table contains no players")]
    NoPlayers,

    #[error("Game {row} has {found} scores, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Game {row}, player {player}: score {value} is not finite")]
    NonFiniteEntry { row: usize, player: usize, value: f64 },

    #[error("Player {player}: score {value} is not finite")]
    NonFiniteScore { player: usize, value: f64 },

    #[error("Expected {expected} initial ratings, found {found}")]
    SeedLength { expected: usize, found: usize },

    #[error("Initial rating {value} for player {player} is not finite")]
    NonFiniteRating { player: usize, value: f64 },

    #[error("Invalid rating configuration: {0}")]
    InvalidConfig(String)
}

/// Failures at the edges of the engine: reading score tables and writing reports.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {record}, column {column}: '{value}' is not a number")]
    InvalidNumber { record: usize, column: usize, value: String },

    #[error("Expected {expected} player names, found {found}")]
    NameCount { expected: usize, found: usize },

    #[error(transparent)]
    Rating(#[from] RatingError)
}
