// Model constants
pub const BASE_RATING: f64 = 1500.0;
pub const DEFAULT_K: f64 = 20.0;
pub const K_DECAY: f64 = 0.99;
pub const K_FLOOR: f64 = 1.0;
/// Rating gap at which the favourite is expected to score ten times as often.
pub const ELO_SCALE: f64 = 400.0;
/// Tolerance used when checking that a game's rating changes cancel out.
pub const ZERO_SUM_TOLERANCE: f64 = 1e-9;
