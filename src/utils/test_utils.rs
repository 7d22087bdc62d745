use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `games` rows of `players` random scores in `[0, 100)`.
///
/// Seeded RNG for reproducible results.
pub fn generate_score_table(games: usize, players: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..games)
        .map(|_| (0..players).map(|_| rng.random_range(0.0..100.0)).collect())
        .collect()
}

/// Generates scores where each player's score is their `skills` entry plus noise
/// in `[0, 1.5)`. A lower skill value therefore tends to finish better.
pub fn generate_skilled_score_table(games: usize, skills: &[f64], seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..games)
        .map(|_| skills.iter().map(|s| s + rng.random_range(0.0..1.5)).collect())
        .collect()
}

/// Renders a score table as headerless CSV.
pub fn score_table_csv(rows: &[Vec<f64>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(","))
        .map(|line| line + "\n")
        .collect()
}
