use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How the initial rating vector is built from the base rating.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SeedStrategy {
    /// `base + player_index`, so no two players start exactly level.
    #[default]
    Offset,
    /// Every player starts at `base`.
    Uniform
}

impl SeedStrategy {
    pub fn seed(&self, base: f64, players: usize) -> Vec<f64> {
        match self {
            SeedStrategy::Offset => (0..players).map(|i| base + i as f64).collect(),
            SeedStrategy::Uniform => vec![base; players]
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::seed_strategy::SeedStrategy;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_offset_seed() {
        assert_eq!(SeedStrategy::Offset.seed(1500.0, 3), vec![1500.0, 1501.0, 1502.0]);
    }

    #[test]
    fn test_uniform_seed() {
        assert_eq!(SeedStrategy::Uniform.seed(1200.0, 2), vec![1200.0, 1200.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(SeedStrategy::from_str("offset"), Ok(SeedStrategy::Offset));
        assert_eq!(SeedStrategy::from_str("Uniform"), Ok(SeedStrategy::Uniform));
        assert!(SeedStrategy::from_str("random").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in SeedStrategy::iter() {
            assert_eq!(SeedStrategy::from_str(&strategy.to_string()), Ok(strategy));
        }
    }
}
