use crate::error::RatingError;

/// A validated table of per-game scores: one row per game, one column per player.
///
/// Scores are costs, so the lowest score in a row wins that game. Every row has the
/// same number of finite entries and the table holds at least one game and one player.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    rows: Vec<Vec<f64>>,
    num_players: usize
}

impl ScoreTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<ScoreTable, RatingError> {
        let num_players = match rows.first() {
            Some(first) => first.len(),
            None => return Err(RatingError::NoGames)
        };

        if num_players == 0 {
            return Err(RatingError::NoPlayers);
        }

        for (row, scores) in rows.iter().enumerate() {
            if scores.len() != num_players {
                return Err(RatingError::RaggedRow {
                    row,
                    expected: num_players,
                    found: scores.len()
                });
            }

            if let Some((player, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
                return Err(RatingError::NonFiniteEntry { row, player, value });
            }
        }

        Ok(ScoreTable { rows, num_players })
    }

    pub fn num_games(&self) -> usize {
        self.rows.len()
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn game(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Games in chronological order.
    pub fn games(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for ScoreTable {
    type Error = RatingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        ScoreTable::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RatingError, model::structures::score_table::ScoreTable};

    #[test]
    fn test_valid_table() {
        let table = ScoreTable::new(vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]]).unwrap();

        assert_eq!(table.num_games(), 2);
        assert_eq!(table.num_players(), 3);
        assert_eq!(table.game(1), Some([3.0, 2.0, 1.0].as_slice()));
        assert_eq!(table.game(2), None);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(ScoreTable::new(vec![]), Err(RatingError::NoGames));
    }

    #[test]
    fn test_zero_players_rejected() {
        assert_eq!(ScoreTable::new(vec![vec![], vec![]]), Err(RatingError::NoPlayers));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = ScoreTable::new(vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0]]);

        assert_eq!(
            result,
            Err(RatingError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = ScoreTable::new(vec![vec![1.0, 2.0], vec![f64::INFINITY, 2.0]]);

        assert_eq!(
            result,
            Err(RatingError::NonFiniteEntry {
                row: 1,
                player: 0,
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_nan_rejected() {
        let result = ScoreTable::new(vec![vec![1.0, f64::NAN]]);

        assert!(matches!(result, Err(RatingError::NonFiniteEntry { row: 0, player: 1, .. })));
    }

    #[test]
    fn test_single_player_is_valid() {
        let table = ScoreTable::try_from(vec![vec![4.0], vec![2.0]]).unwrap();

        assert_eq!(table.num_players(), 1);
        assert_eq!(table.games().len(), 2);
    }
}
