use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{
    ranking::{ordering, positions_from_ordering},
    structures::score_table::ScoreTable
};

/// Per-player distribution of finishing positions over a score table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankSummary {
    pub num_games: usize,
    pub num_players: usize,
    /// `counts[player][rank - 1]`: games in which `player` finished at `rank`
    pub counts: Vec<Vec<usize>>,
    pub mean_ranks: Vec<f64>
}

impl RankSummary {
    pub fn from_table(table: &ScoreTable) -> RankSummary {
        let players = table.num_players();
        let mut counts = vec![vec![0; players]; players];
        let mut rank_totals = vec![0usize; players];

        for scores in table.games() {
            let ranks = positions_from_ordering(&ordering(scores));
            for (player, &rank) in ranks.iter().enumerate() {
                counts[player][rank - 1] += 1;
                rank_totals[player] += rank;
            }
        }

        let mean_ranks = rank_totals
            .iter()
            .map(|&total| total as f64 / table.num_games() as f64)
            .collect();

        RankSummary {
            num_games: table.num_games(),
            num_players: players,
            counts,
            mean_ranks
        }
    }

    /// Games each player would finish at each rank if everyone were equally strong.
    pub fn expected_count(&self) -> usize {
        self.num_games / self.num_players
    }

    /// How often `player` finished at `rank` beyond the even-strength expectation.
    pub fn excess(&self, player: usize, rank: usize) -> Option<i64> {
        let count = *self.counts.get(player)?.get(rank.checked_sub(1)?)?;
        Some(count as i64 - self.expected_count() as i64)
    }

    pub fn wins(&self, player: usize) -> usize {
        self.counts.get(player).map_or(0, |c| c[0])
    }
}

/// Final ratings keyed by player index, best first.
/// Players with equal ratings keep their index order.
pub fn standings(final_ratings: &[f64]) -> IndexMap<usize, f64> {
    let mut leaderboard: IndexMap<usize, f64> = final_ratings.iter().copied().enumerate().collect();
    leaderboard.sort_by(|k1, v1, k2, v2| v2.partial_cmp(v1).unwrap_or(Ordering::Equal).then(k1.cmp(k2)));

    leaderboard
}
