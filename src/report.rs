//! Plain-text rendering of a finished rating pass

use std::fmt::Write;

use crate::model::{
    structures::rating_history::RatingHistory,
    summary::{standings, RankSummary}
};

/// Rank histogram per player, shown as the excess over an even split.
pub fn rank_table(summary: &RankSummary, names: &[String]) -> String {
    let mut out = String::new();
    let width = names.iter().map(String::len).max().unwrap_or(0).max(6);

    let _ = writeln!(
        out,
        "Per game ranking over {} games (1 = winner, expected {} per rank)",
        summary.num_games,
        summary.expected_count()
    );
    let _ = write!(out, "{:<width$} {:>9}", "Player", "Mean rank");
    for rank in 1..=summary.num_players {
        let _ = write!(out, " {:>6}", format!("#{}", rank));
    }
    let _ = writeln!(out);

    for (player, name) in names.iter().enumerate() {
        let _ = write!(out, "{:<width$} {:>9.2}", name, summary.mean_ranks[player]);
        for rank in 1..=summary.num_players {
            let excess = summary.excess(player, rank).unwrap_or(0);
            let _ = write!(out, " {:>+6}", excess);
        }
        let _ = writeln!(out);
    }

    out
}

/// Final ratings, best first, one `name: rating` line per player.
pub fn final_ratings(history: &RatingHistory, names: &[String]) -> String {
    let mut out = String::from("Final Elo ratings:\n");
    for (player, rating) in standings(history.final_ratings()) {
        let _ = writeln!(out, "{}: {:.2}", names[player], rating);
    }

    out
}
