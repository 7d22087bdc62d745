use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::{
    error::DataError,
    model::{
        structures::{elo_config::EloConfig, output_format::OutputFormat, rating_history::RatingHistory},
        summary::standings
    }
};

#[derive(Debug, Serialize)]
struct Standing<'a> {
    rank: usize,
    player: usize,
    name: &'a str,
    rating: f64
}

/// JSON document describing one rating pass
#[derive(Debug, Serialize)]
struct HistoryReport<'a> {
    players: &'a [String],
    config: &'a EloConfig,
    ratings: &'a [Vec<f64>],
    learning_rates: &'a [f64],
    standings: Vec<Standing<'a>>
}

/// Writes the rating history in the requested format.
pub fn write_history<W: Write>(
    writer: W,
    format: OutputFormat,
    history: &RatingHistory,
    names: &[String],
    config: &EloConfig
) -> Result<(), DataError> {
    if names.len() != history.num_players() {
        return Err(DataError::NameCount {
            expected: history.num_players(),
            found: names.len()
        });
    }

    match format {
        OutputFormat::Json => write_json(writer, history, names, config),
        OutputFormat::Csv => write_csv(writer, history, names)
    }?;

    info!("Rating history written as {}", format);
    Ok(())
}

fn write_json<W: Write>(
    mut writer: W,
    history: &RatingHistory,
    names: &[String],
    config: &EloConfig
) -> Result<(), DataError> {
    let standings = standings(history.final_ratings())
        .into_iter()
        .enumerate()
        .map(|(idx, (player, rating))| Standing {
            rank: idx + 1,
            player,
            name: names[player].as_str(),
            rating
        })
        .collect();

    let report = HistoryReport {
        players: names,
        config,
        ratings: history.rows(),
        learning_rates: history.learning_rates(),
        standings
    };

    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

/// One row per history entry: `game,k,<player ratings...>`. Row 0 holds the seed
/// ratings and has no k.
fn write_csv<W: Write>(writer: W, history: &RatingHistory, names: &[String]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["game".to_string(), "k".to_string()];
    header.extend(names.iter().cloned());
    writer.write_record(&header)?;

    for (game, ratings) in history.rows().iter().enumerate() {
        let k = match game {
            0 => String::new(),
            g => history.learning_rates()[g - 1].to_string()
        };

        let mut record = vec![game.to_string(), k];
        record.extend(ratings.iter().map(|r| r.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
