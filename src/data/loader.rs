use std::{fs::File, io::Read, path::Path};

use tracing::info;

use crate::error::DataError;

/// Raw contents of a score CSV: one row per game, one column per player.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScores {
    /// Player names taken from the header row, when the file has one
    pub names: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>
}

/// Reads scores from `path`, or from stdin when no path is given.
pub fn load_scores(path: Option<&Path>, has_header: bool) -> Result<LoadedScores, DataError> {
    match path {
        Some(path) => {
            info!("Reading scores from {}", path.display());
            read_scores(File::open(path)?, has_header)
        }
        None => {
            info!("Reading scores from stdin");
            read_scores(std::io::stdin().lock(), has_header)
        }
    }
}

/// Parses CSV scores. Rows of differing length are passed through untouched so the
/// score table can report exactly which game is malformed.
pub fn read_scores<R: Read>(reader: R, has_header: bool) -> Result<LoadedScores, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let names = if has_header {
        Some(reader.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut rows = Vec::new();
    for (record_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                    record: record_idx,
                    column,
                    value: field.to_string()
                })
            })
            .collect::<Result<Vec<f64>, DataError>>()?;

        rows.push(row);
    }

    info!("Read {} games", rows.len());

    Ok(LoadedScores { names, rows })
}
