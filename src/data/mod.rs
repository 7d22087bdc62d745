use crate::error::DataError;

pub mod export;
pub mod loader;

/// Resolves display names for `players` players.
///
/// Explicit names win over names read from a header row; without either, players
/// are named by column index.
pub fn player_names(
    explicit: &[String],
    from_header: Option<Vec<String>>,
    players: usize
) -> Result<Vec<String>, DataError> {
    let names = if !explicit.is_empty() {
        explicit.to_vec()
    } else if let Some(names) = from_header {
        names
    } else {
        return Ok((0..players).map(|i| format!("player_{}", i)).collect());
    };

    if names.len() != players {
        return Err(DataError::NameCount {
            expected: players,
            found: names.len()
        });
    }

    Ok(names)
}
