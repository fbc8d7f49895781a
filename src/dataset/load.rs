use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    dataset::player::Player,
    dataset::validate::{SchemaError, SchemaErrors, validate_players},
    foundation::error::{ScoreReelError, ScoreReelResult},
};

/// Dataset loading options.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DatasetOpts {
    /// Reverse the file order so the list counts up towards the top scorer.
    pub reverse: bool,
}

impl Default for DatasetOpts {
    fn default() -> Self {
        Self { reverse: true }
    }
}

/// Parse and validate a JSON array of players, keeping file order.
pub fn parse_players<R: std::io::Read>(r: R) -> Result<Vec<Player>, SchemaErrors> {
    let players: Vec<Player> = serde_json::from_reader(r).map_err(|e| SchemaErrors {
        errors: vec![SchemaError::at(&[], format!("parse players JSON: {e}"))],
    })?;
    validate_players(&players)?;
    Ok(players)
}

/// Strict loader: schema violations become [`ScoreReelError::Dataset`].
pub fn load_players<R: std::io::Read>(r: R, opts: DatasetOpts) -> ScoreReelResult<Vec<Player>> {
    let mut players = parse_players(r).map_err(|e| ScoreReelError::dataset(e.to_string()))?;
    if opts.reverse {
        players.reverse();
    }
    Ok(players)
}

/// Lenient loader used by the render path: any failure yields an empty list.
///
/// A broken dataset must not stop the render; the composition still plays its intro and scroll
/// with zero cards.
pub fn load_players_or_empty<R: std::io::Read>(r: R, opts: DatasetOpts) -> Vec<Player> {
    match load_players(r, opts) {
        Ok(players) => {
            tracing::debug!(count = players.len(), "loaded player dataset");
            players
        }
        Err(e) => {
            tracing::warn!(error = %e, "player dataset rejected; rendering without cards");
            Vec::new()
        }
    }
}

/// [`load_players_or_empty`] for a file on disk; an unreadable file also yields an empty list.
pub fn load_players_from_path_or_empty(path: impl AsRef<Path>, opts: DatasetOpts) -> Vec<Player> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(f) => load_players_or_empty(BufReader::new(f), opts),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open player dataset");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/load.rs"]
mod tests;
