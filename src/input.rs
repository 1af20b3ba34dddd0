use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::{GameInput, PickItem};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A games file holds one game object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum GamesFile {
    Many(Vec<GameInput>),
    One(Box<GameInput>),
}

pub fn load_games(path: &Path) -> Result<Vec<GameInput>, InputError> {
    let games = match read_json::<GamesFile>(path)? {
        GamesFile::Many(games) => games,
        GamesFile::One(game) => vec![*game],
    };
    debug!("Loaded {} game(s) from {}", games.len(), path.display());
    Ok(games)
}

pub fn load_picks(path: &Path) -> Result<Vec<PickItem>, InputError> {
    let picks: Vec<PickItem> = read_json(path)?;
    debug!("Loaded {} pick(s) from {}", picks.len(), path.display());
    Ok(picks)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
