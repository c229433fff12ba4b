use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::{load_initial_state, State};

/// Failure while writing or deleting a snapshot. Loading never fails;
/// unreadable input degrades to an empty state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Returns the path to the goals snapshot file (`goals.json`).
///
/// The path is determined in the following order:
/// 1. `SMARTGOALS_DB` environment variable.
/// 2. `~/.local/share/smartgoals/goals.json` (on Linux).
/// 3. `./goals.json` (fallback).
fn goals_path() -> PathBuf {
    std::env::var("SMARTGOALS_DB").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("smartgoals");
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push("goals.json");
        p
    })
}

/// Returns the path to the daily-stats snapshot file (`stats.json`).
///
/// Located in the same directory as the goals snapshot.
fn stats_path() -> PathBuf {
    let mut p = goals_path();
    p.pop();
    p.push("stats.json");
    p
}

/// Loads the persisted state from disk.
///
/// Missing, unreadable, or malformed files yield empty collections; this
/// function is total.
pub fn load_state() -> State {
    let goals = fs::read_to_string(goals_path()).ok();
    let stats = fs::read_to_string(stats_path()).ok();
    load_initial_state(goals.as_deref(), stats.as_deref())
}

/// Writes both snapshot documents, overwriting any existing files.
///
/// Callers persist after each successful mutation; the core never saves
/// on its own.
pub fn save_state(state: &State) -> Result<(), StorageError> {
    fs::write(goals_path(), serde_json::to_string_pretty(&state.goals)?)?;
    fs::write(stats_path(), serde_json::to_string_pretty(&state.daily_stats)?)?;
    Ok(())
}

/// Deletes both snapshot files, resetting the persisted state.
pub fn delete_database() -> Result<(), StorageError> {
    let goals = goals_path();
    if goals.exists() {
        fs::remove_file(goals)?;
    }
    let stats = stats_path();
    if stats.exists() {
        fs::remove_file(stats)?;
    }
    Ok(())
}
