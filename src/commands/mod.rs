//! Command implementations for the MLC stats CLI

pub mod load;
pub mod lookup;
pub mod query;
pub mod schema;
pub mod verify;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::fmt::Debug;
use std::path::PathBuf;

use crate::{error::StatsError, Result, DB_PATH_ENV_VAR};

/// File name of the store under the default data directory.
pub const DEFAULT_DB_FILE: &str = "player_stats.db";

/// Resolve the database path: explicit flag, then `MLC_STATS_DB`, then the
/// platform data directory.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::data_dir()
        .map(|dir| dir.join("mlc-stats").join(DEFAULT_DB_FILE))
        .ok_or(StatsError::NoDataDir)
}

/// A row as text: pretty JSON or `Debug`.
pub fn render_row<T: Serialize + Debug>(row: &T, as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(row)?)
    } else {
        Ok(format!("{:?}", row))
    }
}
