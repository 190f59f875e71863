//! Major League Cricket stats loader
//!
//! Normalises loosely-typed stats exports (batting, bowling, matches) into a
//! typed SQLite schema and reads them back.
//!
//! ## Pipeline
//!
//! - **Ingest**: source JSON is deserialized into raw records, numeric
//!   fields are coerced (the `"NA"` sentinel becomes an absent value) and
//!   names are title-cased
//! - **Schema**: one table per entity, ensured before loading
//! - **Load**: rows are inserted one at a time; failures are reported, not fatal
//! - **Query**: parameterized lookups and trusted ad-hoc projections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlc_stats::{
//!     commands::load::{load_all, read_document, PreparedData},
//!     reference::TeamReference,
//!     storage::{StatsDatabase, Team},
//! };
//! use std::path::Path;
//!
//! # fn example() -> mlc_stats::Result<()> {
//! let data = PreparedData::prepare(
//!     &TeamReference::builtin()?,
//!     &read_document(Path::new("raw/batsman.json"))?,
//!     &read_document(Path::new("raw/bowlers.json"))?,
//!     &read_document(Path::new("raw/matches.json"))?,
//! )?;
//!
//! let mut db = StatsDatabase::create_fresh(Path::new("prepared/player_stats.db"))?;
//! let reports = load_all(&mut db, &data)?;
//! assert!(reports.iter().all(|r| r.is_clean()));
//!
//! let team: Option<Team> = db.lookup("full_name", &"Mumbai Indians New York")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing `--db` to every command:
//! ```bash
//! export MLC_STATS_DB=./prepared/player_stats.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod reference;
pub mod storage;

// Re-export commonly used types
pub use cli::types::EntityKind;
pub use error::{Result, StatsError};
pub use reference::TeamReference;
pub use storage::{BattingRecord, BowlingRecord, LoadReport, Match, StatsDatabase, Team};

pub const DB_PATH_ENV_VAR: &str = "MLC_STATS_DB";
