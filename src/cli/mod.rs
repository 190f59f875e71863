//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::EntityKind;

/// Store location shared by every command
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// SQLite database file (or set `MLC_STATS_DB` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

/// Where the three source documents live
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Directory holding batsman.json, bowlers.json and matches.json.
    #[clap(long, default_value = "./raw")]
    pub data_dir: PathBuf,

    /// Batting stats document (overrides `<data-dir>/batsman.json`).
    #[clap(long)]
    pub batting: Option<PathBuf>,

    /// Bowling stats document (overrides `<data-dir>/bowlers.json`).
    #[clap(long)]
    pub bowling: Option<PathBuf>,

    /// Match document (overrides `<data-dir>/matches.json`).
    #[clap(long)]
    pub matches: Option<PathBuf>,

    /// Team reference dataset; the built-in 2023 standings when omitted.
    #[clap(long)]
    pub teams: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rebuild the store from the source documents.
    ///
    /// Discards any existing database, maps and loads teams, batting,
    /// bowling and matches, then runs the verification lookups.
    Load {
        #[clap(flatten)]
        sources: SourceArgs,

        #[clap(flatten)]
        store: StoreArgs,

        /// Skip the post-load verification lookups.
        #[clap(long)]
        skip_verify: bool,

        /// Print load reports as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Find the first row whose column equals a value.
    Lookup {
        #[clap(flatten)]
        store: StoreArgs,

        /// batting | bowling | team | match
        #[clap(long, short)]
        entity: EntityKind,

        /// Column to match on, e.g. `name`, `full_name`, `win_team_name`.
        #[clap(long, short)]
        column: String,

        /// Value the column must equal.
        #[clap(long)]
        value: String,

        /// Output the row as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Run a trusted read-only SQL query and show its first row.
    ///
    /// Diagnostic use only: the SQL is passed to the store verbatim.
    Query {
        #[clap(flatten)]
        store: StoreArgs,

        /// Shape to project the row onto: batting | bowling | team | match
        #[clap(long, short)]
        entity: EntityKind,

        /// SQL text
        sql: String,

        /// Output the row as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List tables and columns in the store.
    Schema {
        #[clap(flatten)]
        store: StoreArgs,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mlc-stats", about = "Major League Cricket stats loader")]
pub struct Cli {
    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
