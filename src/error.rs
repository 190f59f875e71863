//! Error types for the MLC stats pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

/// Fatal errors. Anything surfacing through this type stops the run.
///
/// Row-level insertion failures are deliberately absent: the loader absorbs
/// them into a [`crate::storage::LoadReport`] instead.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input in {record}: field `{field}` has unparseable value {token:?}")]
    MalformedInput {
        record: String,
        field: &'static str,
        token: String,
    },

    #[error("Schema error on table `{table}`: {message}")]
    Schema { table: &'static str, message: String },

    #[error("Invalid team reference data: {message}")]
    Reference { message: String },

    #[error("Unknown column `{column}` for table `{table}`")]
    UnknownColumn { table: &'static str, column: String },

    #[error("Invalid entity kind: {kind}")]
    InvalidEntityKind { kind: String },

    #[error("Could not determine a default database location")]
    NoDataDir,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests;
