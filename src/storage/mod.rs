//! Storage layer for the MLC stats pipeline
//!
//! This module provides a thin abstraction over the SQLite store,
//! organized into logical components:
//! - `entity`: Table shape declarations (`Entity`, `Column`)
//! - `models`: The four persisted entities
//! - `schema`: Database connection and schema management
//! - `loader`: Best-effort row insertion
//! - `queries`: Lookups and ad-hoc projection queries
//! - `row`: Entity <-> row conversion

pub mod entity;
pub mod loader;
pub mod models;
pub mod queries;
pub mod row;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use entity::{Column, Entity, SqlType, ID_COLUMN};
pub use loader::{LoadReport, RowFailure};
pub use models::*;
pub use schema::{ColumnInfo, StatsDatabase, TableInfo};
