//! Table shape declarations shared by schema, loader and queries.

use serde::{de::DeserializeOwned, Serialize};

/// SQLite storage class a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Real,
    Text,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
        }
    }
}

/// One non-key column of an entity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub unique: bool,
}

impl Column {
    const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            nullable: false,
            unique: false,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, SqlType::Integer)
    }

    pub const fn real(name: &'static str) -> Self {
        Self::new(name, SqlType::Real)
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, SqlType::Text)
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Column definition fragment for `CREATE TABLE`.
    pub fn definition(&self) -> String {
        let mut def = format!("{} {}", self.name, self.sql_type.as_sql());
        if !self.nullable {
            def.push_str(" NOT NULL");
        }
        if self.unique {
            def.push_str(" UNIQUE");
        }
        def
    }
}

/// Name of the store-assigned key column on every table.
pub const ID_COLUMN: &str = "id";

/// A persistable record type.
///
/// Serde field names must match `COLUMNS` (plus `id`); rows are converted
/// to and from entities through `serde_json::Value`.
pub trait Entity: Serialize + DeserializeOwned {
    const TABLE: &'static str;
    /// Human label used in "not found" reporting.
    const LABEL: &'static str;
    const COLUMNS: &'static [Column];

    /// Identifying attributes for failure reports.
    fn describe(&self) -> String;

    /// Whether `name` is a column lookups may filter on.
    fn has_column(name: &str) -> bool {
        name == ID_COLUMN || Self::COLUMNS.iter().any(|c| c.name == name)
    }
}
