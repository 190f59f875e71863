//! Database connection and schema management

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::entity::{Entity, ID_COLUMN};

/// Connection to the stats store
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

/// One table and its columns, as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

impl StatsDatabase {
    /// Open (or create) the store at `path` without touching its contents.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        Ok(Self { conn })
    }

    /// Open an existing store read-only. Fails if `path` does not exist.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("opening database {} read-only", path.display()))?;
        Ok(Self { conn })
    }

    /// Discard any store at `path`, then open a fresh one.
    ///
    /// A run always starts from an empty store so it ends holding exactly
    /// one generation of data.
    pub fn create_fresh(path: &Path) -> Result<Self> {
        match std::fs::remove_file(path) {
            Ok(()) => info!("Removed existing database {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No existing database file found at {}", path.display())
            }
            Err(e) => {
                return Err(e).with_context(|| format!("removing database {}", path.display()))
            }
        }
        Self::open(path)
    }

    /// In-memory store, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Make sure `E`'s table exists.
    ///
    /// Creates it when missing. An existing table is never altered or
    /// dropped; it must already carry every declared column, with the same
    /// type and nullability, or this fails.
    pub fn ensure_schema<E: Entity>(&mut self) -> Result<()> {
        let columns = E::COLUMNS
            .iter()
            .map(|c| c.definition())
            .collect::<Vec<_>>()
            .join(",\n                ");
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {}
            )",
            E::TABLE,
            ID_COLUMN,
            columns
        );
        debug!("{}", ddl);
        self.conn.execute(&ddl, [])?;

        let existing = self.table_columns(E::TABLE)?;
        let find = |name: &str| existing.iter().find(|c| c.name == name);
        if find(ID_COLUMN).is_none() {
            bail!("table `{}` has no `{}` column", E::TABLE, ID_COLUMN);
        }
        if let Some(col) = E::COLUMNS.iter().find(|c| find(c.name).is_none()) {
            bail!("table `{}` is missing column `{}`", E::TABLE, col.name);
        }
        for col in E::COLUMNS {
            let Some(found) = find(col.name) else {
                continue;
            };
            if !found.declared_type.eq_ignore_ascii_case(col.sql_type.as_sql()) {
                bail!(
                    "table `{}` column `{}` is declared {}, expected {}",
                    E::TABLE,
                    col.name,
                    found.declared_type,
                    col.sql_type.as_sql()
                );
            }
            if found.not_null == col.nullable {
                bail!(
                    "table `{}` column `{}` is {}, expected {}",
                    E::TABLE,
                    col.name,
                    if found.not_null { "NOT NULL" } else { "nullable" },
                    if col.nullable { "nullable" } else { "NOT NULL" }
                );
            }
        }

        info!("Schema ready for table {}", E::TABLE);
        Ok(())
    }

    /// Column metadata for `table`; empty when the table does not exist.
    pub fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
        )?;
        let rows = stmt.query_map([table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                declared_type: row.get(1)?,
                not_null: row.get::<_, i64>(2)? != 0,
                primary_key: row.get::<_, i64>(3)? != 0,
            })
        })?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }
        Ok(columns)
    }

    /// All user tables with their columns, ordered by name.
    pub fn list_tables(&self) -> Result<Vec<TableInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        names
            .into_iter()
            .map(|name| {
                let columns = self.table_columns(&name)?;
                Ok(TableInfo { name, columns })
            })
            .collect()
    }

    /// Row count for an entity's table.
    pub fn count<E: Entity>(&self) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
