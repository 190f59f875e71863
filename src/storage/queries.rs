//! Read-side query operations

use anyhow::Result;
use log::debug;
use rusqlite::{OptionalExtension, ToSql};
use serde::de::DeserializeOwned;

use super::{entity::Entity, row::from_row, row::row_to_json, schema::StatsDatabase};
use crate::error::StatsError;

impl StatsDatabase {
    /// First row of `E` (lowest id) whose `column` equals `value`.
    ///
    /// `Ok(None)` means no row matched. `column` must be `id` or one of
    /// `E::COLUMNS`; anything else is rejected before touching the store.
    pub fn lookup<E: Entity>(&self, column: &str, value: &dyn ToSql) -> Result<Option<E>> {
        if !E::has_column(column) {
            return Err(StatsError::UnknownColumn {
                table: E::TABLE,
                column: column.to_string(),
            }
            .into());
        }

        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?1 ORDER BY id LIMIT 1",
            E::TABLE,
            column
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let json = stmt.query_row([value], row_to_json).optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_value(json)?)),
            None => Ok(None),
        }
    }

    /// Run trusted, read-only `sql` and project its first row onto `T`.
    ///
    /// Columns the query does not return keep `T`'s default. The text goes
    /// to the store verbatim: this is a diagnostic hook, not a user-facing
    /// query API.
    pub fn query_first<T: DeserializeOwned>(&self, sql: &str) -> Result<Option<T>> {
        debug!("Ad-hoc query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        match rows.next()? {
            Some(row) => Ok(Some(from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Every row of `E`, in id order.
    #[cfg(test)]
    pub(crate) fn all<E: Entity>(&self) -> Result<Vec<E>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", E::TABLE);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(from_row(row)?);
        }
        Ok(out)
    }
}
