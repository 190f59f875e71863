//! Row-at-a-time, best-effort loading

use log::{info, warn};
use rusqlite::params_from_iter;
use serde::Serialize;

use super::{entity::Entity, row::to_sql_values, schema::StatsDatabase};

/// A row the store refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    /// Position in the input batch
    pub index: usize,
    pub record: String,
    pub error: String,
}

/// Outcome of loading one entity collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub table: &'static str,
    pub inserted: usize,
    pub failures: Vec<RowFailure>,
}

impl LoadReport {
    pub fn attempted(&self) -> usize {
        self.inserted + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl StatsDatabase {
    /// Insert a single entity, returning its store-assigned id.
    pub fn insert<E: Entity>(&mut self, entity: &E) -> anyhow::Result<i64> {
        let values = to_sql_values(entity)?;
        let names = E::COLUMNS
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=values.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            names,
            placeholders
        );

        self.conn
            .prepare_cached(&sql)?
            .execute(params_from_iter(values))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert every entity, in order, each as its own unit of work.
    ///
    /// A failing row is logged, recorded in the report and skipped; rows
    /// already inserted stay. This never fails as a whole.
    pub fn load<E: Entity>(&mut self, entities: &[E]) -> LoadReport {
        let mut report = LoadReport {
            table: E::TABLE,
            inserted: 0,
            failures: Vec::new(),
        };

        for (index, entity) in entities.iter().enumerate() {
            match self.insert(entity) {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    let record = entity.describe();
                    warn!("Error inserting {} into {}: {:#}", record, E::TABLE, e);
                    report.failures.push(RowFailure {
                        index,
                        record,
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        info!(
            "Loaded {} of {} rows into {}",
            report.inserted,
            report.attempted(),
            E::TABLE
        );
        report
    }
}
