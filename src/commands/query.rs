//! Query command: trusted ad-hoc SQL projected onto an entity shape

use std::fmt::Debug;
use std::io::Write;
use std::path::PathBuf;

use super::{render_row, resolve_db_path};
use crate::{
    cli::types::EntityKind,
    storage::{BattingRecord, BowlingRecord, Entity, Match, StatsDatabase, Team},
    Result,
};

fn query_one<E: Entity + Debug>(
    db: &StatsDatabase,
    sql: &str,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    match db.query_first::<E>(sql)? {
        Some(row) => {
            writeln!(out, "{}", render_row(&row, as_json)?)?;
            Ok(true)
        }
        None => {
            writeln!(out, "{} not found.", E::LABEL)?;
            Ok(false)
        }
    }
}

/// Run `sql` and write its first row, projected onto `kind`, to `out`.
pub fn query_entity(
    db: &StatsDatabase,
    kind: EntityKind,
    sql: &str,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    match kind {
        EntityKind::Batting => query_one::<BattingRecord>(db, sql, as_json, out),
        EntityKind::Bowling => query_one::<BowlingRecord>(db, sql, as_json, out),
        EntityKind::Team => query_one::<Team>(db, sql, as_json, out),
        EntityKind::Match => query_one::<Match>(db, sql, as_json, out),
    }
}

/// Handle the query command. The store is opened read-only.
pub fn handle_query(db: Option<PathBuf>, kind: EntityKind, sql: String, as_json: bool) -> Result<()> {
    let db = StatsDatabase::open_read_only(&resolve_db_path(db)?)?;
    let stdout = std::io::stdout();
    query_entity(&db, kind, &sql, as_json, &mut stdout.lock())?;
    Ok(())
}
