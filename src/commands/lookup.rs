//! Lookup command: first row where a column equals a value

use std::fmt::Debug;
use std::io::Write;
use std::path::PathBuf;

use super::{render_row, resolve_db_path};
use crate::{
    cli::types::EntityKind,
    storage::{BattingRecord, BowlingRecord, Entity, Match, StatsDatabase, Team},
    Result,
};

fn lookup_one<E: Entity + Debug>(
    db: &StatsDatabase,
    column: &str,
    value: &str,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    match db.lookup::<E>(column, &value)? {
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

/// Look up `column = value` in `kind`'s table and write the row (or a
/// not-found line) to `out`. Returns whether a row was found.
pub fn lookup_entity(
    db: &StatsDatabase,
    kind: EntityKind,
    column: &str,
    value: &str,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    match kind {
        EntityKind::Batting => lookup_one::<BattingRecord>(db, column, value, as_json, out),
        EntityKind::Bowling => lookup_one::<BowlingRecord>(db, column, value, as_json, out),
        EntityKind::Team => lookup_one::<Team>(db, column, value, as_json, out),
        EntityKind::Match => lookup_one::<Match>(db, column, value, as_json, out),
    }
}

/// Handle the lookup command
pub fn handle_lookup(
    db: Option<PathBuf>,
    kind: EntityKind,
    column: String,
    value: String,
    as_json: bool,
) -> Result<()> {
    let db = StatsDatabase::open_read_only(&resolve_db_path(db)?)?;
    let stdout = std::io::stdout();
    lookup_entity(&db, kind, &column, &value, as_json, &mut stdout.lock())?;
    Ok(())
}
