//! Schema command: table inventory of the store

use std::io::Write;
use std::path::PathBuf;

use super::resolve_db_path;
use crate::{
    storage::{StatsDatabase, TableInfo},
    Result,
};

/// Write each table and its columns to `out`.
pub fn write_tables(out: &mut dyn Write, tables: &[TableInfo], as_json: bool) -> Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(tables)?)?;
        return Ok(());
    }

    for table in tables {
        writeln!(out, "{}", table.name)?;
        for col in &table.columns {
            let mut flags = Vec::new();
            if col.primary_key {
                flags.push("PRIMARY KEY");
            } else if col.not_null {
                flags.push("NOT NULL");
            }
            writeln!(
                out,
                "    {:<24} {:<8} {}",
                col.name,
                col.declared_type,
                flags.join(" ")
            )?;
        }
    }
    Ok(())
}

/// Handle the schema command
pub fn handle_schema(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = StatsDatabase::open_read_only(&resolve_db_path(db)?)?;
    let tables = db.list_tables()?;
    let stdout = std::io::stdout();
    write_tables(&mut stdout.lock(), &tables, as_json)
}
