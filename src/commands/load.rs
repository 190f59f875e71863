//! Load command: rebuild the store from the source documents

use log::info;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{
    resolve_db_path,
    verify::{run_verification, VerificationPlan},
};
use crate::{
    error::StatsError,
    ingest::{
        map_batsmen, map_bowlers, map_matches, BattingDocument, BowlingDocument, MatchDocument,
    },
    reference::TeamReference,
    storage::{
        BattingRecord, BowlingRecord, Entity, LoadReport, Match, StatsDatabase, Team,
    },
    Result,
};

/// Source document file names inside `--data-dir`.
pub const BATTING_FILE: &str = "batsman.json";
pub const BOWLING_FILE: &str = "bowlers.json";
pub const MATCHES_FILE: &str = "matches.json";

/// Parameters for the load command
#[derive(Debug)]
pub struct LoadParams {
    pub data_dir: PathBuf,
    pub batting: Option<PathBuf>,
    pub bowling: Option<PathBuf>,
    pub matches: Option<PathBuf>,
    pub teams: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub skip_verify: bool,
    pub as_json: bool,
}

impl LoadParams {
    fn source(&self, explicit: &Option<PathBuf>, file: &str) -> PathBuf {
        explicit
            .clone()
            .unwrap_or_else(|| self.data_dir.join(file))
    }

    pub fn batting_path(&self) -> PathBuf {
        self.source(&self.batting, BATTING_FILE)
    }

    pub fn bowling_path(&self) -> PathBuf {
        self.source(&self.bowling, BOWLING_FILE)
    }

    pub fn matches_path(&self) -> PathBuf {
        self.source(&self.matches, MATCHES_FILE)
    }
}

/// Everything a load needs, already mapped and validated.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub teams: Vec<Team>,
    pub batting: Vec<BattingRecord>,
    pub bowling: Vec<BowlingRecord>,
    pub matches: Vec<Match>,
}

impl PreparedData {
    /// Map the three source documents. Fails on the first malformed record.
    pub fn prepare(
        reference: &TeamReference,
        batting: &BattingDocument,
        bowling: &BowlingDocument,
        matches: &MatchDocument,
    ) -> Result<Self> {
        Ok(Self {
            teams: reference.teams.clone(),
            batting: map_batsmen(batting)?,
            bowling: map_bowlers(bowling)?,
            matches: map_matches(matches),
        })
    }
}

/// Read and parse one JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        StatsError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Ensure `E`'s table; any failure is fatal.
fn ensure<E: Entity>(db: &mut StatsDatabase) -> Result<()> {
    db.ensure_schema::<E>().map_err(|e| StatsError::Schema {
        table: E::TABLE,
        message: format!("{:#}", e),
    })
}

fn ensure_and_load<E: Entity>(db: &mut StatsDatabase, rows: &[E]) -> Result<LoadReport> {
    ensure::<E>(db)?;
    Ok(db.load(rows))
}

/// Persist prepared data: teams first, then batting, bowling and matches.
///
/// Only schema failures stop the run; per-row failures are in the reports.
pub fn load_all(db: &mut StatsDatabase, data: &PreparedData) -> Result<Vec<LoadReport>> {
    Ok(vec![
        ensure_and_load(db, &data.teams)?,
        ensure_and_load(db, &data.batting)?,
        ensure_and_load(db, &data.bowling)?,
        ensure_and_load(db, &data.matches)?,
    ])
}

/// Write a per-table summary of the load.
pub fn write_summary(out: &mut dyn Write, reports: &[LoadReport], as_json: bool) -> Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(reports)?)?;
        return Ok(());
    }

    for report in reports {
        writeln!(
            out,
            "{:<16} {:>5} inserted {:>5} failed",
            report.table,
            report.inserted,
            report.failures.len()
        )?;
        for failure in &report.failures {
            writeln!(
                out,
                "    row {}: {}: {}",
                failure.index, failure.record, failure.error
            )?;
        }
    }
    if reports.iter().all(LoadReport::is_clean) {
        writeln!(out, "Data inserted successfully.")?;
    }
    Ok(())
}

/// Handle the load command
pub fn handle_load(params: LoadParams) -> Result<()> {
    let reference = TeamReference::resolve(params.teams.as_deref())?;
    info!(
        "Using team reference v{} (season {}, {} teams)",
        reference.version,
        reference.season,
        reference.teams.len()
    );

    let batting: BattingDocument = read_document(&params.batting_path())?;
    let bowling: BowlingDocument = read_document(&params.bowling_path())?;
    let matches: MatchDocument = read_document(&params.matches_path())?;

    // Map everything before the old store is touched.
    let data = PreparedData::prepare(&reference, &batting, &bowling, &matches)?;

    let db_path = resolve_db_path(params.db.clone())?;
    let mut db = StatsDatabase::create_fresh(&db_path)?;
    info!("Loading into {}", db_path.display());

    let reports = load_all(&mut db, &data)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &reports, params.as_json)?;

    if !params.skip_verify {
        run_verification(&db, &VerificationPlan::default(), &mut out)?;
    }

    Ok(())
}
