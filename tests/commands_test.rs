//! Integration tests for command handlers

use mlc_stats::{
    commands::{
        load::{handle_load, LoadParams, BATTING_FILE, BOWLING_FILE, MATCHES_FILE},
        lookup::lookup_entity,
        query::query_entity,
    },
    storage::*,
    EntityKind, StatsError,
};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn params(db: &Path) -> LoadParams {
    LoadParams {
        data_dir: fixtures_dir(),
        batting: None,
        bowling: None,
        matches: None,
        teams: None,
        db: Some(db.to_path_buf()),
        skip_verify: false,
        as_json: false,
    }
}

#[test]
fn test_source_paths_default_to_data_dir() {
    let p = params(Path::new("x.db"));
    assert_eq!(p.batting_path(), fixtures_dir().join(BATTING_FILE));
    assert_eq!(p.bowling_path(), fixtures_dir().join(BOWLING_FILE));
    assert_eq!(p.matches_path(), fixtures_dir().join(MATCHES_FILE));
}

#[test]
fn test_source_path_override() {
    let mut p = params(Path::new("x.db"));
    p.matches = Some(PathBuf::from("/elsewhere/m.json"));
    assert_eq!(p.matches_path(), PathBuf::from("/elsewhere/m.json"));
    assert_eq!(p.batting_path(), fixtures_dir().join(BATTING_FILE));
}

#[test]
fn test_handle_load_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("prepared").join("player_stats.db");

    handle_load(params(&db_path)).unwrap();

    let db = StatsDatabase::open_read_only(&db_path).unwrap();
    assert_eq!(db.count::<Team>().unwrap(), 6);
    assert_eq!(db.count::<BattingRecord>().unwrap(), 3);
    assert_eq!(db.count::<BowlingRecord>().unwrap(), 2);
    assert_eq!(db.count::<Match>().unwrap(), 2);

    let mut out = Vec::new();
    assert!(lookup_entity(
        &db,
        EntityKind::Team,
        "full_name",
        "Mumbai Indians New York",
        true,
        &mut out
    )
    .unwrap());
    let row: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(row["name"], "MI NY");
    assert_eq!(row["matches"], 5);
    assert_eq!(row["wins"], 2);
    assert_eq!(row["net_run_rate"], 1.004);
}

#[test]
fn test_handle_load_twice_yields_one_generation() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("player_stats.db");

    let mut p = params(&db_path);
    p.skip_verify = true;
    handle_load(p).unwrap();

    let mut p = params(&db_path);
    p.skip_verify = true;
    handle_load(p).unwrap();

    let db = StatsDatabase::open_read_only(&db_path).unwrap();
    assert_eq!(db.count::<Team>().unwrap(), 6);
    assert_eq!(db.count::<Match>().unwrap(), 2);
}

#[test]
fn test_handle_load_malformed_input_keeps_previous_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("player_stats.db");

    let mut p = params(&db_path);
    p.skip_verify = true;
    handle_load(p).unwrap();

    let bad = dir.path().join("bowlers.json");
    std::fs::write(
        &bad,
        r#"{ "CompetitionPlayerStats": [
            { "PlayerName": "z", "Overs": "4.0", "StrikeRate": 12,
              "BowlingAverage": "NA", "EconomyRate": "N/A" }
        ] }"#,
    )
    .unwrap();

    let mut p = params(&db_path);
    p.bowling = Some(bad);
    let err = handle_load(p).unwrap_err();
    assert!(matches!(
        err,
        StatsError::MalformedInput { field: "EconomyRate", .. }
    ));

    // The earlier generation is still there
    let db = StatsDatabase::open_read_only(&db_path).unwrap();
    assert_eq!(db.count::<BattingRecord>().unwrap(), 3);
}

#[test]
fn test_handle_load_missing_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = params(&dir.path().join("db.sqlite"));
    p.data_dir = dir.path().join("no-such-dir");

    match handle_load(p) {
        Err(StatsError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_handle_load_bad_team_reference() {
    let dir = tempfile::tempdir().unwrap();
    let teams = dir.path().join("teams.json");
    std::fs::write(&teams, r#"{ "version": 9, "season": 2023, "teams": [] }"#).unwrap();

    let mut p = params(&dir.path().join("db.sqlite"));
    p.teams = Some(teams);
    assert!(matches!(
        handle_load(p),
        Err(StatsError::Reference { .. })
    ));
}

#[test]
fn test_query_entity_after_load() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("player_stats.db");
    let mut p = params(&db_path);
    p.skip_verify = true;
    handle_load(p).unwrap();

    let db = StatsDatabase::open_read_only(&db_path).unwrap();
    let mut out = Vec::new();
    let found = query_entity(
        &db,
        EntityKind::Batting,
        "SELECT name, batting_strike_rate FROM batting_players ORDER BY runs_scored DESC LIMIT 1",
        true,
        &mut out,
    )
    .unwrap();
    assert!(found);

    let row: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(row["name"], "Nicholas Pooran");
    assert_eq!(row["batting_strike_rate"], 192.31);
    assert_eq!(row["batting_average"], serde_json::Value::Null);
}

#[test]
fn test_read_only_store_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("player_stats.db");
    let mut p = params(&db_path);
    p.skip_verify = true;
    handle_load(p).unwrap();

    let db = StatsDatabase::open_read_only(&db_path).unwrap();
    let result: anyhow::Result<Option<Team>> = db.query_first("DELETE FROM teams");
    assert!(result.is_err());
    assert_eq!(db.count::<Team>().unwrap(), 6);
}

#[test]
fn test_open_read_only_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(StatsDatabase::open_read_only(&dir.path().join("absent.db")).is_err());
}
