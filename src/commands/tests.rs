//! Unit tests for command helpers

use super::*;
use crate::{
    cli::types::EntityKind,
    reference::TeamReference,
    storage::{BattingRecord, LoadReport, Match, RowFailure, StatsDatabase},
};
use std::path::Path;

fn loaded_db() -> StatsDatabase {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let data = load::PreparedData {
        teams: TeamReference::builtin().unwrap().teams,
        batting: vec![BattingRecord {
            name: "Daniel Sams".to_string(),
            team: "TSK".to_string(),
            batting_strike_rate: 163.33,
            ..Default::default()
        }],
        bowling: vec![],
        matches: vec![Match {
            team_a_name: "SEA".to_string(),
            team_b_name: "MI NY".to_string(),
            ground_name: "Church Street Park".to_string(),
            city: "Morrisville".to_string(),
            win_team_name: "MI NY".to_string(),
            ..Default::default()
        }],
    };
    load::load_all(&mut db, &data).unwrap();
    db
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_resolve_db_path() {
    let explicit = resolve_db_path(Some(PathBuf::from("/tmp/x.db"))).unwrap();
    assert_eq!(explicit, PathBuf::from("/tmp/x.db"));

    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    assert_eq!(resolve_db_path(None).unwrap(), PathBuf::from("/tmp/from-env.db"));

    // Explicit flag still wins over the env var
    let explicit = resolve_db_path(Some(PathBuf::from("flag.db"))).unwrap();
    assert_eq!(explicit, PathBuf::from("flag.db"));

    std::env::remove_var(DB_PATH_ENV_VAR);
    if let Ok(path) = resolve_db_path(None) {
        assert!(path.ends_with(Path::new("mlc-stats").join(DEFAULT_DB_FILE)));
    }
}

#[test]
fn test_render_row() {
    let team = crate::storage::Team {
        name: "SEA".to_string(),
        ..Default::default()
    };
    let json = render_row(&team, true).unwrap();
    assert!(json.contains("\"name\": \"SEA\""));

    let debug = render_row(&team, false).unwrap();
    assert!(debug.starts_with("Team {"));
}

#[test]
fn test_write_summary_text() {
    let reports = vec![
        LoadReport {
            table: "teams",
            inserted: 6,
            failures: vec![],
        },
        LoadReport {
            table: "batting_players",
            inserted: 9,
            failures: vec![RowFailure {
                index: 3,
                record: "batting player X (SEA)".to_string(),
                error: "constraint failed".to_string(),
            }],
        },
    ];

    let mut buf = Vec::new();
    load::write_summary(&mut buf, &reports, false).unwrap();
    let text = output(buf);
    assert!(text.contains("teams"));
    assert!(text.contains("row 3: batting player X (SEA): constraint failed"));
    assert!(!text.contains("Data inserted successfully."));
}

#[test]
fn test_write_summary_clean_and_json() {
    let reports = vec![LoadReport {
        table: "matches",
        inserted: 2,
        failures: vec![],
    }];

    let mut buf = Vec::new();
    load::write_summary(&mut buf, &reports, false).unwrap();
    assert!(output(buf).contains("Data inserted successfully."));

    let mut buf = Vec::new();
    load::write_summary(&mut buf, &reports, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
    assert_eq!(parsed[0]["table"], "matches");
    assert_eq!(parsed[0]["inserted"], 2);
}

#[test]
fn test_verification_completes() {
    let db = loaded_db();
    let mut buf = Vec::new();
    let outcome =
        verify::run_verification(&db, &verify::VerificationPlan::default(), &mut buf).unwrap();

    assert_eq!(outcome, verify::VerificationOutcome::Completed);
    let text = output(buf);
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("Daniel Sams"));
    assert!(text.contains("Mumbai Indians New York"));
}

#[test]
fn test_verification_stops_at_first_not_found() {
    let db = loaded_db();
    let plan = verify::VerificationPlan {
        team_full_name: "Nowhere Nomads".to_string(),
        ..Default::default()
    };

    let mut buf = Vec::new();
    let outcome = verify::run_verification(&db, &plan, &mut buf).unwrap();
    assert_eq!(outcome, verify::VerificationOutcome::StoppedAt(2));

    let text = output(buf);
    assert!(text.ends_with("Team not found.\n"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_verification_propagates_query_error() {
    let db = loaded_db();
    let plan = verify::VerificationPlan {
        match_query: "SELECT * FROM no_such_table".to_string(),
        ..Default::default()
    };

    let mut buf = Vec::new();
    assert!(verify::run_verification(&db, &plan, &mut buf).is_err());
}

#[test]
fn test_lookup_entity_found_and_not_found() {
    let db = loaded_db();

    let mut buf = Vec::new();
    let found = lookup::lookup_entity(&db, EntityKind::Team, "name", "MI NY", true, &mut buf).unwrap();
    assert!(found);
    let row: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
    assert_eq!(row["full_name"], "Mumbai Indians New York");

    let mut buf = Vec::new();
    let found =
        lookup::lookup_entity(&db, EntityKind::Batting, "name", "Nobody", false, &mut buf).unwrap();
    assert!(!found);
    assert_eq!(output(buf), "Player not found.\n");
}

#[test]
fn test_lookup_entity_unknown_column() {
    let db = loaded_db();
    let mut buf = Vec::new();
    let err = lookup::lookup_entity(&db, EntityKind::Match, "venue", "x", false, &mut buf)
        .unwrap_err();
    assert!(err.to_string().contains("Unknown column `venue`"));
}

#[test]
fn test_query_entity_projection() {
    let db = loaded_db();
    let mut buf = Vec::new();
    let found = query::query_entity(
        &db,
        EntityKind::Team,
        "SELECT image FROM teams WHERE name = (SELECT win_team_name FROM matches \
         WHERE id = (SELECT MIN(id) FROM matches WHERE city = 'Morrisville'))",
        true,
        &mut buf,
    )
    .unwrap();
    assert!(found);

    let row: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
    assert!(row["image"].as_str().unwrap().ends_with("/ny.png"));
    assert_eq!(row["full_name"], "");
    assert_eq!(row["id"], serde_json::Value::Null);
}

#[test]
fn test_schema_listing() {
    let db = loaded_db();
    let tables = db.list_tables().unwrap();

    let mut buf = Vec::new();
    schema::write_tables(&mut buf, &tables, false).unwrap();
    let text = output(buf);
    assert!(text.contains("batting_players"));
    assert!(text.contains("net_run_rate"));
    assert!(text.contains("PRIMARY KEY"));
}
