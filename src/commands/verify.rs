//! Post-load verification lookups
//!
//! A fixed sequence of reads printed for manual inspection. A step that
//! finds nothing ends the sequence; an execution error is returned.

use std::io::Write;

use crate::{
    storage::{BattingRecord, Entity, Match, StatsDatabase, Team},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPlan {
    pub player_name: String,
    pub team_full_name: String,
    pub winning_team_code: String,
    /// Trusted diagnostic SQL, projected onto [`Match`].
    pub match_query: String,
}

impl Default for VerificationPlan {
    fn default() -> Self {
        Self {
            player_name: "Daniel Sams".to_string(),
            team_full_name: "Mumbai Indians New York".to_string(),
            winning_team_code: "MI NY".to_string(),
            match_query: "SELECT team_a_name, team_b_name FROM matches \
                          WHERE ground_name = 'Church Street Park'"
                .to_string(),
        }
    }
}

/// How far the sequence got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Completed,
    /// Step (1-based) that matched nothing.
    StoppedAt(usize),
}

fn report<E: std::fmt::Debug>(
    out: &mut dyn Write,
    label: &str,
    found: Option<E>,
) -> Result<bool> {
    match found {
        Some(row) => {
            writeln!(out, "{:?}", row)?;
            Ok(true)
        }
        None => {
            writeln!(out, "{} not found.", label)?;
            Ok(false)
        }
    }
}

/// Run `plan` against `db`, writing each result to `out`.
pub fn run_verification(
    db: &StatsDatabase,
    plan: &VerificationPlan,
    out: &mut dyn Write,
) -> Result<VerificationOutcome> {
    let player: Option<BattingRecord> = db.lookup("name", &plan.player_name)?;
    if !report(out, BattingRecord::LABEL, player)? {
        return Ok(VerificationOutcome::StoppedAt(1));
    }

    let team: Option<Team> = db.lookup("full_name", &plan.team_full_name)?;
    if !report(out, Team::LABEL, team)? {
        return Ok(VerificationOutcome::StoppedAt(2));
    }

    let won: Option<Match> = db.lookup("win_team_name", &plan.winning_team_code)?;
    if !report(out, Match::LABEL, won)? {
        return Ok(VerificationOutcome::StoppedAt(3));
    }

    let projected: Option<Match> = db.query_first(&plan.match_query)?;
    if !report(out, Match::LABEL, projected)? {
        return Ok(VerificationOutcome::StoppedAt(4));
    }

    Ok(VerificationOutcome::Completed)
}
