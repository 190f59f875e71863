//! Raw source record -> storage entity.
//!
//! Pure functions. Any coercion failure is fatal and names the record it
//! came from; nothing is defaulted.

use super::{
    coerce::{self, CoercionError},
    normalize::{ground_name, title_case},
    raw::{Batsman, BattingDocument, Bowler, BowlingDocument, MatchDocument, RawMatch, RawValue},
};
use crate::{
    error::{Result, StatsError},
    storage::{BattingRecord, BowlingRecord, Match},
};


type Fields<T> = std::result::Result<T, CoercionError>;

/// Attaches the record identity to a field-level failure.
fn malformed(kind: &str, index: usize, name: &str, err: CoercionError) -> StatsError {
    StatsError::MalformedInput {
        record: format!("{} record #{} ({})", kind, index, name),
        field: err.field,
        token: err.token,
    }
}

fn int(field: &'static str, raw: &RawValue) -> Fields<i64> {
    coerce::required_integer(field, &raw.token())
}

fn dec(field: &'static str, raw: &RawValue) -> Fields<f64> {
    coerce::required_decimal(field, &raw.token())
}

fn opt_dec(field: &'static str, raw: &RawValue) -> Fields<Option<f64>> {
    coerce::optional_decimal(field, &raw.token())
}

/// Map one batting row. `index` is its position in the source document.
pub fn map_batting(index: usize, raw: &Batsman) -> Result<BattingRecord> {
    batting_fields(raw).map_err(|e| malformed("batting", index, &raw.player_name, e))
}

fn batting_fields(raw: &Batsman) -> Fields<BattingRecord> {
    Ok(BattingRecord {
        id: None,
        name: title_case(&raw.player_name),
        batting_style: raw.batting_style.clone(),
        role: raw.player_role.clone(),
        team: raw.team_name.clone(),
        matches: int("Matches", &raw.matches)?,
        innings_batted: int("Innings", &raw.innings)?,
        runs_scored: int("Runs", &raw.runs)?,
        balls_faced: int("Balls", &raw.balls)?,
        dot_balls_played: int("DotBalls", &raw.dot_balls)?,
        fours_hit: int("BdryFours", &raw.bdry_fours)?,
        sixes_hit: int("BdrySixes", &raw.bdry_sixes)?,
        not_outs: int("NotOuts", &raw.not_outs)?,
        fifties: int("Fifties", &raw.fifties)?,
        centuries: int("Centuries", &raw.centuries)?,
        highest_score: raw.highest_score.clone(),
        batting_strike_rate: dec("StrikeRate", &raw.strike_rate)?,
        batting_average: opt_dec("BattingAverage", &raw.batting_average)?,
    })
}

/// Map one bowling row. `index` is its position in the source document.
pub fn map_bowling(index: usize, raw: &Bowler) -> Result<BowlingRecord> {
    bowling_fields(raw).map_err(|e| malformed("bowling", index, &raw.player_name, e))
}

fn bowling_fields(raw: &Bowler) -> Fields<BowlingRecord> {
    Ok(BowlingRecord {
        id: None,
        name: title_case(&raw.player_name),
        bowling_style: raw.bowling_style.clone(),
        role: raw.player_role.clone(),
        team: raw.team_name.clone(),
        matches: int("Matches", &raw.matches)?,
        innings_bowled: int("Innings", &raw.innings)?,
        runs_given: int("Runs", &raw.runs)?,
        balls_bowled: int("Balls", &raw.balls)?,
        overs: dec("Overs", &raw.overs)?,
        dot_balls_bowled: int("DotBalls", &raw.dot_balls)?,
        fours_given: int("BdryFours", &raw.bdry_fours)?,
        sixes_given: int("BdrySixes", &raw.bdry_sixes)?,
        wickets: int("Wickets", &raw.wickets)?,
        four_wickets: int("FourWickets", &raw.four_wickets)?,
        five_wickets: int("FiveWickets", &raw.five_wickets)?,
        ten_wickets: int("TenWickets", &raw.ten_wickets)?,
        maidens: int("Maidens", &raw.maidens)?,
        highest_wickets: raw.best_wickets.clone(),
        bowling_strike_rate: dec("StrikeRate", &raw.strike_rate)?,
        bowling_average: opt_dec("BowlingAverage", &raw.bowling_average)?,
        economy_rate: dec("EconomyRate", &raw.economy_rate)?,
    })
}

/// Map one match row: city and ground are normalised, the rest is copied.
pub fn map_match(raw: &RawMatch) -> Match {
    Match {
        id: None,
        team_a_name: raw.team_a_name.clone(),
        team_b_name: raw.team_b_name.clone(),
        date_time: raw.date_time.clone(),
        ground_name: ground_name(&raw.ground_name),
        city: title_case(&raw.city),
        toss_info: raw.toss_info.clone(),
        innings_one_summary: raw.innings_one_summary.clone(),
        innings_two_summary: raw.innings_two_summary.clone(),
        win_team_name: raw.win_team_name.clone(),
        man_of_the_match_name: raw.man_of_the_match_name.clone(),
        result: raw.result.clone(),
    }
}

/// Map a whole batting document; stops at the first malformed row.
pub fn map_batsmen(doc: &BattingDocument) -> Result<Vec<BattingRecord>> {
    doc.batsmen
        .iter()
        .enumerate()
        .map(|(i, b)| map_batting(i, b))
        .collect()
}

/// Map a whole bowling document; stops at the first malformed row.
pub fn map_bowlers(doc: &BowlingDocument) -> Result<Vec<BowlingRecord>> {
    doc.bowlers
        .iter()
        .enumerate()
        .map(|(i, b)| map_bowling(i, b))
        .collect()
}

pub fn map_matches(doc: &MatchDocument) -> Vec<Match> {
    doc.matches.iter().map(map_match).collect()
}
