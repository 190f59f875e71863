//! Data models for the storage layer
//!
//! Field names double as column names: rows are bound and read back through
//! serde, so a field rename is a schema change.

use serde::{Deserialize, Serialize};

use super::entity::{Column, Entity};

/// A player's season batting line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattingRecord {
    /// Assigned by the store on insert.
    pub id: Option<i64>,
    pub name: String,
    pub batting_style: String,
    pub role: String,
    pub team: String,
    pub matches: i64,
    pub innings_batted: i64,
    pub runs_scored: i64,
    pub balls_faced: i64,
    pub dot_balls_played: i64,
    pub fours_hit: i64,
    pub sixes_hit: i64,
    pub not_outs: i64,
    pub fifties: i64,
    pub centuries: i64,
    /// Opaque, e.g. `"45*"` for not out.
    pub highest_score: String,
    pub batting_strike_rate: f64,
    /// `None` when the player was never dismissed.
    pub batting_average: Option<f64>,
}

/// A player's season bowling line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlingRecord {
    pub id: Option<i64>,
    pub name: String,
    pub bowling_style: String,
    pub role: String,
    pub team: String,
    pub matches: i64,
    pub innings_bowled: i64,
    pub runs_given: i64,
    pub balls_bowled: i64,
    pub overs: f64,
    pub dot_balls_bowled: i64,
    pub fours_given: i64,
    pub sixes_given: i64,
    pub wickets: i64,
    pub four_wickets: i64,
    pub five_wickets: i64,
    pub ten_wickets: i64,
    pub maidens: i64,
    /// Opaque, e.g. `"5/20"`.
    pub highest_wickets: String,
    pub bowling_strike_rate: f64,
    /// `None` when no wicket has been taken.
    pub bowling_average: Option<f64>,
    pub economy_rate: f64,
}

/// Team standings row from the reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: Option<i64>,
    /// Short code, e.g. `"MI NY"`.
    pub name: String,
    pub full_name: String,
    pub matches: i64,
    pub wins: i64,
    pub loss: i64,
    pub points: i64,
    pub net_run_rate: f64,
    /// Logo URI
    pub image: String,
}

/// A played fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub id: Option<i64>,
    pub team_a_name: String,
    pub team_b_name: String,
    pub date_time: String,
    pub ground_name: String,
    pub city: String,
    pub toss_info: String,
    pub innings_one_summary: String,
    pub innings_two_summary: String,
    pub win_team_name: String,
    pub man_of_the_match_name: String,
    pub result: String,
}

impl Entity for BattingRecord {
    const TABLE: &'static str = "batting_players";
    const LABEL: &'static str = "Player";
    const COLUMNS: &'static [Column] = &[
        Column::text("name"),
        Column::text("batting_style"),
        Column::text("role"),
        Column::text("team"),
        Column::integer("matches"),
        Column::integer("innings_batted"),
        Column::integer("runs_scored"),
        Column::integer("balls_faced"),
        Column::integer("dot_balls_played"),
        Column::integer("fours_hit"),
        Column::integer("sixes_hit"),
        Column::integer("not_outs"),
        Column::integer("fifties"),
        Column::integer("centuries"),
        Column::text("highest_score"),
        Column::real("batting_strike_rate"),
        Column::real("batting_average").nullable(),
    ];

    fn describe(&self) -> String {
        format!("batting player {} ({})", self.name, self.team)
    }
}

impl Entity for BowlingRecord {
    const TABLE: &'static str = "bowling_players";
    const LABEL: &'static str = "Player";
    const COLUMNS: &'static [Column] = &[
        Column::text("name"),
        Column::text("bowling_style"),
        Column::text("role"),
        Column::text("team"),
        Column::integer("matches"),
        Column::integer("innings_bowled"),
        Column::integer("runs_given"),
        Column::integer("balls_bowled"),
        Column::real("overs"),
        Column::integer("dot_balls_bowled"),
        Column::integer("fours_given"),
        Column::integer("sixes_given"),
        Column::integer("wickets"),
        Column::integer("four_wickets"),
        Column::integer("five_wickets"),
        Column::integer("ten_wickets"),
        Column::integer("maidens"),
        Column::text("highest_wickets"),
        Column::real("bowling_strike_rate"),
        Column::real("bowling_average").nullable(),
        Column::real("economy_rate"),
    ];

    fn describe(&self) -> String {
        format!("bowling player {} ({})", self.name, self.team)
    }
}

impl Entity for Team {
    const TABLE: &'static str = "teams";
    const LABEL: &'static str = "Team";
    const COLUMNS: &'static [Column] = &[
        Column::text("name").unique(),
        Column::text("full_name"),
        Column::integer("matches"),
        Column::integer("wins"),
        Column::integer("loss"),
        Column::integer("points"),
        Column::real("net_run_rate"),
        Column::text("image"),
    ];

    fn describe(&self) -> String {
        format!("team {} ({})", self.name, self.full_name)
    }
}

impl Entity for Match {
    const TABLE: &'static str = "matches";
    const LABEL: &'static str = "Match";
    const COLUMNS: &'static [Column] = &[
        Column::text("team_a_name"),
        Column::text("team_b_name"),
        Column::text("date_time"),
        Column::text("ground_name"),
        Column::text("city"),
        Column::text("toss_info"),
        Column::text("innings_one_summary"),
        Column::text("innings_two_summary"),
        Column::text("win_team_name"),
        Column::text("man_of_the_match_name"),
        Column::text("result"),
    ];

    fn describe(&self) -> String {
        format!(
            "match {} v {} ({})",
            self.team_a_name, self.team_b_name, self.date_time
        )
    }
}
