//! Source document shapes, exactly as the stats exporter emits them.
//!
//! Numeric fields are kept as [`RawValue`] so strings and JSON numbers are
//! accepted alike; turning them into typed values is the mapper's job.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;


/// A numeric field as found in the source: either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    /// Default for missing counting stats.
    pub fn zero() -> Self {
        RawValue::Number(0.into())
    }

    /// Text token handed to the coercion layer.
    pub fn token(&self) -> Cow<'_, str> {
        match self {
            RawValue::Number(n) => Cow::Owned(n.to_string()),
            RawValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

/// Missing decimal fields become an empty token, which coercion rejects
/// with the record identified.
impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text(String::new())
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

/// `{ "CompetitionPlayerStats": [...] }` for batting
#[derive(Debug, Clone, Deserialize)]
pub struct BattingDocument {
    #[serde(rename = "CompetitionPlayerStats", default)]
    pub batsmen: Vec<Batsman>,
}

/// `{ "CompetitionPlayerStats": [...] }` for bowling
#[derive(Debug, Clone, Deserialize)]
pub struct BowlingDocument {
    #[serde(rename = "CompetitionPlayerStats", default)]
    pub bowlers: Vec<Bowler>,
}

/// Match list. The upstream key is misspelled; the correct spelling is
/// accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDocument {
    #[serde(rename = "CompetitionDeatails", alias = "CompetitionDetails", default)]
    pub matches: Vec<RawMatch>,
}

/// One batting stats row. The source `ID` is not kept.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Batsman {
    pub player_name: String,
    pub batting_style: String,
    pub player_role: String,
    pub team_name: String,
    #[serde(default = "RawValue::zero")]
    pub matches: RawValue,
    #[serde(default = "RawValue::zero")]
    pub innings: RawValue,
    #[serde(default = "RawValue::zero")]
    pub runs: RawValue,
    #[serde(default = "RawValue::zero")]
    pub balls: RawValue,
    #[serde(default = "RawValue::zero")]
    pub dot_balls: RawValue,
    #[serde(default = "RawValue::zero")]
    pub bdry_fours: RawValue,
    #[serde(default = "RawValue::zero")]
    pub bdry_sixes: RawValue,
    #[serde(default = "RawValue::zero")]
    pub not_outs: RawValue,
    #[serde(default = "RawValue::zero")]
    pub fifties: RawValue,
    #[serde(default = "RawValue::zero")]
    pub centuries: RawValue,
    pub highest_score: String,
    pub strike_rate: RawValue,
    pub batting_average: RawValue,
}

/// One bowling stats row. The source `ID` is not kept.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bowler {
    pub player_name: String,
    pub bowling_style: String,
    pub player_role: String,
    pub team_name: String,
    #[serde(default = "RawValue::zero")]
    pub matches: RawValue,
    #[serde(default = "RawValue::zero")]
    pub innings: RawValue,
    #[serde(default = "RawValue::zero")]
    pub runs: RawValue,
    #[serde(default = "RawValue::zero")]
    pub balls: RawValue,
    pub overs: RawValue,
    #[serde(default = "RawValue::zero")]
    pub dot_balls: RawValue,
    #[serde(default = "RawValue::zero")]
    pub bdry_fours: RawValue,
    #[serde(default = "RawValue::zero")]
    pub bdry_sixes: RawValue,
    #[serde(default = "RawValue::zero")]
    pub wickets: RawValue,
    #[serde(default = "RawValue::zero")]
    pub four_wickets: RawValue,
    #[serde(default = "RawValue::zero")]
    pub five_wickets: RawValue,
    #[serde(default = "RawValue::zero")]
    pub ten_wickets: RawValue,
    #[serde(default = "RawValue::zero")]
    pub maidens: RawValue,
    pub best_wickets: String,
    pub strike_rate: RawValue,
    pub bowling_average: RawValue,
    pub economy_rate: RawValue,
}

/// One match row.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawMatch {
    pub team_a_name: String,
    pub team_b_name: String,
    #[serde(rename = "MatchDateTime")]
    pub date_time: String,
    pub ground_name: String,
    pub city: String,
    pub toss_info: String,
    pub innings_one_summary: String,
    pub innings_two_summary: String,
    pub win_team_name: String,
    pub man_of_the_match_name: String,
    #[serde(rename = "MatchResult")]
    pub result: String,
}
