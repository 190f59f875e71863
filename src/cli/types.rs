//! Typed CLI values.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which persisted entity a command addresses.
///
/// # Examples
///
/// ```rust
/// use mlc_stats::EntityKind;
///
/// let kind: EntityKind = "bowling".parse().unwrap();
/// assert_eq!(kind, EntityKind::Bowling);
/// assert_eq!(kind.table(), "bowling_players");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Batting,
    Bowling,
    Team,
    Match,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Batting,
        EntityKind::Bowling,
        EntityKind::Team,
        EntityKind::Match,
    ];

    /// Backing table name.
    pub fn table(&self) -> &'static str {
        use crate::storage::{BattingRecord, BowlingRecord, Entity, Match, Team};
        match self {
            EntityKind::Batting => BattingRecord::TABLE,
            EntityKind::Bowling => BowlingRecord::TABLE,
            EntityKind::Team => Team::TABLE,
            EntityKind::Match => Match::TABLE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Batting => "batting",
            EntityKind::Bowling => "bowling",
            EntityKind::Team => "team",
            EntityKind::Match => "match",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EntityKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batting" | "batsman" | "batting_players" => Ok(EntityKind::Batting),
            "bowling" | "bowler" | "bowling_players" => Ok(EntityKind::Bowling),
            "team" | "teams" => Ok(EntityKind::Team),
            "match" | "matches" => Ok(EntityKind::Match),
            _ => Err(StatsError::InvalidEntityKind {
                kind: s.to_string(),
            }),
        }
    }
}
