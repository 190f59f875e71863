//! Team reference dataset
//!
//! Standings are hand-authored, not derived from the stats exports. They
//! ship as a versioned JSON document; the built-in copy can be replaced
//! with `--teams <file>`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::{
    error::{Result, StatsError},
    storage::Team,
};


/// Format version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_TEAMS: &str = include_str!("../data/teams.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReference {
    pub version: u32,
    pub season: u16,
    pub teams: Vec<Team>,
}

impl TeamReference {
    /// The 2023 standings compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TEAMS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a reference document.
    pub fn from_json(text: &str) -> Result<Self> {
        let reference: Self = serde_json::from_str(text)?;
        reference.validate()?;
        Ok(reference)
    }

    /// `--teams <file>` when given, the built-in dataset otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(StatsError::Reference { message });

        if self.version != SUPPORTED_VERSION {
            return invalid(format!(
                "unsupported version {} (expected {})",
                self.version, SUPPORTED_VERSION
            ));
        }
        if self.teams.is_empty() {
            return invalid("no teams listed".to_string());
        }

        let mut seen = HashSet::new();
        for team in &self.teams {
            if team.name.trim().is_empty() {
                return invalid(format!("team '{}' has no short code", team.full_name));
            }
            if !seen.insert(team.name.as_str()) {
                return invalid(format!("duplicate short code {}", team.name));
            }
            if team.id.is_some() {
                return invalid(format!("team {} carries an id; ids are store-assigned", team.name));
            }
        }
        Ok(())
    }
}
