//! Snapshot loading.
//!
//! The engine is pure; all inputs arrive through a JSON snapshot
//! produced by an upstream collector. Game logs in the snapshot are
//! already ordered most recent first.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::{CandidateLine, RecentFirstLog, TeamAggregateStat};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Identity of a player in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub position: Option<String>,
}

/// Everything the engine consumes for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_updated: DateTime<Utc>,
    pub players: Vec<PlayerInfo>,
    /// Player id to most-recent-first game log.
    pub game_logs: HashMap<i64, RecentFirstLog>,
    pub team_stats: Vec<TeamAggregateStat>,
    /// Player id to category name to quoted lines across books.
    #[serde(default)]
    pub odds: HashMap<i64, HashMap<String, Vec<CandidateLine>>>,
    /// Team name or abbreviation to next opponent name.
    #[serde(default)]
    pub next_opponents: HashMap<String, String>,
}

impl Snapshot {
    /// Look up a team aggregate by abbreviation or full name. Upstream
    /// feeds disagree on which form they carry, so a contains match in
    /// either direction backs up the exact one.
    pub fn find_team(&self, name: &str) -> Option<&TeamAggregateStat> {
        self.team_stats
            .iter()
            .find(|t| t.abbrev == name || t.team_name == name)
            .or_else(|| {
                self.team_stats
                    .iter()
                    .find(|t| t.team_name.contains(name) || name.contains(&t.team_name))
            })
    }

    /// Resolve a player's next opponent to its team aggregate, keyed by
    /// either the player's team abbreviation or full team name.
    pub fn next_opponent_for(&self, team: &str) -> Option<&TeamAggregateStat> {
        let opponent = self.next_opponents.get(team)?;
        self.find_team(opponent)
    }
}

/// Load and parse a snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    info!(
        path = %path.display(),
        players = snapshot.players.len(),
        teams = snapshot.team_stats.len(),
        last_updated = %snapshot.last_updated,
        "snapshot loaded"
    );
    Ok(snapshot)
}
