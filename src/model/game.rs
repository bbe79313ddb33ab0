// Per-game stat records for one player.
//
// Records are produced by the data provider and never mutated by the
// engine. Every stat field defaults to 0 on deserialization: upstream
// feeds omit fields for games where a stat did not occur.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goalie game decision (win / loss / overtime-or-shootout loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    W,
    L,
    O,
}

/// Stat line for one skater game.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkaterLine {
    pub goals: f64,
    pub assists: f64,
    pub points: f64,
    pub shots: f64,
}

/// Stat line for one goalie game.
///
/// Saves are never stored: they are always derived as
/// `shots_against - goals_against` at extraction time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalieLine {
    pub shots_against: f64,
    pub goals_against: f64,
    pub decision: Option<Decision>,
}

/// Stat line for one NFL skill-player game.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FootballLine {
    pub passing_yards: f64,
    pub passing_tds: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub receptions: f64,
}

/// Sport-specific stat payload of a game record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatLine {
    Skater(SkaterLine),
    Goalie(GoalieLine),
    Football(FootballLine),
}

/// One completed game for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    /// Opponent team abbreviation (e.g. "TOR").
    pub opponent: String,
    pub stats: StatLine,
}

impl GameRecord {
    /// Build a skater record. Test and fixture convenience.
    pub fn skater(date: NaiveDate, opponent: &str, line: SkaterLine) -> Self {
        GameRecord {
            date,
            opponent: opponent.to_string(),
            stats: StatLine::Skater(line),
        }
    }

    /// Build a goalie record.
    pub fn goalie(date: NaiveDate, opponent: &str, line: GoalieLine) -> Self {
        GameRecord {
            date,
            opponent: opponent.to_string(),
            stats: StatLine::Goalie(line),
        }
    }

    /// Build an NFL record.
    pub fn football(date: NaiveDate, opponent: &str, line: FootballLine) -> Self {
        GameRecord {
            date,
            opponent: opponent.to_string(),
            stats: StatLine::Football(line),
        }
    }

    /// Derived saves for a goalie game; 0 for non-goalie records.
    pub fn saves(&self) -> f64 {
        match &self.stats {
            StatLine::Goalie(g) => g.shots_against - g.goals_against,
            _ => 0.0,
        }
    }
}
