// Sportsbook candidate lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sportsbook quote for a player/stat over-under market.
///
/// Multiple lines may exist per player and category (several books,
/// standard plus alternate markets). The only dedup performed upstream
/// is on (bookmaker, line value), so near-duplicates are expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLine {
    /// Numeric threshold of the over/under.
    pub line: f64,
    /// American odds for the over, when quoted.
    #[serde(default)]
    pub over_odds: Option<i32>,
    /// American odds for the under, when quoted.
    #[serde(default)]
    pub under_odds: Option<i32>,
    pub bookmaker: String,
    /// Matchup label, e.g. "TOR @ BOS".
    #[serde(default)]
    pub game: Option<String>,
    /// Scheduled start of the associated game.
    #[serde(default)]
    pub game_time: Option<DateTime<Utc>>,
    /// True for alternate-market quotes.
    #[serde(default)]
    pub is_alternate: bool,
}

impl CandidateLine {
    /// Minimal line for tests and fixtures.
    pub fn simple(line: f64, bookmaker: &str) -> Self {
        CandidateLine {
            line,
            over_odds: None,
            under_odds: None,
            bookmaker: bookmaker.to_string(),
            game: None,
            game_time: None,
            is_alternate: false,
        }
    }
}
