// Ordered per-player game log.
//
// The single ordering invariant the whole engine relies on lives here:
// index 0 is the most recent game. Windowed slices always take the
// first N elements; shorter logs truncate rather than pad.

use serde::{Deserialize, Serialize};

use crate::model::game::GameRecord;

/// A player's game log, newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFirstLog(Vec<GameRecord>);

impl RecentFirstLog {
    /// Wrap an already newest-first sequence of games.
    pub fn new(games: Vec<GameRecord>) -> Self {
        RecentFirstLog(games)
    }

    /// All games of the season, newest-first.
    pub fn season(&self) -> &[GameRecord] {
        &self.0
    }

    /// The most recent `n` games (fewer if the log is shorter).
    pub fn window(&self, n: usize) -> &[GameRecord] {
        &self.0[..n.min(self.0.len())]
    }

    /// Games played against one opponent, newest-first.
    pub fn versus<'a>(&'a self, opponent: &str) -> Vec<&'a GameRecord> {
        self.0.iter().filter(|g| g.opponent == opponent).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<GameRecord>> for RecentFirstLog {
    fn from(games: Vec<GameRecord>) -> Self {
        RecentFirstLog::new(games)
    }
}
