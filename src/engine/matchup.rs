// Matchup difficulty scoring from league-wide team ranks.

use serde::Serialize;

use crate::category::{MatchupDimension, StatCategory};
use crate::model::TeamAggregateStat;

/// Number of teams in the league; rank runs 1..=LEAGUE_TEAMS.
const LEAGUE_TEAMS: f64 = 32.0;

/// How favorable an upcoming opponent is, 0-100 (higher = easier).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchupScore {
    pub score: f64,
    /// The rank the score was derived from.
    pub rank: u32,
    /// The opponent's per-game rate in the scored dimension.
    pub per_game_rate: f64,
    pub dimension: MatchupDimension,
}

/// Score an opponent for a stat category.
///
/// The category's [`MatchupDimension`] picks which rank to read: skater
/// props use the opponent's volume-conceded rank, goalie saves use the
/// opponent's volume-generated rank. Rank 1 ("most") maps to ~96.9,
/// rank 32 to 0. Resolving an opponent name to a
/// [`TeamAggregateStat`] is the data provider's job; callers with no
/// match simply skip the call and carry `None`.
pub fn matchup_score(opponent: &TeamAggregateStat, category: StatCategory) -> MatchupScore {
    let dimension = category.matchup_dimension();
    let (rank, per_game_rate) = match dimension {
        MatchupDimension::DefenseAllowed => {
            (opponent.defensive_rank, opponent.volume_against_per_game)
        }
        MatchupDimension::OffenseGenerated => {
            (opponent.offensive_rank, opponent.volume_for_per_game)
        }
    };

    let score = ((LEAGUE_TEAMS - rank as f64) / LEAGUE_TEAMS) * 100.0;

    MatchupScore {
        score,
        rank,
        per_game_rate,
        dimension,
    }
}
