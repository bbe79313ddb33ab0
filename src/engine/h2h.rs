// Head-to-head splits: a player's history against one opponent.

use serde::Serialize;

use crate::category::StatCategory;
use crate::model::{Decision, GameRecord, RecentFirstLog, StatLine};

/// Aggregates over the head-to-head sample, shaped per sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum H2hStats {
    Skater {
        avg_goals: f64,
        avg_assists: f64,
        avg_points: f64,
        avg_shots: f64,
        total_goals: f64,
        total_assists: f64,
        total_points: f64,
        total_shots: f64,
    },
    Goalie {
        avg_saves: f64,
        /// Season-style save fraction over the sample (0 when no shots).
        save_pct: f64,
        wins: u32,
        losses: u32,
        ot_losses: u32,
        total_shots_against: f64,
        total_goals_against: f64,
    },
}

/// Head-to-head result for one (player, opponent) pair.
#[derive(Debug, Clone, Serialize)]
pub struct H2hResult {
    pub games_played: usize,
    /// Absent when the player has never faced the opponent.
    pub stats: Option<H2hStats>,
    /// Hit rate of `category` against `line` over the sample, percent.
    /// 0 when no line was provided (line <= 0) or no games exist.
    pub hit_rate: f64,
}

/// Compute head-to-head splits against one opponent abbreviation.
///
/// Mapping a full team name to its abbreviation is the data provider's
/// concern; this takes the abbreviation the log records carry.
pub fn versus_opponent(
    log: &RecentFirstLog,
    opponent: &str,
    category: StatCategory,
    line: f64,
) -> H2hResult {
    let games = log.versus(opponent);
    if games.is_empty() {
        return H2hResult {
            games_played: 0,
            stats: None,
            hit_rate: 0.0,
        };
    }

    let hit_rate = if line > 0.0 {
        let hits = games
            .iter()
            .filter(|g| category.value_in(g) > line)
            .count();
        hits as f64 / games.len() as f64 * 100.0
    } else {
        0.0
    };

    let stats = match games[0].stats {
        StatLine::Goalie(_) => goalie_stats(&games),
        _ => skater_stats(&games),
    };

    H2hResult {
        games_played: games.len(),
        stats: Some(stats),
        hit_rate,
    }
}

fn skater_stats(games: &[&GameRecord]) -> H2hStats {
    let n = games.len() as f64;
    let mut total_goals = 0.0;
    let mut total_assists = 0.0;
    let mut total_points = 0.0;
    let mut total_shots = 0.0;

    for game in games {
        if let StatLine::Skater(s) = &game.stats {
            total_goals += s.goals;
            total_assists += s.assists;
            total_points += s.points;
            total_shots += s.shots;
        }
    }

    H2hStats::Skater {
        avg_goals: total_goals / n,
        avg_assists: total_assists / n,
        avg_points: total_points / n,
        avg_shots: total_shots / n,
        total_goals,
        total_assists,
        total_points,
        total_shots,
    }
}

fn goalie_stats(games: &[&GameRecord]) -> H2hStats {
    let n = games.len() as f64;
    let mut total_shots_against = 0.0;
    let mut total_goals_against = 0.0;
    let mut wins = 0;
    let mut losses = 0;
    let mut ot_losses = 0;

    for game in games {
        if let StatLine::Goalie(g) = &game.stats {
            total_shots_against += g.shots_against;
            total_goals_against += g.goals_against;
            match g.decision {
                Some(Decision::W) => wins += 1,
                Some(Decision::L) => losses += 1,
                Some(Decision::O) => ot_losses += 1,
                None => {}
            }
        }
    }

    let total_saves = total_shots_against - total_goals_against;
    let save_pct = if total_shots_against > 0.0 {
        total_saves / total_shots_against
    } else {
        0.0
    };

    H2hStats::Goalie {
        avg_saves: total_saves / n,
        save_pct,
        wins,
        losses,
        ot_losses,
        total_shots_against,
        total_goals_against,
    }
}
