// Composite ranking: blends windowed averages, trend, momentum, and
// consistency (plus workload/quality for goalies) into one sortable
// score per player.

use serde::Serialize;
use tracing::debug;

use crate::category::{StatCategory, WeightFamily};
use crate::engine::consistency::consistency_for;
use crate::engine::matchup::{matchup_score, MatchupScore};
use crate::engine::window::{aggregate, WindowedStats};
use crate::model::{RecentFirstLog, StatLine, TeamAggregateStat};

// ---------------------------------------------------------------------------
// Weight vectors
// ---------------------------------------------------------------------------

/// Coefficients of the composite score formula.
#[derive(Debug, Clone, Copy)]
pub struct CompositeWeights {
    pub last10_avg: f64,
    pub last5_avg: f64,
    pub season_avg: f64,
    pub quality: f64,
    pub workload: f64,
    pub trend: f64,
    pub consistency: f64,
    pub momentum: f64,
}

/// Skater-family composite:
/// `0.35*l10 + 0.25*l5 + 0.15*season + 0.15*trend + 0.05*consistency + 0.05*momentum`.
/// Tuned coefficients; preserved verbatim for output parity.
pub const SKATER_WEIGHTS: CompositeWeights = CompositeWeights {
    last10_avg: 0.35,
    last5_avg: 0.25,
    season_avg: 0.15,
    quality: 0.0,
    workload: 0.0,
    trend: 0.15,
    consistency: 0.05,
    momentum: 0.05,
};

/// Goalie-family composite:
/// `0.30*l10 + 0.25*l5 + 0.15*season + 0.10*quality + 0.10*workload + 0.05*trend + 0.05*consistency`.
pub const GOALIE_WEIGHTS: CompositeWeights = CompositeWeights {
    last10_avg: 0.30,
    last5_avg: 0.25,
    season_avg: 0.15,
    quality: 0.10,
    workload: 0.10,
    trend: 0.05,
    consistency: 0.05,
    momentum: 0.0,
};

impl WeightFamily {
    pub fn weights(&self) -> &'static CompositeWeights {
        match self {
            WeightFamily::Skater => &SKATER_WEIGHTS,
            WeightFamily::Goalie => &GOALIE_WEIGHTS,
        }
    }
}

/// Epsilon added to ratio denominators so zero-average players score
/// finite trend/momentum ratios.
const RATIO_EPSILON: f64 = 0.01;
/// Saves-per-game anchor representing a heavy-workload start; the
/// workload sub-score is the season average normalized against it.
const WORKLOAD_ANCHOR_SAVES: f64 = 35.0;
/// A goalie game with save fraction above this counts as a quality start.
const QUALITY_START_SV_PCT: f64 = 0.915;
/// A goalie game with at least this many shots against is high-volume.
const HIGH_VOLUME_SHOTS: f64 = 30.0;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Goalie-only sub-scores and rate supplements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalieScores {
    /// Season save fraction scaled to 0-100.
    pub quality_score: f64,
    /// Season saves per game against the heavy-workload anchor.
    pub workload_score: f64,
    pub season_save_pct: f64,
    /// Percent of games with save fraction above .915.
    pub quality_start_pct: f64,
    /// Percent of games with 30+ shots against.
    pub high_volume_pct: f64,
}

/// Scores for one player; pure output, never stored by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub games_played: usize,
    pub season_avg: f64,
    pub last10_avg: f64,
    pub last5_avg: f64,
    pub last3_avg: f64,
    pub composite_score: f64,
    pub trend_score: f64,
    pub consistency_score: f64,
    pub momentum_score: f64,
    /// Present only for goalie-family categories.
    pub goalie: Option<GoalieScores>,
    /// Absent when no team aggregate was found for the next opponent.
    pub matchup: Option<MatchupScore>,
}

/// A scored player in ranked output order.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub position: Option<String>,
    pub scores: ScoreResult,
}

/// Sort key for ranked output; always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Last10Avg,
    Last5Avg,
    SeasonAvg,
    Composite,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l10" => Ok(SortKey::Last10Avg),
            "l5" => Ok(SortKey::Last5Avg),
            "season" => Ok(SortKey::SeasonAvg),
            "composite" => Ok(SortKey::Composite),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// One player's input to a ranking pass. Opponent resolution (name to
/// team aggregate) happens on the provider side, so the entry carries
/// the resolved aggregate or nothing.
#[derive(Debug)]
pub struct RankingEntry<'a> {
    pub player_id: i64,
    pub name: &'a str,
    pub team: &'a str,
    pub position: Option<&'a str>,
    pub log: &'a RecentFirstLog,
    pub next_opponent: Option<&'a TeamAggregateStat>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score one log for one category.
///
/// Derives the trend ratio (last-5 vs season), momentum ratio (last-3
/// vs last-10), consistency, goalie supplements when applicable, and
/// the weighted composite.
pub fn score_log(
    log: &RecentFirstLog,
    category: StatCategory,
    next_opponent: Option<&TeamAggregateStat>,
) -> ScoreResult {
    let windows = aggregate(log, category);
    let trend_score = (windows.last5.avg / (windows.season.avg + RATIO_EPSILON)) * 100.0;
    let momentum_score = (windows.last3.avg / (windows.last10.avg + RATIO_EPSILON)) * 100.0;
    let consistency_score = consistency_for(log, category);

    let goalie = match category.family() {
        WeightFamily::Goalie => Some(goalie_scores(log, &windows)),
        WeightFamily::Skater => None,
    };

    let weights = category.family().weights();
    let composite_score = windows.last10.avg * weights.last10_avg
        + windows.last5.avg * weights.last5_avg
        + windows.season.avg * weights.season_avg
        + goalie.map_or(0.0, |g| g.quality_score) * weights.quality
        + goalie.map_or(0.0, |g| g.workload_score) * weights.workload
        + trend_score * weights.trend
        + consistency_score * weights.consistency
        + momentum_score * weights.momentum;

    ScoreResult {
        games_played: log.len(),
        season_avg: windows.season.avg,
        last10_avg: windows.last10.avg,
        last5_avg: windows.last5.avg,
        last3_avg: windows.last3.avg,
        composite_score,
        trend_score,
        consistency_score,
        momentum_score,
        goalie,
        matchup: next_opponent.map(|team| matchup_score(team, category)),
    }
}

fn goalie_scores(log: &RecentFirstLog, windows: &WindowedStats) -> GoalieScores {
    let mut total_shots = 0.0;
    let mut quality_starts = 0usize;
    let mut high_volume = 0usize;

    for game in log.season() {
        if let StatLine::Goalie(g) = &game.stats {
            total_shots += g.shots_against;
            let saves = g.shots_against - g.goals_against;
            let sv_pct = if g.shots_against > 0.0 {
                saves / g.shots_against
            } else {
                0.0
            };
            if sv_pct > QUALITY_START_SV_PCT {
                quality_starts += 1;
            }
            if g.shots_against >= HIGH_VOLUME_SHOTS {
                high_volume += 1;
            }
        }
    }

    let games = log.len();
    let season_save_pct = if total_shots > 0.0 {
        windows.season.sum / total_shots
    } else {
        0.0
    };
    let pct_of_games = |count: usize| {
        if games > 0 {
            count as f64 / games as f64 * 100.0
        } else {
            0.0
        }
    };

    GoalieScores {
        quality_score: season_save_pct * 100.0,
        workload_score: windows.season.avg / WORKLOAD_ANCHOR_SAVES * 100.0,
        season_save_pct,
        quality_start_pct: pct_of_games(quality_starts),
        high_volume_pct: pct_of_games(high_volume),
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Score and rank a set of players for one category.
///
/// Players with fewer than `min_games` are excluded entirely rather
/// than scored with defaults: absence is the insufficient-data signal.
/// Sort is descending by the chosen key; ties keep input order (stable
/// sort).
pub fn rank_players(
    entries: &[RankingEntry<'_>],
    category: StatCategory,
    sort_by: SortKey,
    min_games: usize,
) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = entries
        .iter()
        .filter(|entry| entry.log.len() >= min_games.max(1))
        .map(|entry| RankedPlayer {
            player_id: entry.player_id,
            name: entry.name.to_string(),
            team: entry.team.to_string(),
            position: entry.position.map(str::to_string),
            scores: score_log(entry.log, category, entry.next_opponent),
        })
        .collect();

    debug!(
        category = %category,
        scored = ranked.len(),
        skipped = entries.len() - ranked.len(),
        "ranking pass complete"
    );

    let key = |p: &RankedPlayer| match sort_by {
        SortKey::Last10Avg => p.scores.last10_avg,
        SortKey::Last5Avg => p.scores.last5_avg,
        SortKey::SeasonAvg => p.scores.season_avg,
        SortKey::Composite => p.scores.composite_score,
    };
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
