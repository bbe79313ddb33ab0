// Hit-rate, trend, and confidence analysis of a game log against a
// sportsbook line.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::StatCategory;
use crate::engine::clamp_score;
use crate::model::RecentFirstLog;

/// Classification of a single game against the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Hit,
    Push,
    Miss,
}

/// One annotated game for display alongside the aggregate numbers.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub date: NaiveDate,
    pub opponent: String,
    pub value: f64,
    pub outcome: GameOutcome,
}

/// Full hit-rate analysis for one (log, line) pair.
#[derive(Debug, Clone, Serialize)]
pub struct HitRateResult {
    pub hits: usize,
    pub pushes: usize,
    pub misses: usize,
    /// Season-long hit rate, percent.
    pub hit_rate: f64,
    pub last10_rate: f64,
    pub last5_rate: f64,
    pub last3_rate: f64,
    /// Season average stat value.
    pub avg_value: f64,
    /// `avg_value - line`.
    pub expected_margin: f64,
    /// Expected margin as a percentage of the line; 0 when the line is 0.
    pub expected_margin_pct: f64,
    /// Recency-weighted over/under signal, 0-100, neutral 50.
    pub trend_score: f64,
    /// Blended sample/consistency/rate/trend confidence, 0-100.
    pub confidence_score: f64,
    /// Most recent games annotated with outcomes, capped for display.
    pub game_results: Vec<GameResult>,
}

/// Games kept in the annotated result list. Statistics always cover the
/// full log; only the display list is capped.
pub const GAME_RESULTS_CAP: usize = 15;

/// Trend window and its minimum sample.
const TREND_WINDOW: usize = 10;
const MIN_TREND_SAMPLE: usize = 5;
const NEUTRAL_TREND: f64 = 50.0;

/// Confidence blend weights: sample size, season/recent agreement,
/// raw season hit rate, trend score.
const CONFIDENCE_SAMPLE_WEIGHT: f64 = 0.4;
const CONFIDENCE_AGREEMENT_WEIGHT: f64 = 0.3;
const CONFIDENCE_RATE_WEIGHT: f64 = 0.2;
const CONFIDENCE_TREND_WEIGHT: f64 = 0.1;
/// Sample-size factor saturates at this many games.
const CONFIDENCE_SATURATION_GAMES: f64 = 20.0;
/// Multiplier applied by trend direction.
const TREND_BOOST: f64 = 1.1;
const TREND_DRAG: f64 = 0.9;

/// Analyze a log against a line for a stat category.
///
/// Per game: value above the line is a hit, exactly on it a push,
/// otherwise a miss. Pushes count in every window's denominator but
/// never as hits. An empty log produces all-zero rates and a zero
/// confidence score. Goalie callers are expected to pre-filter the log
/// to games actually started.
pub fn analyze(log: &RecentFirstLog, line: f64, category: StatCategory) -> HitRateResult {
    let games = log.season();
    let total_games = games.len();

    let mut hits = 0;
    let mut pushes = 0;
    let mut misses = 0;
    let mut total_stat = 0.0;
    let mut window_hits = [0usize; 3]; // last 10 / 5 / 3

    let mut game_results = Vec::with_capacity(total_games.min(GAME_RESULTS_CAP));
    let mut margins = Vec::with_capacity(TREND_WINDOW);

    for (idx, game) in games.iter().enumerate() {
        let value = category.value_in(game);
        total_stat += value;

        let outcome = if value > line {
            hits += 1;
            if idx < 10 {
                window_hits[0] += 1;
            }
            if idx < 5 {
                window_hits[1] += 1;
            }
            if idx < 3 {
                window_hits[2] += 1;
            }
            GameOutcome::Hit
        } else if value == line {
            pushes += 1;
            GameOutcome::Push
        } else {
            misses += 1;
            GameOutcome::Miss
        };

        if idx < TREND_WINDOW {
            margins.push(value - line);
        }
        if game_results.len() < GAME_RESULTS_CAP {
            game_results.push(GameResult {
                date: game.date,
                opponent: game.opponent.clone(),
                value,
                outcome,
            });
        }
    }

    let rate = |h: usize, n: usize| if n > 0 { h as f64 / n as f64 * 100.0 } else { 0.0 };
    let hit_rate = rate(hits, total_games);
    let last10_rate = rate(window_hits[0], total_games.min(10));
    let last5_rate = rate(window_hits[1], total_games.min(5));
    let last3_rate = rate(window_hits[2], total_games.min(3));

    let trend_score = trend_score(&margins, line);
    let confidence_score = confidence_score(hit_rate, last10_rate, total_games, trend_score);

    let avg_value = if total_games > 0 {
        total_stat / total_games as f64
    } else {
        0.0
    };
    let expected_margin = avg_value - line;
    let expected_margin_pct = if line > 0.0 {
        expected_margin / line * 100.0
    } else {
        0.0
    };

    HitRateResult {
        hits,
        pushes,
        misses,
        hit_rate,
        last10_rate,
        last5_rate,
        last3_rate,
        avg_value,
        expected_margin,
        expected_margin_pct,
        trend_score,
        confidence_score,
        game_results,
    }
}

/// Recency-weighted margin trend over the last games.
///
/// Game at recency index `i` in a window of size `W` gets weight
/// `W - i`. Each game contributes a margin score of `(margin/line)*100`
/// capped to [-100, 100]; a line of 0 contributes 0 (degenerate-input
/// policy). The weighted mean shifts a neutral 50, clamped to [0, 100].
/// Fewer than [`MIN_TREND_SAMPLE`] games returns the neutral 50.
fn trend_score(margins: &[f64], line: f64) -> f64 {
    if margins.len() < MIN_TREND_SAMPLE {
        return NEUTRAL_TREND;
    }

    let window = margins.len();
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (idx, &margin) in margins.iter().enumerate() {
        let weight = (window - idx) as f64;
        let margin_score = if line > 0.0 {
            (margin / line * 100.0).clamp(-100.0, 100.0)
        } else {
            0.0
        };
        weighted_sum += margin_score * weight;
        total_weight += weight;
    }

    clamp_score(NEUTRAL_TREND + weighted_sum / total_weight)
}

/// Blend sample size, season/recent agreement, season hit rate, and
/// trend into a 0-100 confidence score.
///
/// A positive trend direction (trend above 50) boosts the blend by
/// 1.1x, a negative one drags it by 0.9x. Zero games is defined as 0.
fn confidence_score(hit_rate: f64, last10_rate: f64, total_games: usize, trend: f64) -> f64 {
    if total_games == 0 {
        return 0.0;
    }

    let sample_size_score = (total_games as f64 / CONFIDENCE_SATURATION_GAMES * 100.0).min(100.0);
    let agreement_score = 100.0 - (hit_rate - last10_rate).abs();
    let direction = if trend > NEUTRAL_TREND {
        TREND_BOOST
    } else {
        TREND_DRAG
    };

    let blended = (sample_size_score * CONFIDENCE_SAMPLE_WEIGHT
        + agreement_score * CONFIDENCE_AGREEMENT_WEIGHT
        + hit_rate * CONFIDENCE_RATE_WEIGHT
        + trend * CONFIDENCE_TREND_WEIGHT)
        * direction;

    clamp_score(blended)
}
