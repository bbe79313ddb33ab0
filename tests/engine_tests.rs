// Integration tests for the scoring engine.
//
// These tests exercise the full pipeline through the library crate's
// public API: game logs in, windowed averages, consistency, composite
// rankings, hit rates, line selection, and parlay math out.

use chrono::NaiveDate;

use proptrack::category::StatCategory;
use proptrack::engine::consistency::consistency_score;
use proptrack::engine::hit_rate;
use proptrack::engine::h2h;
use proptrack::engine::lines::select_main_line;
use proptrack::engine::matchup::matchup_score;
use proptrack::engine::parlay;
use proptrack::engine::ranking::{rank_players, score_log, RankingEntry, SortKey};
use proptrack::engine::window::aggregate;
use proptrack::error::EngineError;
use proptrack::model::{
    CandidateLine, GameRecord, RecentFirstLog, SkaterLine, TeamAggregateStat,
};

// ===========================================================================
// Test helpers
// ===========================================================================

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Build a most-recent-first points log from explicit values.
fn points_log(points: &[f64]) -> RecentFirstLog {
    let games = points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            GameRecord::skater(
                NaiveDate::from_ymd_opt(2025, 2, 1)
                    .unwrap()
                    .pred_opt()
                    .unwrap()
                    .checked_sub_days(chrono::Days::new(i as u64))
                    .unwrap(),
                if i % 2 == 0 { "BOS" } else { "MTL" },
                SkaterLine {
                    points: p,
                    ..SkaterLine::default()
                },
            )
        })
        .collect();
    RecentFirstLog::new(games)
}

fn team_with_ranks(defensive_rank: u32, offensive_rank: u32) -> TeamAggregateStat {
    TeamAggregateStat {
        team_name: "Toronto Maple Leafs".to_string(),
        abbrev: "TOR".to_string(),
        games_played: 40,
        volume_for_per_game: 32.0,
        volume_against_per_game: 31.0,
        goals_for_per_game: 3.4,
        goals_against_per_game: 3.1,
        offensive_rank,
        defensive_rank,
    }
}

// ===========================================================================
// Windowing and averages
// ===========================================================================

#[test]
fn twelve_game_log_window_averages() {
    // Last 5 values [2,3,1,4,2] most recent first; season sum 24 over 12.
    let log = points_log(&[
        2.0, 3.0, 1.0, 4.0, 2.0, 1.0, 3.0, 2.0, 2.0, 1.0, 2.0, 1.0,
    ]);
    assert_eq!(log.len(), 12);

    let windows = aggregate(&log, StatCategory::Points);
    assert!(approx_eq(windows.season.avg, 2.0, 1e-10));
    assert!(approx_eq(windows.last5.avg, 2.4, 1e-10));

    // Line 1.5: last-5 hits are 2, 3, 4, 2; the single 1 misses.
    let analysis = hit_rate::analyze(&log, 1.5, StatCategory::Points);
    assert!(approx_eq(analysis.last5_rate, 80.0, 1e-10));
}

#[test]
fn short_log_windows_collapse_to_season() {
    let log = points_log(&[3.0, 1.0, 2.0]);
    let windows = aggregate(&log, StatCategory::Points);
    assert!(approx_eq(windows.last10.avg, windows.season.avg, 1e-10));
    assert!(approx_eq(windows.last5.avg, windows.season.avg, 1e-10));
}

// ===========================================================================
// Consistency
// ===========================================================================

#[test]
fn constant_sample_scores_maximum_consistency() {
    assert!(approx_eq(
        consistency_score(&[5.0, 5.0, 5.0, 5.0, 5.0], 50.0),
        100.0,
        1e-10
    ));
}

#[test]
fn two_games_score_neutral_consistency() {
    assert!(approx_eq(consistency_score(&[0.0, 9.0], 50.0), 50.0, 1e-10));
    assert!(approx_eq(consistency_score(&[5.0, 5.0], 50.0), 50.0, 1e-10));
}

#[test]
fn consistency_always_within_bounds() {
    let samples: &[&[f64]] = &[
        &[0.0, 10.0, 0.0, 10.0, 0.0],
        &[0.1, 0.2, 0.1, 0.3],
        &[100.0, 1.0, 50.0, 2.0],
        &[0.0, 0.0, 0.0],
    ];
    for values in samples {
        let score = consistency_score(values, 50.0);
        assert!((0.0..=100.0).contains(&score), "out of bounds: {score}");
    }
}

// ===========================================================================
// Matchup
// ===========================================================================

#[test]
fn matchup_rank_extremes() {
    let best = matchup_score(&team_with_ranks(1, 16), StatCategory::Shots);
    assert!(approx_eq(best.score, 96.875, 1e-10));

    let worst = matchup_score(&team_with_ranks(32, 16), StatCategory::Shots);
    assert!(approx_eq(worst.score, 0.0, 1e-10));
}

#[test]
fn matchup_score_strictly_decreases_with_rank() {
    let mut previous = f64::INFINITY;
    for rank in 1..=32 {
        let score = matchup_score(&team_with_ranks(rank, 16), StatCategory::Shots).score;
        assert!(score < previous, "rank {rank} did not decrease");
        previous = score;
    }
}

// ===========================================================================
// Hit rates and confidence
// ===========================================================================

#[test]
fn hit_push_miss_partition_is_exact() {
    let log = points_log(&[2.0, 1.5, 1.0, 3.0, 1.5, 0.0, 2.0, 4.0]);
    let analysis = hit_rate::analyze(&log, 1.5, StatCategory::Points);
    assert_eq!(
        analysis.hits + analysis.pushes + analysis.misses,
        log.len()
    );
    assert_eq!(analysis.pushes, 2);
}

#[test]
fn confidence_is_zero_with_no_games() {
    let log = RecentFirstLog::new(Vec::new());
    let analysis = hit_rate::analyze(&log, 1.5, StatCategory::Points);
    assert_eq!(analysis.confidence_score, 0.0);
    assert_eq!(analysis.hit_rate, 0.0);
}

#[test]
fn confidence_stays_bounded() {
    let logs = [
        points_log(&[5.0; 25]),
        points_log(&[0.0; 25]),
        points_log(&[3.0, 0.0, 3.0, 0.0, 3.0, 0.0, 3.0]),
    ];
    for log in &logs {
        let analysis = hit_rate::analyze(log, 1.5, StatCategory::Points);
        assert!((0.0..=100.0).contains(&analysis.confidence_score));
    }
}

// ===========================================================================
// Ranking
// ===========================================================================

#[test]
fn composite_ranking_end_to_end() {
    let hot = points_log(&[4.0, 3.0, 4.0, 3.0, 4.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let cold = points_log(&[1.0, 1.0, 1.0, 1.0, 1.0, 4.0, 3.0, 4.0, 3.0, 4.0]);
    let team = team_with_ranks(3, 8);

    let entries = vec![
        RankingEntry {
            player_id: 1,
            name: "Cold Streak",
            team: "MTL",
            position: Some("C"),
            log: &cold,
            next_opponent: None,
        },
        RankingEntry {
            player_id: 2,
            name: "Hot Streak",
            team: "BOS",
            position: Some("W"),
            log: &hot,
            next_opponent: Some(&team),
        },
    ];

    // Same season average; the recency-weighted composite favors the
    // player trending up.
    let ranked = rank_players(&entries, StatCategory::Points, SortKey::Composite, 5);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Hot Streak");
    assert!(ranked[0].scores.composite_score > ranked[1].scores.composite_score);
    assert!(ranked[0].scores.matchup.is_some());
    assert!(ranked[1].scores.matchup.is_none());
}

#[test]
fn score_log_never_produces_nan() {
    let empty = RecentFirstLog::new(Vec::new());
    let zeros = points_log(&[0.0; 12]);
    for log in [&empty, &zeros] {
        let result = score_log(log, StatCategory::Points, None);
        assert!(result.composite_score.is_finite());
        assert!(result.trend_score.is_finite());
        assert!(result.momentum_score.is_finite());
        assert!(result.consistency_score.is_finite());
    }
}

// ===========================================================================
// Head-to-head
// ===========================================================================

#[test]
fn h2h_filters_by_opponent() {
    // points_log alternates BOS (even index) and MTL (odd index).
    let log = points_log(&[2.0, 0.0, 3.0, 1.0, 2.0, 0.0]);
    let splits = h2h::versus_opponent(&log, "MTL", StatCategory::Points, 1.5);
    assert_eq!(splits.games_played, 3);
    // MTL games carry 0, 1, 0 points: no overs against 1.5.
    assert!(approx_eq(splits.hit_rate, 0.0, 1e-10));

    let bos = h2h::versus_opponent(&log, "BOS", StatCategory::Points, 1.5);
    assert_eq!(bos.games_played, 3);
    assert!(approx_eq(bos.hit_rate, 100.0, 1e-10));
}

// ===========================================================================
// Line selection
// ===========================================================================

#[test]
fn priority_book_beats_raw_frequency() {
    let lines = vec![
        CandidateLine::simple(2.5, "BookA"),
        CandidateLine::simple(3.5, "DraftKings"),
        CandidateLine::simple(2.5, "BookC"),
    ];
    let priority: Vec<String> = ["DraftKings", "FanDuel"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let selected = select_main_line(&lines, &priority).unwrap();
    assert_eq!(selected.line, 3.5);
    assert_eq!(selected.bookmaker, "DraftKings");
}

#[test]
fn selection_is_stable_under_reordering() {
    let mut lines = vec![
        CandidateLine::simple(2.5, "BookA"),
        CandidateLine::simple(3.0, "BookB"),
        CandidateLine::simple(3.0, "BookC"),
        CandidateLine::simple(3.5, "BookD"),
    ];
    let priority: Vec<String> = Vec::new();

    let first = select_main_line(&lines, &priority).unwrap().line;
    lines.reverse();
    let second = select_main_line(&lines, &priority).unwrap().line;
    assert_eq!(first, second);
}

#[test]
fn empty_line_list_is_a_caller_error() {
    let priority: Vec<String> = Vec::new();
    assert_eq!(
        select_main_line(&[], &priority).unwrap_err(),
        EngineError::EmptyLineList
    );
}

// ===========================================================================
// Parlay math
// ===========================================================================

#[test]
fn two_leg_parlay_combined_odds_and_payout() {
    let combined = parlay::parlay_odds(&[150, -110]).unwrap();
    assert_eq!(combined, 377);
    assert!(approx_eq(parlay::payout(combined, 100.0), 477.27, 0.5));
}

#[test]
fn american_decimal_round_trip() {
    for odds in [-250, -110, -105, 100, 120, 150, 377, 900] {
        let back = parlay::decimal_to_american(parlay::american_to_decimal(odds));
        assert!((back - odds).abs() <= 1, "{odds} -> {back}");
    }
}

#[test]
fn empty_parlay_is_a_caller_error() {
    assert_eq!(parlay::parlay_odds(&[]).unwrap_err(), EngineError::EmptyParlay);
}
