// Game-log aggregation into recency windows.

use crate::category::StatCategory;
use crate::model::{GameRecord, RecentFirstLog};

/// Sum, count, and count-weighted average over one window.
///
/// The average is defined as 0 when the window is empty, so callers
/// never divide by zero downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowStat {
    pub sum: f64,
    pub count: usize,
    pub avg: f64,
}

impl WindowStat {
    fn from_values(games: &[GameRecord], stat_of: &impl Fn(&GameRecord) -> f64) -> Self {
        let count = games.len();
        let sum: f64 = games.iter().map(stat_of).sum();
        let avg = if count > 0 { sum / count as f64 } else { 0.0 };
        WindowStat { sum, count, avg }
    }
}

/// Windowed sums and averages for one player's log and one stat.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowedStats {
    pub season: WindowStat,
    pub last10: WindowStat,
    pub last5: WindowStat,
    pub last3: WindowStat,
}

/// Aggregate a log with an arbitrary stat extractor.
///
/// Windows shorter than their nominal size (young season, few starts)
/// truncate; a window over `min(N, games)` games divides by that
/// actual count. An empty log yields all zeros.
pub fn aggregate_with(
    log: &RecentFirstLog,
    stat_of: impl Fn(&GameRecord) -> f64,
) -> WindowedStats {
    WindowedStats {
        season: WindowStat::from_values(log.season(), &stat_of),
        last10: WindowStat::from_values(log.window(10), &stat_of),
        last5: WindowStat::from_values(log.window(5), &stat_of),
        last3: WindowStat::from_values(log.window(3), &stat_of),
    }
}

/// Aggregate a log for a stat category.
pub fn aggregate(log: &RecentFirstLog, category: StatCategory) -> WindowedStats {
    aggregate_with(log, |g| category.value_in(g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GoalieLine, SkaterLine};
    use chrono::NaiveDate;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Build a skater log from newest-first point totals.
    fn points_log(points: &[f64]) -> RecentFirstLog {
        let games = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                GameRecord::skater(
                    NaiveDate::from_ymd_opt(2025, 1, (60 - i) as u32 % 28 + 1).unwrap(),
                    "BOS",
                    SkaterLine {
                        points: p,
                        ..SkaterLine::default()
                    },
                )
            })
            .collect();
        RecentFirstLog::new(games)
    }

    #[test]
    fn empty_log_is_all_zeros() {
        let stats = aggregate(&RecentFirstLog::default(), StatCategory::Points);
        assert_eq!(stats.season, WindowStat::default());
        assert_eq!(stats.last3, WindowStat::default());
        assert_eq!(stats.season.avg, 0.0);
    }

    #[test]
    fn windows_use_front_of_log() {
        // Newest-first: last 3 are [2, 0, 4].
        let log = points_log(&[2.0, 0.0, 4.0, 1.0, 1.0, 3.0]);
        let stats = aggregate(&log, StatCategory::Points);

        assert!(approx_eq(stats.last3.sum, 6.0, 1e-10));
        assert!(approx_eq(stats.last3.avg, 2.0, 1e-10));
        assert_eq!(stats.last3.count, 3);

        assert!(approx_eq(stats.last5.sum, 8.0, 1e-10));
        assert!(approx_eq(stats.last5.avg, 1.6, 1e-10));

        assert!(approx_eq(stats.season.sum, 11.0, 1e-10));
        assert_eq!(stats.season.count, 6);
    }

    #[test]
    fn short_log_truncates_and_divides_by_actual_count() {
        let log = points_log(&[3.0, 1.0]);
        let stats = aggregate(&log, StatCategory::Points);

        // A nominal last-10 window over 2 games averages over 2.
        assert_eq!(stats.last10.count, 2);
        assert!(approx_eq(stats.last10.avg, 2.0, 1e-10));
        // Window >= log length equals the season window.
        assert_eq!(stats.last10, stats.season);
        assert_eq!(stats.last5, stats.season);
    }

    #[test]
    fn goalie_saves_aggregation_tolerates_missing_fields() {
        let games = vec![
            GameRecord::goalie(
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
                "TOR",
                GoalieLine {
                    shots_against: 30.0,
                    goals_against: 2.0,
                    decision: None,
                },
            ),
            // Feed omitted both fields for this game.
            GameRecord::goalie(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                "MTL",
                GoalieLine::default(),
            ),
        ];
        let stats = aggregate(&RecentFirstLog::new(games), StatCategory::Saves);
        assert!(approx_eq(stats.season.sum, 28.0, 1e-10));
        assert!(approx_eq(stats.season.avg, 14.0, 1e-10));
    }
}
