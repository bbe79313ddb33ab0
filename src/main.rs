// PropTrack entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays clean for output)
// 2. Parse CLI arguments
// 3. Load config and snapshot
// 4. Run the requested ranking pass, print results

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use proptrack::category::StatCategory;
use proptrack::config::{self, Config};
use proptrack::engine::hit_rate;
use proptrack::engine::h2h;
use proptrack::engine::lines::select_main_line;
use proptrack::engine::ranking::{rank_players, RankedPlayer, RankingEntry, SortKey};
use proptrack::model::CandidateLine;
use proptrack::snapshot::{self, Snapshot};

struct CliArgs {
    config_path: PathBuf,
    category: StatCategory,
    sort_by: SortKey,
    top: usize,
    opponent: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = parse_args().context("failed to parse command line arguments")?;
    info!(category = %args.category, "proptrack starting up");

    let config = match config::load_config(&args.config_path) {
        Ok(config) => config,
        Err(config::ConfigError::FileNotFound { ref path }) => {
            warn!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        }
        Err(e) => return Err(anyhow::Error::new(e).context("failed to load configuration")),
    };

    let snap = snapshot::load_snapshot(&config.snapshot_path)
        .context("failed to load snapshot")?;

    let min_games = match args.category {
        StatCategory::Saves => config.min_games_goalie,
        _ => config.min_games_skater,
    };

    // Build one ranking entry per player with a game log in the snapshot.
    let entries: Vec<RankingEntry> = snap
        .players
        .iter()
        .filter_map(|p| {
            let log = snap.game_logs.get(&p.player_id)?;
            Some(RankingEntry {
                player_id: p.player_id,
                name: &p.name,
                team: &p.team,
                position: p.position.as_deref(),
                log,
                next_opponent: snap.next_opponent_for(&p.team),
            })
        })
        .collect();

    let ranked = rank_players(&entries, args.category, args.sort_by, min_games);
    info!(players = ranked.len(), "ranking complete");

    print_rankings(&ranked, &snap, &config, &args);
    Ok(())
}

fn print_rankings(ranked: &[RankedPlayer], snap: &Snapshot, config: &Config, args: &CliArgs) {
    println!(
        "{:<4} {:<24} {:<5} {:>7} {:>7} {:>7} {:>9} {:>6} {:>6} {:>7}",
        "#", "Player", "Team", "Season", "L10", "L5", "Composite", "Trend", "Cons", "Matchup"
    );

    for (i, player) in ranked.iter().take(args.top).enumerate() {
        let matchup = player
            .scores
            .matchup
            .map(|m| format!("{:.1}", m.score))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<4} {:<24} {:<5} {:>7.2} {:>7.2} {:>7.2} {:>9.2} {:>6.1} {:>6.1} {:>7}",
            i + 1,
            player.name,
            player.team,
            player.scores.season_avg,
            player.scores.last10_avg,
            player.scores.last5_avg,
            player.scores.composite_score,
            player.scores.trend_score,
            player.scores.consistency_score,
            matchup,
        );

        if let Some(line) = main_line_for(snap, config, player.player_id, args.category) {
            if let Some(log) = snap.game_logs.get(&player.player_id) {
                let analysis = hit_rate::analyze(log, line.line, args.category);
                println!(
                    "     line {:.1} ({}): {:.0}% season, {:.0}% L10, {:.0}% L5, conf {:.0}",
                    line.line,
                    line.bookmaker,
                    analysis.hit_rate,
                    analysis.last10_rate,
                    analysis.last5_rate,
                    analysis.confidence_score,
                );
            }
        }

        if let Some(opponent) = &args.opponent {
            if let Some(log) = snap.game_logs.get(&player.player_id) {
                let line = main_line_for(snap, config, player.player_id, args.category)
                    .map(|l| l.line)
                    .unwrap_or(0.0);
                let splits = h2h::versus_opponent(log, opponent, args.category, line);
                if splits.games_played > 0 {
                    println!(
                        "     vs {}: {} games, {:.0}% over",
                        opponent, splits.games_played, splits.hit_rate
                    );
                }
            }
        }
    }
}

fn main_line_for<'a>(
    snap: &'a Snapshot,
    config: &Config,
    player_id: i64,
    category: StatCategory,
) -> Option<&'a CandidateLine> {
    let by_category: &HashMap<String, Vec<CandidateLine>> = snap.odds.get(&player_id)?;
    let lines = by_category.get(category.as_str())?;
    select_main_line(lines, &config.bookmaker_priority).ok()
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs {
        config_path: PathBuf::from("proptrack.toml"),
        category: StatCategory::Points,
        sort_by: SortKey::default(),
        top: 25,
        opponent: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| anyhow::anyhow!("{name} requires a value"))
        };
        match flag.as_str() {
            "--config" => args.config_path = PathBuf::from(value("--config")?),
            "--category" => {
                let raw = value("--category")?;
                args.category = raw
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?;
            }
            "--sort" => {
                let raw = value("--sort")?;
                args.sort_by = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            }
            "--top" => {
                args.top = value("--top")?
                    .parse()
                    .context("--top must be a number")?;
            }
            "--opponent" => args.opponent = Some(value("--opponent")?),
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

/// Initialize tracing to stderr; stdout carries the ranking tables.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("proptrack=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
