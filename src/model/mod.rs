// Shared data model: game records, logs, team aggregates, sportsbook lines.

pub mod game;
pub mod line;
pub mod log;
pub mod team;

pub use game::{Decision, FootballLine, GameRecord, GoalieLine, SkaterLine, StatLine};
pub use line::CandidateLine;
pub use log::RecentFirstLog;
pub use team::TeamAggregateStat;
