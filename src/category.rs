// Stat-category descriptors.
//
// Each bettable category is data, not a subclass: the descriptor binds
// together the stat extractor, the composite weight family, the
// consistency steepness constant, and the matchup rank dimension. The
// scoring and hit-rate engines are generic over this descriptor, which
// is what collapses the per-sport duplication.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{GameRecord, StatLine};

/// A bettable stat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    // NHL skaters
    Points,
    Goals,
    Assists,
    Shots,
    // NHL goalies
    Saves,
    // NFL skill players
    PassingYards,
    PassingTds,
    RushingYards,
    ReceivingYards,
    Receptions,
}

/// Which composite weight vector and steepness constant apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightFamily {
    /// Counting stats for position players (NHL skaters, NFL props).
    Skater,
    /// Goalie saves: higher natural variance, workload-aware composite.
    Goalie,
}

/// Which opponent rank dimension drives the matchup score.
///
/// Rank 1 always means "most" in the dimension, and in both dimensions
/// rank 1 is the most favorable opponent for the over: a defense that
/// concedes the most volume feeds skater props, an offense that
/// generates the most volume feeds goalie save totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupDimension {
    /// Opponent's volume-conceded rank (shots or yards allowed).
    DefenseAllowed,
    /// Opponent's volume-generated rank (shots taken).
    OffenseGenerated,
}

/// Consistency steepness for skater-family categories.
const SKATER_STEEPNESS: f64 = 50.0;
/// Consistency steepness for goalie saves. Save counts run higher and
/// noisier than skater counting stats, so the dispersion penalty is
/// softened.
const GOALIE_STEEPNESS: f64 = 40.0;

impl StatCategory {
    /// Extract this category's value from a game record.
    ///
    /// Missing fields deserialize to 0 and a record from the wrong
    /// sport yields 0, matching the provider tolerance contract. Saves
    /// are always derived from shots against minus goals against.
    pub fn value_in(&self, game: &GameRecord) -> f64 {
        match (&game.stats, self) {
            (StatLine::Skater(s), StatCategory::Points) => s.points,
            (StatLine::Skater(s), StatCategory::Goals) => s.goals,
            (StatLine::Skater(s), StatCategory::Assists) => s.assists,
            (StatLine::Skater(s), StatCategory::Shots) => s.shots,
            (StatLine::Goalie(g), StatCategory::Saves) => g.shots_against - g.goals_against,
            (StatLine::Football(f), StatCategory::PassingYards) => f.passing_yards,
            (StatLine::Football(f), StatCategory::PassingTds) => f.passing_tds,
            (StatLine::Football(f), StatCategory::RushingYards) => f.rushing_yards,
            (StatLine::Football(f), StatCategory::ReceivingYards) => f.receiving_yards,
            (StatLine::Football(f), StatCategory::Receptions) => f.receptions,
            _ => 0.0,
        }
    }

    /// Composite weight family for this category.
    pub fn family(&self) -> WeightFamily {
        match self {
            StatCategory::Saves => WeightFamily::Goalie,
            _ => WeightFamily::Skater,
        }
    }

    /// Steepness constant K applied to the coefficient of variation.
    pub fn steepness(&self) -> f64 {
        match self.family() {
            WeightFamily::Skater => SKATER_STEEPNESS,
            WeightFamily::Goalie => GOALIE_STEEPNESS,
        }
    }

    /// Opponent rank dimension for matchup scoring.
    ///
    /// Skater and NFL props read the opponent defense (how much volume
    /// it concedes); goalie saves read the opponent offense (how many
    /// save opportunities it generates). This is the single source of
    /// truth for the mapping.
    pub fn matchup_dimension(&self) -> MatchupDimension {
        match self {
            StatCategory::Saves => MatchupDimension::OffenseGenerated,
            _ => MatchupDimension::DefenseAllowed,
        }
    }

    /// Snake_case name used in odds maps and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Points => "points",
            StatCategory::Goals => "goals",
            StatCategory::Assists => "assists",
            StatCategory::Shots => "shots",
            StatCategory::Saves => "saves",
            StatCategory::PassingYards => "passing_yards",
            StatCategory::PassingTds => "passing_tds",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::ReceivingYards => "receiving_yards",
            StatCategory::Receptions => "receptions",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(StatCategory::Points),
            "goals" => Ok(StatCategory::Goals),
            "assists" => Ok(StatCategory::Assists),
            "shots" => Ok(StatCategory::Shots),
            "saves" => Ok(StatCategory::Saves),
            "passing_yards" => Ok(StatCategory::PassingYards),
            "passing_tds" => Ok(StatCategory::PassingTds),
            "rushing_yards" => Ok(StatCategory::RushingYards),
            "receiving_yards" => Ok(StatCategory::ReceivingYards),
            "receptions" => Ok(StatCategory::Receptions),
            other => Err(format!("unknown stat category: {other}")),
        }
    }
}
