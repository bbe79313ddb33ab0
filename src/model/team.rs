// Per-team, per-season offensive/defensive aggregates.
//
// Recomputed by the data provider each update cycle; read-only here.
// Rank semantics: 1 = "most" in that dimension. Rank 1 in volume_for
// is the highest-volume offense; rank 1 in volume_against is the
// defense that concedes the most.

use serde::{Deserialize, Serialize};

/// League-wide offensive/defensive rates and ranks for one team.
///
/// For NHL the volume dimension is shots; for NFL feeds the same shape
/// carries yards. The engine only ever compares ranks, so the unit is
/// the provider's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAggregateStat {
    pub team_name: String,
    pub abbrev: String,
    #[serde(default)]
    pub games_played: u32,
    /// Volume generated per game (shots for, yards gained).
    pub volume_for_per_game: f64,
    /// Volume conceded per game (shots against, yards allowed).
    pub volume_against_per_game: f64,
    #[serde(default)]
    pub goals_for_per_game: f64,
    #[serde(default)]
    pub goals_against_per_game: f64,
    /// 1..32, 1 = generates the most volume.
    pub offensive_rank: u32,
    /// 1..32, 1 = concedes the most volume.
    pub defensive_rank: u32,
}
