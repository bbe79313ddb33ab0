// The scoring / hit-rate engine.
//
// Every function here is a pure transformation of caller-supplied data;
// there is no I/O and no state between calls. Computations for distinct
// players or lines are independent, so callers may fan them out across
// threads with read-only shared inputs.

pub mod consistency;
pub mod h2h;
pub mod hit_rate;
pub mod lines;
pub mod matchup;
pub mod parlay;
pub mod ranking;
pub mod window;

/// Clamp a score to the canonical 0-100 band.
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
