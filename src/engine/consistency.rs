// Dispersion-based consistency scoring.
//
// A stability signal, not a skill signal: low variance in recent
// output scores high regardless of the output's level.

use crate::category::StatCategory;
use crate::engine::clamp_score;
use crate::model::RecentFirstLog;

/// Games examined for the consistency sample.
pub const CONSISTENCY_WINDOW: usize = 10;
/// Below this many games the score is the neutral prior.
pub const MIN_CONSISTENCY_SAMPLE: usize = 3;
/// Neutral prior for insufficient data.
pub const NEUTRAL_SCORE: f64 = 50.0;
/// Added to the mean before dividing, so a zero-mean sample does not
/// blow up the coefficient of variation.
const MEAN_EPSILON: f64 = 0.1;

/// Score a sample of recent stat values on a 0-100 scale.
///
/// Computes the population coefficient of variation (stdDev divided by
/// mean + 0.1) and maps it through `100 - cv * steepness`, clamped to
/// [0, 100]. Fewer than [`MIN_CONSISTENCY_SAMPLE`] values returns
/// exactly [`NEUTRAL_SCORE`].
pub fn consistency_score(values: &[f64], steepness: f64) -> f64 {
    if values.len() < MIN_CONSISTENCY_SAMPLE {
        return NEUTRAL_SCORE;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    // Population variance (N denominator): the sample is the relevant
    // universe of recent games, not a draw from a larger one.
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let coefficient_of_variation = std_dev / (mean + MEAN_EPSILON);
    clamp_score(100.0 - coefficient_of_variation * steepness)
}

/// Consistency over the most recent [`CONSISTENCY_WINDOW`] games of a log.
pub fn consistency_for(log: &RecentFirstLog, category: StatCategory) -> f64 {
    let values: Vec<f64> = log
        .window(CONSISTENCY_WINDOW)
        .iter()
        .map(|g| category.value_in(g))
        .collect();
    consistency_score(&values, category.steepness())
}
