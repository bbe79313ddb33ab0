// Engine error types.
//
// Insufficient data and missing references are handled inside the
// engine with neutral defaults or absent sub-results; only caller
// contract violations surface as errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The line-selection heuristic requires at least one candidate.
    #[error("candidate line list is empty")]
    EmptyLineList,

    /// A parlay needs at least one leg.
    #[error("parlay requires at least one leg")]
    EmptyParlay,
}
