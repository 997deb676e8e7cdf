//! Error types for identification and tuning.

use cf_sim::SimError;
use thiserror::Error;

/// Result type for tuning operations.
pub type TuningResult<T> = Result<T, TuningError>;

/// Errors that can occur identifying or tuning from a step response.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    /// The response trace carries no samples.
    #[error("Empty step response")]
    EmptyResponse,

    /// Identified parameters are unusable for the tuning formulas.
    #[error("Degenerate reaction curve: {what}")]
    DegenerateCurve { what: &'static str },

    /// Underlying simulation failure.
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),
}
