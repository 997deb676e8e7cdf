//! Error types for simulation operations.

use cf_algebra::AlgebraError;
use cf_core::CoreError;
use cf_model::ModelError;
use thiserror::Error;

/// Errors encountered during step-response simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numeric error: {0}")]
    Core(#[from] CoreError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),
}

pub type SimResult<T> = Result<T, SimError>;
