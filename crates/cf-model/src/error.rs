//! Error types for model construction and conversion.

use cf_algebra::AlgebraError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur building or converting system models.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Transfer function cannot be realized as a state-space model.
    #[error("Invalid transfer function: {what}")]
    InvalidTransferFunction { what: &'static str },

    /// Caller-supplied state-space matrices have inconsistent shapes.
    #[error("Inconsistent state-space shapes: {what}")]
    Shape { what: &'static str },

    /// Invalid argument provided to a model function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Underlying polynomial/matrix algebra failure.
    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),
}
