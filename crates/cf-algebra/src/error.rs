//! Error types for algebra operations.

use thiserror::Error;

/// Result type for algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Errors that can occur in polynomial and matrix operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    /// Matrix constructed from rows of inconsistent length.
    #[error("Ragged matrix rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Inner dimensions disagree for a matrix product.
    #[error("Dimension mismatch for {what}: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    DimensionMismatch {
        what: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Division requested with a divisor longer than the dividend.
    #[error("Invalid operand sizes for {what}")]
    InvalidSize { what: &'static str },

    /// Operation is deliberately not implemented.
    #[error("Unsupported operation: {what}")]
    Unsupported { what: &'static str },
}
