use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Numeric-foundation errors shared by the downstream crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
