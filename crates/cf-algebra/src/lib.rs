//! Polynomial and matrix algebra for ctrlflow.
//!
//! Both types are immutable value objects: every operation returns a new
//! instance. Coefficient and element storage is plain `f64` (`Real`).
//!
//! The conventions here are load-bearing for the rest of the workspace:
//! - polynomials store coefficients highest degree first and never trim
//!   leading zeros implicitly (state-space conversion pads by length);
//! - matrix `add`/`sub` zero-pad the smaller operand to the bounding
//!   rows x cols, while `mul` is strict about inner dimensions.

pub mod error;
pub mod matrix;
pub mod polynomial;

pub use error::{AlgebraError, AlgebraResult};
pub use matrix::Matrix;
pub use polynomial::Polynomial;
