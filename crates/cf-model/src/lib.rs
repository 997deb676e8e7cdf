//! LTI system models for ctrlflow.
//!
//! A [`TransferFunction`] is a ratio of two polynomials in the Laplace
//! variable `s`. [`StateSpace`] is the matching (A, B, C, D) realization,
//! derived deterministically in controllable canonical form. [`pade`]
//! produces rational approximations of a pure time delay so delays can be
//! fed through the same state-space pipeline.
//!
//! Only single-input/single-output systems are modeled.

pub mod error;
pub mod pade;
pub mod state_space;
pub mod transfer_function;

pub use error::{ModelError, ModelResult};
pub use pade::pade;
pub use state_space::StateSpace;
pub use transfer_function::TransferFunction;
