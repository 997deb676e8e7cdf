//! Fixed-step step-response simulation for LTI transfer functions.
//!
//! The entry point is [`step_response`]: convert the transfer function to
//! state space once, precompute the per-step affine update for the chosen
//! method, then march the state forward with one matrix-vector product per
//! sample. Everything is synchronous and deterministic; identical inputs
//! give bit-identical traces.

pub mod error;
pub mod integrator;
pub mod response;

pub use error::{SimError, SimResult};
pub use integrator::Method;
pub use response::{step_response, StepResponse};
