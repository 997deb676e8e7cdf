//! Reaction-curve PID tuning for ctrlflow.
//!
//! The pipeline: simulate a unit-step response, locate the two reference
//! points on the reaction curve, fit first-order-plus-dead-time parameters
//! (k, tau, L), then apply a closed-form tuning rule to produce
//! (kp, ki, kd).

pub mod error;
pub mod identify;
pub mod rules;

pub use error::{TuningError, TuningResult};
pub use identify::{
    fit_fopdt, time_near, tuning_line, two_point_fit, FopdtFit, TwoPointFit, TwoPointMethod,
};
pub use rules::{gains, PidGains, TuningRule};

use cf_model::TransferFunction;
use cf_sim::{step_response, Method};
use cf_core::Real;
use tracing::debug;

/// Simulate, identify and tune in one call.
///
/// Runs the unit-step response of `g` with the chosen integration method,
/// fits (k, tau, L) from the standard 28% / 63.2% reaction-curve points
/// and applies `rule`.
pub fn tune(
    rule: TuningRule,
    g: &TransferFunction,
    sample_time: Real,
    total_time: Real,
    method: Method,
) -> TuningResult<PidGains> {
    let resp = step_response(method, g, sample_time, total_time)?;
    let fit = fit_fopdt(&resp)?;
    debug!(k = fit.k, tau = fit.tau, l = fit.l, ?rule, "identified reaction curve");
    gains(rule, fit.k, fit.tau, fit.l)
}
