//! Step-response runner and trace recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{Method, StepUpdate};
use cf_algebra::Matrix;
use cf_core::{ensure_finite, Real};
use cf_model::{StateSpace, TransferFunction};
use tracing::debug;

/// Recorded unit-step response: paired sample times and outputs.
///
/// Sampling contract: `len(t) == len(y) == floor(total_time/sample_time) + 1`
/// and `t[i] = i * sample_time`. Every output is recorded after its
/// integration step, so `y[i]` is the integrated state one step past
/// `t[i]`; the rest state at t = 0 is not emitted. The reaction-curve
/// gain tables downstream are calibrated against exactly this labeling.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResponse {
    /// Sample times (seconds), uniformly spaced from 0.
    pub t: Vec<Real>,
    /// Output samples, same length as `t`.
    pub y: Vec<Real>,
}

impl StepResponse {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Last output sample; the steady-state gain when the run covers the
    /// settling time.
    pub fn final_value(&self) -> Option<Real> {
        self.y.last().copied()
    }
}

/// Simulate the unit-step response of `g` with a fixed-step scheme.
///
/// The transfer function is converted to controllable canonical state
/// space once; the per-step update is precomputed from (A, B, sample_time)
/// and applied once per sample. The input is a unit step, so the D term
/// is added directly to every output sample.
pub fn step_response(
    method: Method,
    g: &TransferFunction,
    sample_time: Real,
    total_time: Real,
) -> SimResult<StepResponse> {
    ensure_finite(sample_time, "sample_time")?;
    ensure_finite(total_time, "total_time")?;
    if sample_time <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "sample_time must be positive",
        });
    }
    if total_time <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "total_time must be positive",
        });
    }

    let ss = StateSpace::from_tf(g)?;
    let samples = (total_time / sample_time) as usize + 1;
    let d = ss.d().get(0, 0);

    debug!(
        order = ss.order(),
        ?method,
        samples,
        "step response simulation"
    );

    let t: Vec<Real> = (0..samples).map(|i| i as Real * sample_time).collect();

    // Static gain: no state to integrate, the output is D at every sample.
    if ss.order() == 0 {
        return Ok(StepResponse {
            t,
            y: vec![d; samples],
        });
    }

    let update = StepUpdate::new(method, ss.a(), ss.b(), sample_time)?;

    let mut x = Matrix::zeros(ss.order(), 1);
    let mut y = Vec::with_capacity(samples);

    for _ in 0..samples {
        x = update.step(&x)?;
        y.push(ss.c().mul(&x)?.get(0, 0) + d);
    }

    Ok(StepResponse { t, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g2() -> TransferFunction {
        TransferFunction::new(vec![1.0], vec![1.0, 2.0, 3.0])
    }

    /// Analytic unit-step response of 1/(s^2 + 2s + 3).
    fn g2_exact(t: Real) -> Real {
        let wd = std::f64::consts::SQRT_2;
        (1.0 / 3.0) * (1.0 - (-t).exp() * ((wd * t).cos() + (wd * t).sin() / wd))
    }

    fn max_error(method: Method, h: Real) -> Real {
        let resp = step_response(method, &g2(), h, 5.0).unwrap();
        // y[i] holds the state one step past t[i].
        resp.t
            .iter()
            .zip(&resp.y)
            .map(|(&t, &y)| (y - g2_exact(t + h)).abs())
            .fold(0.0, Real::max)
    }

    #[test]
    fn rejects_non_positive_times() {
        assert!(matches!(
            step_response(Method::Euler, &g2(), 0.0, 1.0),
            Err(SimError::InvalidArg { .. })
        ));
        assert!(matches!(
            step_response(Method::Euler, &g2(), 0.01, -1.0),
            Err(SimError::InvalidArg { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_times() {
        assert!(matches!(
            step_response(Method::Euler, &g2(), Real::NAN, 1.0),
            Err(SimError::Core(_))
        ));
        assert!(matches!(
            step_response(Method::Euler, &g2(), 0.01, Real::INFINITY),
            Err(SimError::Core(_))
        ));
    }

    #[test]
    fn trace_shape_and_spacing() {
        let resp = step_response(Method::Rk4, &g2(), 0.25, 2.0).unwrap();
        assert_eq!(resp.t.len(), resp.y.len());
        assert_eq!(resp.t.len(), 9);
        assert_eq!(resp.t[0], 0.0);
        // Uniform spacing
        for w in resp.t.windows(2) {
            assert!((w[1] - w[0] - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn outputs_are_recorded_after_each_step() {
        // 1/(s + 2): one Euler step from rest gives x = h * B, so the
        // sample labeled t = 0 already carries the first update.
        let g = TransferFunction::new(vec![1.0], vec![1.0, 2.0]);
        let resp = step_response(Method::Euler, &g, 0.1, 0.5).unwrap();
        assert_eq!(resp.y[0], 0.1);
        assert!((resp.y[1] - 0.18).abs() < 1e-15);
    }

    #[test]
    fn static_gain_is_flat() {
        let g = TransferFunction::new(vec![3.0], vec![2.0]);
        let resp = step_response(Method::Euler, &g, 0.1, 1.0).unwrap();
        assert!(resp.y.iter().all(|&v| v == 1.5));
    }

    #[test]
    fn approaches_steady_state_gain() {
        let resp = step_response(Method::Rk4, &g2(), 0.01, 10.0).unwrap();
        assert!((resp.final_value().unwrap() - 1.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn higher_order_methods_are_more_accurate() {
        let h = 0.05;
        let euler = max_error(Method::Euler, h);
        let rk2 = max_error(Method::Rk2, h);
        let rk3 = max_error(Method::Rk3, h);
        let rk4 = max_error(Method::Rk4, h);
        assert!(rk2 < euler);
        assert!(rk3 < rk2);
        assert!(rk4 < rk3);
        assert!(euler < 0.05, "euler error {euler}");
        assert!(rk4 < 1e-4, "rk4 error {rk4}");
    }

    #[test]
    fn euler_converges_with_shrinking_step() {
        let coarse = max_error(Method::Euler, 0.05);
        let fine = max_error(Method::Euler, 0.005);
        assert!(fine < coarse / 5.0, "coarse {coarse}, fine {fine}");
    }

    #[test]
    fn methods_agree_in_the_limit() {
        let h = 0.001;
        let euler = step_response(Method::Euler, &g2(), h, 5.0).unwrap();
        let rk4 = step_response(Method::Rk4, &g2(), h, 5.0).unwrap();
        let diff = euler
            .y
            .iter()
            .zip(&rk4.y)
            .map(|(&a, &b)| (a - b).abs())
            .fold(0.0, Real::max);
        assert!(diff < 1e-3, "max divergence {diff}");
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let a = step_response(Method::Rk3, &g2(), 0.01, 2.0).unwrap();
        let b = step_response(Method::Rk3, &g2(), 0.01, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pade_delay_is_simulable() {
        let delayed = cf_model::pade(2, 0.5).unwrap().mul(&g2());
        let resp = step_response(Method::Rk4, &delayed, 0.01, 10.0).unwrap();
        assert!((resp.final_value().unwrap() - 1.0 / 3.0).abs() < 1e-3);
    }
}
