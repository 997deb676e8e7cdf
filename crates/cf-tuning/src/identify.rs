//! Reaction-curve identification.
//!
//! Locates the sample times where the step response crosses given
//! fractions of its final value and derives first-order-plus-dead-time
//! parameters from them. The scan assumes the response is monotonic over
//! the window of interest; on a non-monotonic (oscillatory) response the
//! nearest sample is still returned but the fitted parameters are
//! meaningless.

use crate::error::{TuningError, TuningResult};
use cf_core::Real;
use cf_sim::StepResponse;
use serde::{Deserialize, Serialize};

/// Two-point identification method: the pair of response-amplitude
/// percentages used to anchor the reaction curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwoPointMethod {
    /// 28% / 63.2%, the pair the tuning pipeline uses.
    #[default]
    Standard,
    /// 25% / 75%.
    Alfaro,
    /// 28% / 40%.
    Broida,
    /// 33% / 67%.
    ChenYang,
    /// 35% / 85%.
    Ho,
    /// 28.2% / 63.2%.
    Smith,
    /// 33% / 70%.
    Viteckova,
}

impl TwoPointMethod {
    /// The two anchor percentages of the final value.
    pub fn percents(self) -> (Real, Real) {
        match self {
            TwoPointMethod::Standard => (28.0, 63.2),
            TwoPointMethod::Alfaro => (25.0, 75.0),
            TwoPointMethod::Broida => (28.0, 40.0),
            TwoPointMethod::ChenYang => (33.0, 67.0),
            TwoPointMethod::Ho => (35.0, 85.0),
            TwoPointMethod::Smith => (28.2, 63.2),
            TwoPointMethod::Viteckova => (33.0, 70.0),
        }
    }
}

/// The two identified anchor points of a reaction curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoPointFit {
    pub t1: Real,
    pub y1: Real,
    pub t2: Real,
    pub y2: Real,
}

/// First-order-plus-dead-time parameters fitted from the standard pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FopdtFit {
    /// Process gain (final value of the unit-step response).
    pub k: Real,
    /// Time constant.
    pub tau: Real,
    /// Dead time.
    pub l: Real,
}

/// Sample time whose output is closest to `target`.
///
/// Single linear scan tracking the minimum absolute difference seen so
/// far, seeded with the full output range; an earlier sample wins ties.
/// Assumes `y` is monotonic over the window of interest; on a
/// non-monotonic response the returned time may not be the crossing the
/// caller expects.
pub fn time_near(t: &[Real], y: &[Real], target: Real) -> TuningResult<Real> {
    if t.is_empty() || y.is_empty() || t.len() != y.len() {
        return Err(TuningError::EmptyResponse);
    }

    let max = y.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let min = y.iter().copied().fold(Real::INFINITY, Real::min);

    let mut best_tolerance = max - min;
    let mut best_time = t[0];
    for (&ti, &yi) in t.iter().zip(y) {
        let tolerance = (yi - target).abs();
        if tolerance < best_tolerance {
            best_time = ti;
            best_tolerance = tolerance;
        }
    }
    Ok(best_time)
}

/// Locate the two anchor points of `method` on a step response.
pub fn two_point_fit(resp: &StepResponse, method: TwoPointMethod) -> TuningResult<TwoPointFit> {
    let k = resp.final_value().ok_or(TuningError::EmptyResponse)?;
    let (p1, p2) = method.percents();
    let y1 = p1 / 100.0 * k;
    let y2 = p2 / 100.0 * k;
    Ok(TwoPointFit {
        t1: time_near(&resp.t, &resp.y, y1)?,
        y1,
        t2: time_near(&resp.t, &resp.y, y2)?,
        y2,
    })
}

/// Reaction line through the two anchor points, extended to zero and to
/// the response peak: ([t0, t1, t2, tp], [0, y1, y2, yp]).
///
/// Display-oriented: the plotting collaborators draw this over the trace.
pub fn tuning_line(
    resp: &StepResponse,
    method: TwoPointMethod,
) -> TuningResult<([Real; 4], [Real; 4])> {
    let fit = two_point_fit(resp, method)?;
    if fit.y2 == fit.y1 {
        return Err(TuningError::DegenerateCurve {
            what: "anchor points coincide",
        });
    }
    let alpha = (fit.t2 - fit.t1) / (fit.y2 - fit.y1);
    let yp = resp.y.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let t0 = fit.t1 - fit.y1 * alpha;
    let tp = fit.t2 + (yp - fit.y2) * alpha;
    Ok(([t0, fit.t1, fit.t2, tp], [0.0, fit.y1, fit.y2, yp]))
}

/// Fit first-order-plus-dead-time parameters from the standard
/// 28% / 63.2% points: tau = 1.5 (t63 - t28), L = 1.5 (t28 - t63/3).
pub fn fit_fopdt(resp: &StepResponse) -> TuningResult<FopdtFit> {
    let fit = two_point_fit(resp, TwoPointMethod::Standard)?;
    let k = resp.final_value().ok_or(TuningError::EmptyResponse)?;
    Ok(FopdtFit {
        k,
        tau: 1.5 * (fit.t2 - fit.t1),
        l: 1.5 * (fit.t1 - fit.t2 / 3.0),
    })
}
