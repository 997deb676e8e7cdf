//! Fixed-step explicit integration schemes for the LTI step response.
//!
//! For the linear time-invariant system x' = A x + B u with a unit step
//! input, every explicit Runge-Kutta scheme collapses to a constant affine
//! map per step:
//!
//! ```text
//! x_{k+1} = Phi x_k + Gamma
//! Phi   = sum_{i=0..p} (A h)^i / i!
//! Gamma = (sum_{i=1..p} A^{i-1} h^i / i!) B
//! ```
//!
//! with p the order of the scheme (1 for Euler, 2/3/4 for the classic
//! RK variants). The stage combinations reduce exactly to these Taylor
//! truncations, so Phi and Gamma are computed once from (A, B, h) and
//! reused every step; no stage is re-evaluated at run time.

use crate::error::SimResult;
use cf_algebra::Matrix;
use cf_core::Real;
use serde::{Deserialize, Serialize};

/// Integration scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Forward Euler, first-order accurate.
    Euler,
    /// Second-order Runge-Kutta (midpoint family).
    Rk2,
    /// Third-order Runge-Kutta.
    Rk3,
    /// Classical fourth-order Runge-Kutta (default).
    #[default]
    Rk4,
}

impl Method {
    /// Order of the Taylor truncation the scheme reduces to.
    pub fn order(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Rk2 => 2,
            Method::Rk3 => 3,
            Method::Rk4 => 4,
        }
    }
}

/// Precomputed per-step affine update x <- Phi x + Gamma.
#[derive(Clone, Debug)]
pub(crate) struct StepUpdate {
    phi: Matrix,
    gamma: Matrix,
}

impl StepUpdate {
    /// Build the update for one scheme from the system matrices and the
    /// sample time. Called once per simulation; only a change of model or
    /// sample time requires a rebuild.
    pub(crate) fn new(method: Method, a: &Matrix, b: &Matrix, h: Real) -> SimResult<Self> {
        let n = a.rows();
        let ah = a.scale(h);

        // phi accumulates I + Ah + (Ah)^2/2! + ...; forcing accumulates
        // hI + (Ah)h/2! + (Ah)^2 h/3! + ..., multiplied by B at the end.
        let mut phi = Matrix::identity(n);
        let mut forcing = Matrix::identity(n).scale(h);
        let mut phi_term = Matrix::identity(n);
        let mut forcing_term = Matrix::identity(n).scale(h);

        for i in 1..=method.order() {
            phi_term = phi_term.mul(&ah)?.scale(1.0 / i as Real);
            phi = phi.add(&phi_term);
            if i > 1 {
                forcing_term = forcing_term.mul(&ah)?.scale(1.0 / i as Real);
                forcing = forcing.add(&forcing_term);
            }
        }

        Ok(Self {
            phi,
            gamma: forcing.mul(b)?,
        })
    }

    /// Advance the state by one sample.
    pub(crate) fn step(&self, x: &Matrix) -> SimResult<Matrix> {
        Ok(self.phi.mul(x)?.add(&self.gamma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[Real]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn euler_update_matches_closed_form() {
        // x' = -2x + 1, h = 0.1: Phi = 1 - 0.2, Gamma = 0.1
        let a = m(&[&[-2.0]]);
        let b = m(&[&[1.0]]);
        let update = StepUpdate::new(Method::Euler, &a, &b, 0.1).unwrap();
        let x = update.step(&Matrix::zeros(1, 1)).unwrap();
        assert!((x.get(0, 0) - 0.1).abs() < 1e-15);
        let x2 = update.step(&x).unwrap();
        assert!((x2.get(0, 0) - (0.8 * 0.1 + 0.1)).abs() < 1e-15);
    }

    #[test]
    fn rk2_update_is_second_order_taylor() {
        // Phi = 1 + ah + (ah)^2/2 for the scalar system.
        let a = m(&[&[-2.0]]);
        let b = m(&[&[1.0]]);
        let h = 0.1;
        let update = StepUpdate::new(Method::Rk2, &a, &b, h).unwrap();
        let x1 = update.step(&Matrix::zeros(1, 1)).unwrap();
        // Gamma = h + a h^2 / 2
        let expected = h + (-2.0) * h * h / 2.0;
        assert!((x1.get(0, 0) - expected).abs() < 1e-15);
    }

    #[test]
    fn rk4_update_is_fourth_order_taylor() {
        let a = m(&[&[-2.0]]);
        let b = m(&[&[1.0]]);
        let h = 0.1;
        let update = StepUpdate::new(Method::Rk4, &a, &b, h).unwrap();
        let x1 = update.step(&Matrix::zeros(1, 1)).unwrap();
        let ah: Real = -0.2;
        // Gamma = h (1 + ah/2 + ah^2/6 + ah^3/24)
        let expected = h * (1.0 + ah / 2.0 + ah * ah / 6.0 + ah * ah * ah / 24.0);
        assert!((x1.get(0, 0) - expected).abs() < 1e-15);
    }

    #[test]
    fn method_orders() {
        assert_eq!(Method::Euler.order(), 1);
        assert_eq!(Method::Rk2.order(), 2);
        assert_eq!(Method::Rk3.order(), 3);
        assert_eq!(Method::Rk4.order(), 4);
    }
}
