//! Pade approximation of a pure time delay.
//!
//! A delay `e^{-ts}` has no finite state-space realization; the diagonal
//! Pade approximants below trade it for a rational transfer function that
//! the rest of the pipeline can simulate. Coefficients are the standard
//! closed-form tables, orders 1 through 5.

use crate::error::{ModelError, ModelResult};
use crate::transfer_function::TransferFunction;
use cf_algebra::Polynomial;
use cf_core::Real;

/// Rational approximation of the delay `e^{-ts}` for `order` in 1..=5.
///
/// Both polynomials are normalized so the denominator's leading
/// coefficient is 1; the steady-state gain is exactly 1 for every order.
pub fn pade(order: usize, delay: Real) -> ModelResult<TransferFunction> {
    // A zero delay would make the normalization divide by zero.
    if !delay.is_finite() || delay <= 0.0 {
        return Err(ModelError::InvalidArg {
            what: "pade delay must be positive and finite",
        });
    }
    let t = delay;
    let (num, den): (Vec<Real>, Vec<Real>) = match order {
        1 => (vec![-t, 2.0], vec![t, 2.0]),
        2 => (vec![t * t, -6.0 * t, 12.0], vec![t * t, 6.0 * t, 12.0]),
        3 => (
            vec![-t.powi(3), 12.0 * t * t, -60.0 * t, 120.0],
            vec![t.powi(3), 12.0 * t * t, 60.0 * t, 120.0],
        ),
        4 => (
            vec![t.powi(4), -20.0 * t.powi(3), 180.0 * t * t, -840.0 * t, 1680.0],
            vec![t.powi(4), 20.0 * t.powi(3), 180.0 * t * t, 840.0 * t, 1680.0],
        ),
        5 => (
            vec![
                -t.powi(5),
                30.0 * t.powi(4),
                -420.0 * t.powi(3),
                3360.0 * t * t,
                -15120.0 * t,
                30240.0,
            ],
            vec![
                t.powi(5),
                30.0 * t.powi(4),
                420.0 * t.powi(3),
                3360.0 * t * t,
                15120.0 * t,
                30240.0,
            ],
        ),
        _ => {
            return Err(ModelError::InvalidArg {
                what: "pade order must be in 1..=5",
            })
        }
    };

    let lead = den[0];
    Ok(TransferFunction::from_polynomials(
        Polynomial::new(num).scale(1.0 / lead),
        Polynomial::new(den).scale(1.0 / lead),
    ))
}
