//! Polynomial coefficient algebra.
//!
//! A polynomial is an ordered coefficient sequence, highest degree first:
//! `[1.0, 2.0, 3.0]` is `x^2 + 2x + 3`. Leading zero coefficients are
//! significant and are never trimmed implicitly; `[0, 1, 2]` and `[1, 2]`
//! are distinct values even though they describe the same curve. Callers
//! that need the mathematical degree use [`Polynomial::trimmed`].

use crate::error::{AlgebraError, AlgebraResult};
use cf_core::Real;

/// Polynomial over `Real`, coefficients highest degree first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Real>,
}

impl Polynomial {
    /// Create a polynomial from coefficients, highest degree first.
    pub fn new(coeffs: Vec<Real>) -> Self {
        Self { coeffs }
    }

    /// Zero polynomial of the given order (`order + 1` coefficients).
    pub fn zeros(order: usize) -> Self {
        Self {
            coeffs: vec![0.0; order + 1],
        }
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True when the polynomial carries no coefficients at all.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree as implied by coefficient count (len - 1, 0 when empty).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficient slice, highest degree first.
    pub fn coeffs(&self) -> &[Real] {
        &self.coeffs
    }

    /// Leading (highest-degree) coefficient, if any.
    pub fn leading(&self) -> Option<Real> {
        self.coeffs.first().copied()
    }

    /// Copy with leading zero coefficients stripped.
    ///
    /// At least one coefficient is kept, so the zero polynomial stays `[0]`.
    pub fn trimmed(&self) -> Self {
        let lead = self
            .coeffs
            .iter()
            .position(|&c| c != 0.0)
            .unwrap_or(self.coeffs.len().saturating_sub(1));
        Self {
            coeffs: self.coeffs[lead..].to_vec(),
        }
    }

    /// Sum of two polynomials.
    ///
    /// Operands are aligned at the trailing (lowest-degree) end and the
    /// shorter one is zero-padded on the high-degree side; the result has
    /// `max(len(a), len(b))` coefficients.
    pub fn add(&self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut out = vec![0.0; len];
        for (i, &c) in self.coeffs.iter().rev().enumerate() {
            out[len - 1 - i] += c;
        }
        for (i, &c) in rhs.coeffs.iter().rev().enumerate() {
            out[len - 1 - i] += c;
        }
        Polynomial::new(out)
    }

    /// Difference of two polynomials, with the same alignment as [`add`].
    ///
    /// [`add`]: Polynomial::add
    pub fn sub(&self, rhs: &Polynomial) -> Polynomial {
        self.add(&rhs.neg())
    }

    /// Product of two polynomials (full convolution of coefficients).
    ///
    /// The result has `len(a) + len(b) - 1` coefficients; empty operands
    /// produce an empty product.
    pub fn mul(&self, rhs: &Polynomial) -> Polynomial {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Polynomial::new(Vec::new());
        }
        let mut out = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::new(out)
    }

    /// Element-wise multiplication by a scalar.
    pub fn scale(&self, k: Real) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|&c| c * k).collect())
    }

    /// Negation of every coefficient.
    pub fn neg(&self) -> Polynomial {
        self.scale(-1.0)
    }

    /// Polynomial division is deliberately unsupported.
    ///
    /// A divisor longer than the dividend is rejected as an invalid size;
    /// any other call reports the operation as unsupported. Nothing is
    /// silently approximated.
    pub fn div(&self, rhs: &Polynomial) -> AlgebraResult<Polynomial> {
        if rhs.coeffs.len() > self.coeffs.len() {
            return Err(AlgebraError::InvalidSize {
                what: "polynomial division",
            });
        }
        Err(AlgebraError::Unsupported {
            what: "polynomial division",
        })
    }

    /// Evaluate at `x` with Horner's scheme.
    pub fn eval(&self, x: Real) -> Real {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(coeffs: &[Real]) -> Polynomial {
        Polynomial::new(coeffs.to_vec())
    }

    #[test]
    fn add_same_length() {
        let c = p(&[1.0, 2.0, 3.0]).add(&p(&[2.0, 3.0, 4.0]));
        assert_eq!(c.coeffs(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn add_aligns_trailing_end() {
        // (x + 1) + (x^2 + 2x + 3) = x^2 + 3x + 4
        let c = p(&[1.0, 1.0]).add(&p(&[1.0, 2.0, 3.0]));
        assert_eq!(c.coeffs(), &[1.0, 3.0, 4.0]);
    }

    #[test]
    fn sub_basic() {
        let c = p(&[2.0, 3.0, 4.0]).sub(&p(&[1.0, 2.0, 3.0]));
        assert_eq!(c.coeffs(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn mul_convolution() {
        // (x^2 + 2x + 3)(2x^2 + 3x + 4) = 2x^4 + 7x^3 + 16x^2 + 17x + 12
        let c = p(&[1.0, 2.0, 3.0]).mul(&p(&[2.0, 3.0, 4.0]));
        assert_eq!(c.coeffs(), &[2.0, 7.0, 16.0, 17.0, 12.0]);
    }

    #[test]
    fn mul_result_length() {
        let c = p(&[1.0, 0.0]).mul(&p(&[1.0, 1.0, 1.0]));
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn scale_elementwise() {
        let c = p(&[1.0, 2.0, 3.0]).scale(5.0);
        assert_eq!(c.coeffs(), &[5.0, 10.0, 15.0]);
    }

    #[test]
    fn leading_zeros_are_preserved() {
        let a = p(&[0.0, 1.0, 2.0]);
        let b = p(&[1.0, 2.0]);
        assert_ne!(a, b);
        assert_eq!(a.trimmed(), b);
    }

    #[test]
    fn trimmed_keeps_zero_polynomial() {
        assert_eq!(p(&[0.0, 0.0, 0.0]).trimmed().coeffs(), &[0.0]);
    }

    #[test]
    fn division_is_unsupported() {
        let err = p(&[1.0, 2.0, 3.0]).div(&p(&[1.0, 1.0])).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::Unsupported {
                what: "polynomial division"
            }
        );
    }

    #[test]
    fn division_rejects_longer_divisor() {
        let err = p(&[1.0, 2.0]).div(&p(&[1.0, 2.0, 3.0])).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::InvalidSize {
                what: "polynomial division"
            }
        );
    }

    #[test]
    fn eval_horner() {
        // x^2 + 2x + 3 at x = 2
        assert_eq!(p(&[1.0, 2.0, 3.0]).eval(2.0), 11.0);
    }

    fn coeff_vec() -> impl Strategy<Value = Vec<Real>> {
        prop::collection::vec((-50i32..=50).prop_map(Real::from), 1..6)
    }

    proptest! {
        #[test]
        fn add_commutes(a in coeff_vec(), b in coeff_vec()) {
            let (a, b) = (Polynomial::new(a), Polynomial::new(b));
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associates(a in coeff_vec(), b in coeff_vec(), c in coeff_vec()) {
            let (a, b, c) = (Polynomial::new(a), Polynomial::new(b), Polynomial::new(c));
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_distributes_over_add(
            a in coeff_vec(),
            b in prop::collection::vec((-50i32..=50).prop_map(Real::from), 3),
            c in prop::collection::vec((-50i32..=50).prop_map(Real::from), 3),
        ) {
            // b and c share a length so a*(b+c) and a*b + a*c have equal
            // coefficient counts; integer coefficients keep it exact.
            let (a, b, c) = (Polynomial::new(a), Polynomial::new(b), Polynomial::new(c));
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }
    }
}
