//! Transfer function type and its rational algebra.

use cf_algebra::Polynomial;
use cf_core::Real;

/// Ratio of two polynomials in `s`: numerator over denominator.
///
/// Construction enforces nothing; validity ("no more zeros than poles",
/// non-empty polynomials) is checked where it matters, at state-space
/// conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    num: Polynomial,
    den: Polynomial,
}

impl TransferFunction {
    /// Build from coefficient vectors, highest degree first.
    pub fn new(num: Vec<Real>, den: Vec<Real>) -> Self {
        Self {
            num: Polynomial::new(num),
            den: Polynomial::new(den),
        }
    }

    /// Build from already-constructed polynomials.
    pub fn from_polynomials(num: Polynomial, den: Polynomial) -> Self {
        Self { num, den }
    }

    pub fn num(&self) -> &Polynomial {
        &self.num
    }

    pub fn den(&self) -> &Polynomial {
        &self.den
    }

    /// Rational sum: (n1 d2 + n2 d1) / (d1 d2).
    pub fn add(&self, rhs: &TransferFunction) -> TransferFunction {
        let num = self.num.mul(&rhs.den).add(&rhs.num.mul(&self.den));
        let den = self.den.mul(&rhs.den);
        TransferFunction::from_polynomials(num, den)
    }

    /// Rational difference: (n1 d2 - n2 d1) / (d1 d2).
    pub fn sub(&self, rhs: &TransferFunction) -> TransferFunction {
        let num = self.num.mul(&rhs.den).sub(&rhs.num.mul(&self.den));
        let den = self.den.mul(&rhs.den);
        TransferFunction::from_polynomials(num, den)
    }

    /// Rational product: (n1 n2) / (d1 d2).
    pub fn mul(&self, rhs: &TransferFunction) -> TransferFunction {
        TransferFunction::from_polynomials(self.num.mul(&rhs.num), self.den.mul(&rhs.den))
    }

    /// Multiply every coefficient of both polynomials by `k`.
    ///
    /// The described system is unchanged; only the representation scales.
    pub fn scale(&self, k: Real) -> TransferFunction {
        TransferFunction::from_polynomials(self.num.scale(k), self.den.scale(k))
    }

    /// Divide every coefficient of both polynomials by `k`.
    pub fn div_scalar(&self, k: Real) -> TransferFunction {
        self.scale(1.0 / k)
    }

    /// Closed loop under unit negative feedback: G / (1 + G).
    pub fn feedback_unit(&self) -> TransferFunction {
        let one = TransferFunction::new(vec![1.0], vec![1.0]);
        let denominator = one.add(self);
        TransferFunction::from_polynomials(
            self.num.mul(&denominator.den),
            self.den.mul(&denominator.num),
        )
    }
}
