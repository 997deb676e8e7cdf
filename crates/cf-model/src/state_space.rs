//! State-space realization of SISO transfer functions.

use crate::error::{ModelError, ModelResult};
use crate::transfer_function::TransferFunction;
use cf_algebra::{Matrix, Polynomial};

/// LTI state-space model: x' = A x + B u, y = C x + D u.
///
/// A is n x n, B is n x 1, C is 1 x n and D is 1 x 1, where n is the
/// denominator degree of the originating transfer function. A static-gain
/// system (n = 0) carries empty A/B/C and only a D term.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSpace {
    a: Matrix,
    b: Matrix,
    c: Matrix,
    d: Matrix,
}

impl StateSpace {
    /// Build directly from caller-supplied matrices.
    ///
    /// Shapes must be consistent: A square n x n, B n x 1, C 1 x n,
    /// D 1 x 1.
    pub fn from_matrices(a: Matrix, b: Matrix, c: Matrix, d: Matrix) -> ModelResult<Self> {
        let n = a.rows();
        if a.cols() != n {
            return Err(ModelError::Shape {
                what: "A must be square",
            });
        }
        if b.rows() != n || b.cols() != 1 {
            return Err(ModelError::Shape {
                what: "B must be n x 1",
            });
        }
        if c.rows() != 1 || c.cols() != n {
            return Err(ModelError::Shape {
                what: "C must be 1 x n",
            });
        }
        if d.rows() != 1 || d.cols() != 1 {
            return Err(ModelError::Shape {
                what: "D must be 1 x 1",
            });
        }
        Ok(Self { a, b, c, d })
    }

    /// Controllable canonical realization of a transfer function.
    ///
    /// Deterministic: the same (num, den) pair always yields bit-identical
    /// matrices. After the Octave control toolbox `tf2ss`, via the
    /// single-output specialization: pad the numerator to the denominator
    /// length, normalize both by the leading denominator coefficient, then
    /// read the companion A, unit B, residual C and feed-through D straight
    /// off the normalized coefficients.
    pub fn from_tf(tf: &TransferFunction) -> ModelResult<Self> {
        if tf.num().is_empty() || tf.den().is_empty() {
            return Err(ModelError::InvalidTransferFunction {
                what: "empty polynomial",
            });
        }
        if tf.num().len() > tf.den().len() {
            return Err(ModelError::InvalidTransferFunction {
                what: "more zeros than poles",
            });
        }

        let den = tf.den().coeffs();
        let nd = den.len();

        // Pure static gain: no dynamics, only the feed-through path.
        if nd == 1 {
            let gain = tf.num().coeffs()[0] / den[0];
            return Ok(Self {
                a: Matrix::zeros(0, 0),
                b: Matrix::zeros(0, 1),
                c: Matrix::zeros(1, 0),
                d: Matrix::from_rows(vec![vec![gain]])?,
            });
        }

        let n = nd - 1;

        // Pad the numerator with leading zeros to the denominator length,
        // then normalize both by the leading denominator coefficient.
        let mut padded = vec![0.0; nd - tf.num().len()];
        padded.extend_from_slice(tf.num().coeffs());
        let d1 = den[0];
        let num_n = Polynomial::new(padded).scale(1.0 / d1);
        let den_n = Polynomial::new(den[1..].to_vec()).scale(1.0 / d1);

        // Companion A: superdiagonal of ones, bottom row the negated
        // normalized denominator in ascending-degree order.
        let mut a_rows = vec![vec![0.0; n]; n];
        for (i, row) in a_rows.iter_mut().enumerate().take(n - 1) {
            row[i + 1] = 1.0;
        }
        for (j, &coeff) in den_n.coeffs().iter().rev().enumerate() {
            a_rows[n - 1][j] = -coeff;
        }

        // Unit forcing on the last state.
        let mut b_rows = vec![vec![0.0]; n];
        b_rows[n - 1][0] = 1.0;

        // C = num[1:] - den_n * num[0], read out ascending-degree.
        let residual = Polynomial::new(num_n.coeffs()[1..].to_vec())
            .sub(&den_n.scale(num_n.coeffs()[0]));
        let c_row: Vec<f64> = residual.coeffs().iter().rev().copied().collect();

        Ok(Self {
            a: Matrix::from_rows(a_rows)?,
            b: Matrix::from_rows(b_rows)?,
            c: Matrix::from_rows(vec![c_row])?,
            d: Matrix::from_rows(vec![vec![num_n.coeffs()[0]]])?,
        })
    }

    /// Model order (number of states).
    pub fn order(&self) -> usize {
        self.a.rows()
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn c(&self) -> &Matrix {
        &self.c
    }

    pub fn d(&self) -> &Matrix {
        &self.d
    }
}
