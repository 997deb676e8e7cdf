//! Dense rectangular matrix algebra.
//!
//! Storage is row-major `f64`. The only structural invariant is that every
//! row has the same length; it is checked once at construction and holds
//! for the lifetime of the value.

use crate::error::{AlgebraError, AlgebraResult};
use cf_core::Real;

/// Rectangular matrix of `Real` values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl Matrix {
    /// Build a matrix from nested rows.
    ///
    /// Fails when rows have inconsistent lengths.
    pub fn from_rows(rows: Vec<Vec<Real>>) -> AlgebraResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(AlgebraError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Zero matrix of the given size.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Identity matrix of the given order.
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order, order);
        for i in 0..order {
            m.data[i * order + i] = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col); out-of-range reads return 0.
    ///
    /// The forgiving read keeps the zero-padding `add`/`sub` semantics in
    /// one place.
    pub fn get(&self, row: usize, col: usize) -> Real {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col]
        } else {
            0.0
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Real) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Sum of two matrices.
    ///
    /// Differently sized operands are zero-padded up to the bounding
    /// rows x cols, so the sum never fails.
    pub fn add(&self, rhs: &Matrix) -> Matrix {
        let rows = self.rows.max(rhs.rows);
        let cols = self.cols.max(rhs.cols);
        let mut out = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                out.set(i, j, self.get(i, j) + rhs.get(i, j));
            }
        }
        out
    }

    /// Difference of two matrices, with the same padding as [`add`].
    ///
    /// [`add`]: Matrix::add
    pub fn sub(&self, rhs: &Matrix) -> Matrix {
        self.add(&rhs.scale(-1.0))
    }

    /// Standard matrix product; requires `self.cols == rhs.rows`.
    pub fn mul(&self, rhs: &Matrix) -> AlgebraResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(AlgebraError::DimensionMismatch {
                what: "matrix product",
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.get(i, k) * rhs.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    /// Element-wise multiplication by a scalar.
    pub fn scale(&self, k: Real) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| v * k).collect(),
        }
    }

    /// Transpose.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }
}
