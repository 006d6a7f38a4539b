//! Arithmetic, products and concatenation for [`Matrix`].
//!
//! | Operation | Requirement | Complexity |
//! |-----------|-------------|------------|
//! | `add`, `sub` | equal shapes | O(rows·cols) |
//! | `scl` | – | O(rows·cols) |
//! | `mul_vec` | `rows == v.size()` | O(rows·cols) |
//! | `mul_mat` | `cols == other.rows` | O(rows·cols·other.cols) |
//! | `trace` | square | O(n) |
//! | `hconcat` / `\|` | equal row counts | O(rows·(cols + other.cols)) |

use core::ops::BitOr;

use crate::error::{LinalError, Result};
use crate::{Scalar, Vector};

use super::Matrix;

#[allow(clippy::should_implement_trait)]
impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalError::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise `self += other`, column by column.
    pub fn add(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, b) in self.columns.iter_mut().zip(&other.columns) {
            a.add(b)?;
        }
        Ok(())
    }

    /// Element-wise `self -= other`, column by column.
    pub fn sub(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, b) in self.columns.iter_mut().zip(&other.columns) {
            a.sub(b)?;
        }
        Ok(())
    }

    /// Multiply every element by `scalar`.
    pub fn scl(&mut self, scalar: T) {
        for column in &mut self.columns {
            column.scl(scalar);
        }
    }

    /// Apply the matrix to `v` in the column-major convention.
    ///
    /// `v` must have one entry per row. The result has one entry per column:
    /// `result[c] = Σ_r self[c][r] * v[r]`.
    ///
    /// ```
    /// # use linal_core::{Matrix, Vector};
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let r = m.mul_vec(&Vector::from([1.0, 1.0])).unwrap();
    /// assert_eq!(r, Vector::from([5.0, 7.0, 9.0]));
    /// ```
    pub fn mul_vec(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.rows() != v.size() {
            return Err(LinalError::DimensionMismatch {
                op: "mul_vec",
                expected: self.rows(),
                got: v.size(),
            });
        }
        Ok(self
            .columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .zip(v)
                    .fold(T::zero(), |acc, (&a, &b)| a.mul_add(b, acc))
            })
            .collect())
    }

    /// Standard matrix product `self · other`.
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
    /// let c = a.mul_mat(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]]).unwrap());
    /// ```
    pub fn mul_mat(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols() != other.rows() {
            return Err(LinalError::DimensionMismatch {
                op: "mul_mat",
                expected: self.cols(),
                got: other.rows(),
            });
        }
        let rows = self.rows();
        let mut result = Matrix::zeros(rows, other.cols());

        for (out, rhs) in result.columns.iter_mut().zip(&other.columns) {
            for r in 0..rows {
                let mut acc = T::zero();
                for (k, column) in self.columns.iter().enumerate() {
                    acc = column[r].mul_add(rhs[k], acc);
                }
                out[r] = acc;
            }
        }
        Ok(result)
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinalError::NotSquare {
                op: "trace",
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self
            .columns
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, column)| acc + column[i]))
    }

    /// Horizontal concatenation: the columns of `other` follow those of
    /// `self`. Also available as `&a | &b`.
    pub fn hconcat(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows() != other.rows() {
            return Err(LinalError::ShapeMismatch {
                expected: (self.rows(), other.cols()),
                got: other.shape(),
            });
        }
        let columns = self
            .columns
            .iter()
            .chain(&other.columns)
            .cloned()
            .collect();
        Ok(Matrix { columns })
    }
}

impl<T: Scalar> BitOr for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.hconcat(rhs)
    }
}
