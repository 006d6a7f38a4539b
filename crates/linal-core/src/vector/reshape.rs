//! Conversion of a flat [`Vector`] into a [`Matrix`].

use crate::Scalar;
use crate::error::{LinalError, Result};
use crate::matrix::Matrix;

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Interpret the vector as `rows` contiguous rows of length `cols`.
    ///
    /// The flat data is read in row-major order regardless of the matrix's
    /// column-major storage: row `i` of the result is
    /// `self[i * cols .. (i + 1) * cols]`.
    ///
    /// ```
    /// # use linal_core::{Matrix, Vector};
    /// let m = Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).reshape(2, 3).unwrap();
    /// assert_eq!(m, Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap());
    /// ```
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Matrix<T>> {
        if rows.checked_mul(cols) != Some(self.size()) {
            return Err(LinalError::ShapeMismatch {
                expected: (rows, cols),
                got: (1, self.size()),
            });
        }
        let columns = (0..cols)
            .map(|c| (0..rows).map(|r| self.data[r * cols + c]).collect())
            .collect();
        Ok(Matrix::from_columns_unchecked(columns))
    }
}
