//! Dense matrix stored as a list of column vectors.
//!
//! [`Matrix`] keeps one [`Vector`] per column, so `m[c]` is column `c` and
//! `m[c][r]` is the element in row `r` of that column. Element-wise
//! arithmetic and products live in `ops`; elimination algorithms (row
//! echelon form, determinant, inverse, rank) in [`crate::linalg`].

mod display;
mod ops;

use core::ops::{Index, IndexMut};

use crate::error::{LinalError, Result};
use crate::{DEFAULT_TOLERANCE, Real, Scalar, Vector};

/// An `rows x cols` matrix in column-major storage.
///
/// Every column has the same length, which is the row count. A matrix with
/// no columns, or whose first column is empty, has zero rows.
///
/// Equality is approximate: two matrices of the same shape compare equal
/// when every pair of elements differs by at most [`DEFAULT_TOLERANCE`] in
/// magnitude.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vector<T>>", into = "Vec<Vector<T>>")
)]
pub struct Matrix<T: Scalar> {
    columns: Vec<Vector<T>>,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            columns: vec![Vector::zeros(rows); cols],
        }
    }

    /// Create a matrix from row literals.
    ///
    /// Every row must have the length of the first one, otherwise
    /// [`LinalError::ShapeMismatch`] is returned.
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4.0);
    ///
    /// let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        let cols = first.as_ref().len();
        let mut columns = vec![Vector::zeros(rows.len()); cols];

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalError::ShapeMismatch {
                    expected: (1, cols),
                    got: (1, row.len()),
                });
            }
            for (column, &value) in columns.iter_mut().zip(row) {
                column[r] = value;
            }
        }
        Ok(Self { columns })
    }

    /// Create a matrix directly from its columns (no transposition).
    ///
    /// All columns must share one length.
    pub fn from_columns(columns: Vec<Vector<T>>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let rows = first.size();
            if let Some(bad) = columns.iter().find(|c| c.size() != rows) {
                return Err(LinalError::ShapeMismatch {
                    expected: (rows, 1),
                    got: (bad.size(), 1),
                });
            }
        }
        Ok(Self { columns })
    }

    /// 4x4 matrix with `value` on the diagonal and zeros elsewhere.
    pub fn from_scalar(value: T) -> Self {
        let mut m = Self::zeros(4, 4);
        for i in 0..4 {
            m.columns[i][i] = value;
        }
        m
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.columns[i][i] = T::one();
        }
        m
    }

    /// Build from columns already known to share one length.
    pub(crate) fn from_columns_unchecked(columns: Vec<Vector<T>>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].size() == w[1].size()));
        Self { columns }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows (length of every column).
    #[inline]
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vector::size)
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// Column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> &Vector<T> {
        &self.columns[col]
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Vector<T>] {
        &self.columns
    }

    /// Copy of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Vector<T> {
        self.columns.iter().map(|c| c[row]).collect()
    }

    // ------------------------------------------------------------------
    // Shape transforms
    // ------------------------------------------------------------------

    /// All elements in column-major storage order.
    ///
    /// ```
    /// # use linal_core::{Matrix, Vector};
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.flatten(), Vector::from([1.0, 3.0, 2.0, 4.0]));
    /// ```
    pub fn flatten(&self) -> Vector<T> {
        self.columns.iter().flat_map(Vector::iter).copied().collect()
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix<T> {
        let columns = (0..self.rows()).map(|r| self.row(r)).collect();
        Self { columns }
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Same shape, and every element pair within `tol` in magnitude.
    pub fn approx_eq(&self, other: &Matrix<T>, tol: T::Real) -> bool {
        self.shape() == other.shape()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.iter().zip(b).all(|(&x, &y)| (x - y).abs() <= tol))
    }

    // ------------------------------------------------------------------
    // Row operations shared by the elimination algorithms
    // ------------------------------------------------------------------

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        for column in &mut self.columns {
            column.as_mut_slice().swap(a, b);
        }
    }

    pub(crate) fn divide_row(&mut self, row: usize, divisor: T) {
        for column in &mut self.columns {
            column[row] /= divisor;
        }
    }

    /// `row[target] -= factor * row[source]`
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for column in &mut self.columns {
            let s = column[source];
            column[target] -= factor * s;
        }
    }

    /// First column holding a nonzero entry in `row`.
    pub(crate) fn leading_column(&self, row: usize) -> Option<usize> {
        self.columns.iter().position(|c| !c[row].is_zero())
    }

    pub(crate) fn into_columns(self) -> Vec<Vector<T>> {
        self.columns
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, T::Real::from_f64(DEFAULT_TOLERANCE))
    }
}

/// `m[c]` is column `c`.
impl<T: Scalar> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    #[inline]
    fn index(&self, col: usize) -> &Vector<T> {
        &self.columns[col]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Vector<T> {
        &mut self.columns[col]
    }
}

/// `m[(r, c)]` is the element in row `r`, column `c`.
impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.columns[col][row]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.columns[col][row]
    }
}

impl<T: Scalar> TryFrom<Vec<Vector<T>>> for Matrix<T> {
    type Error = LinalError;

    fn try_from(columns: Vec<Vector<T>>) -> Result<Self> {
        Self::from_columns(columns)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vector<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.columns
    }
}
