//! Gaussian elimination on [`Matrix`]: reduced row echelon form,
//! determinant, inverse and rank.
//!
//! All routines work on a private copy and leave the receiver untouched.
//! Zero tests are exact; no tolerance is applied to pivots or to the
//! determinant.
//!
//! The three eliminations pivot differently:
//!
//! - `row_echelon` scans down the current column for a nonzero entry and
//!   swaps the row just above it into place;
//! - `determinant` keeps the diagonal entry unless it is exactly zero, in
//!   which case it swaps up the first nonzero row below;
//! - `inverse` always selects the largest magnitude among the remaining rows.

use log::{debug, trace};

use crate::Scalar;
use crate::error::{LinalError, Result};
use crate::matrix::Matrix;

impl<T: Scalar> Matrix<T> {
    fn require_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(LinalError::NotSquare {
                op,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// Row echelon form with back-substitution.
    ///
    /// For each row the current column is scanned downward for a nonzero
    /// entry, moving on to the next column when the scan wraps past the
    /// last row. The row *just above* the one found is swapped into place,
    /// and the pivot is normalized to one unless it is exactly zero.
    /// Entries below the pivot are then cleared.
    ///
    /// If the scan runs out of columns the partially reduced matrix is
    /// returned as is. Otherwise back-substitution clears the entries above
    /// each row's leading entry, from the last row upward.
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    /// let r = m.row_echelon();
    /// assert_eq!(r, Matrix::from_rows(&[[1.0, 2.0], [0.0, 0.0]]).unwrap());
    /// ```
    pub fn row_echelon(&self) -> Matrix<T> {
        let mut work = self.clone();
        let (rows, cols) = work.shape();
        let mut lead = 0;

        for r in 0..rows {
            if lead >= cols {
                break;
            }

            let mut found = r;
            while work[(found, lead)].is_zero() {
                found += 1;
                if found == rows {
                    found = r;
                    lead += 1;
                    if lead == cols {
                        trace!("row_echelon: no pivot left for row {r}");
                        return work;
                    }
                }
            }
            if found != r {
                trace!("row_echelon: swap rows {r} and {}", found - 1);
                work.swap_rows(r, found - 1);
            }

            let pivot = work[(r, lead)];
            if !pivot.is_zero() {
                work.divide_row(r, pivot);
            }
            for below in r + 1..rows {
                let factor = work[(below, lead)];
                if !factor.is_zero() {
                    work.sub_scaled_row(below, r, factor);
                }
            }
            lead += 1;
        }

        for r in (0..rows).rev() {
            let Some(col) = work.leading_column(r) else {
                continue;
            };
            for above in 0..r {
                let factor = work[(above, col)];
                if !factor.is_zero() {
                    work.sub_scaled_row(above, r, factor);
                }
            }
        }
        work
    }

    /// Determinant of a square matrix.
    ///
    /// `1x1` and `2x2` use the closed form. Larger matrices are reduced to
    /// upper triangular form without normalizing rows; the result is the
    /// product of the diagonal, negated once per odd number of row swaps.
    /// The empty matrix has determinant one.
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let m = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 8.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        let n = self.require_square("determinant")?;
        match n {
            0 => return Ok(T::one()),
            1 => return Ok(self[(0, 0)]),
            2 => {
                let (a, b) = (self[(0, 0)], self[(0, 1)]);
                let (c, d) = (self[(1, 0)], self[(1, 1)]);
                return Ok(a.mul_add(d, -(b * c)));
            }
            _ => {}
        }

        let mut work = self.clone();
        let mut swaps = 0_usize;

        for k in 0..n {
            if work[(k, k)].is_zero() {
                let Some(p) = (k + 1..n).find(|&i| !work[(i, k)].is_zero()) else {
                    debug!("determinant: column {k} has no nonzero pivot, matrix is singular");
                    return Ok(T::zero());
                };
                trace!("determinant: swap rows {k} and {p}");
                work.swap_rows(k, p);
                swaps += 1;
            }

            let pivot = work[(k, k)];
            for i in k + 1..n {
                let factor = work[(i, k)] / pivot;
                if factor.is_zero() {
                    continue;
                }
                for j in k..n {
                    work[(i, j)] = (-factor).mul_add(work[(k, j)], work[(i, j)]);
                }
            }
        }

        let det = (0..n).fold(T::one(), |acc, i| acc * work[(i, i)]);
        Ok(if swaps % 2 == 1 { -det } else { det })
    }

    /// Inverse by Gauss–Jordan elimination on `[A | I]`.
    ///
    /// Fails with [`LinalError::Singular`] when the determinant is exactly
    /// zero, or when a zero pivot turns up during elimination.
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.mul_mat(&m).unwrap(), Matrix::identity(2));
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let n = self.require_square("inverse")?;
        if self.determinant()?.is_zero() {
            debug!("inverse: determinant is zero");
            return Err(LinalError::Singular);
        }

        let mut aug = self.hconcat(&Matrix::identity(n))?;
        for i in 0..n {
            let best = (i + 1..n).fold(i, |best, r| {
                if aug[(r, i)].abs() > aug[(best, i)].abs() {
                    r
                } else {
                    best
                }
            });
            if best != i {
                trace!("inverse: swap rows {i} and {best}");
                aug.swap_rows(i, best);
            }

            let pivot = aug[(i, i)];
            if pivot.is_zero() {
                debug!("inverse: zero pivot in column {i}");
                return Err(LinalError::Singular);
            }
            aug.divide_row(i, pivot);

            for r in 0..n {
                let factor = aug[(r, i)];
                if r != i && !factor.is_zero() {
                    aug.sub_scaled_row(r, i, factor);
                }
            }
        }

        let mut columns = aug.into_columns();
        Ok(Matrix::from_columns_unchecked(columns.split_off(n)))
    }

    /// Number of nonzero rows in [`row_echelon`](Self::row_echelon).
    ///
    /// ```
    /// # use linal_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    /// assert_eq!(m.rank(), 2);
    /// ```
    pub fn rank(&self) -> usize {
        let reduced = self.row_echelon();
        (0..reduced.rows())
            .filter(|&r| reduced.leading_column(r).is_some())
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use num_complex::Complex;

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn mat(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_row_echelon_identity_and_full_rank() {
        init();
        let eye = Matrix::<f64>::identity(3);
        assert_eq!(eye.row_echelon(), eye);

        let m = mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0]]);
        assert_eq!(m.row_echelon(), Matrix::identity(3));
    }

    #[test]
    fn test_row_echelon_rank_deficient() {
        init();
        let m = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(m.row_echelon(), mat(&[&[1.0, 2.0], &[0.0, 0.0]]));
        // receiver unchanged
        assert_eq!(m, mat(&[&[1.0, 2.0], &[2.0, 4.0]]));
    }

    #[test]
    fn test_row_echelon_swaps_row_above_found() {
        init();
        // the nonzero entry sits in row 1, so row 0 swaps with itself
        let m = mat(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(m.row_echelon(), mat(&[&[0.0, 1.0], &[-1.0, 1.0]]));

        let m = mat(&[&[0.0, 0.0, 1.0], &[0.0, 2.0, 4.0], &[3.0, 0.0, 0.0]]);
        assert_eq!(
            m.row_echelon(),
            mat(&[&[0.0, 2.0, 0.0], &[0.0, 0.0, 1.0], &[-0.5, 1.0, 1.0]])
        );
    }

    #[test]
    fn test_row_echelon_exhausted_scan_skips_back_substitution() {
        init();
        let m = mat(&[&[1.0, 1.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]]);
        assert_eq!(m.row_echelon(), m);
    }

    #[test]
    fn test_row_echelon_skips_zero_column() {
        init();
        let m = mat(&[&[0.0, 2.0, 4.0], &[0.0, 1.0, 3.0]]);
        assert_eq!(m.row_echelon(), mat(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]));
    }

    #[test]
    fn test_row_echelon_rectangular() {
        init();
        let m = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        // the last row has no pivot, so reduction stops before
        // back-substitution
        assert_eq!(
            m.row_echelon(),
            mat(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]])
        );

        let wide = mat(&[&[2.0, 4.0, 6.0, 8.0], &[1.0, 3.0, 5.0, 7.0]]);
        assert_eq!(
            wide.row_echelon(),
            mat(&[&[1.0, 0.0, -1.0, -2.0], &[0.0, 1.0, 2.0, 3.0]])
        );
    }

    #[test]
    fn test_row_echelon_empty_and_zero() {
        init();
        assert!(Matrix::<f64>::default().row_echelon().is_empty());
        let z = Matrix::<f64>::zeros(2, 3);
        assert_eq!(z.row_echelon(), z);
    }

    #[test]
    fn test_determinant_closed_forms() {
        init();
        assert_eq!(mat(&[&[-3.0]]).determinant().unwrap(), -3.0);
        assert_eq!(mat(&[&[1.0, -1.0], &[-1.0, 1.0]]).determinant().unwrap(), 0.0);
        assert_eq!(mat(&[&[3.0, 8.0], &[4.0, 6.0]]).determinant().unwrap(), -14.0);
        assert_eq!(Matrix::<f64>::default().determinant().unwrap(), 1.0);
    }

    #[test]
    fn test_determinant_elimination() {
        init();
        let m = mat(&[&[2.0, 0.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0]]);
        assert_eq!(m.determinant().unwrap(), 8.0);

        let m = mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0]]);
        assert!((m.determinant().unwrap() + 174.0).abs() < 1e-9);

        let m = mat(&[
            &[8.0, 5.0, -2.0, 4.0],
            &[4.0, 2.5, 20.0, 4.0],
            &[8.0, 5.0, 1.0, 4.0],
            &[28.0, -4.0, 17.0, 1.0],
        ]);
        assert!((m.determinant().unwrap() - 1032.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinant_swap_parity() {
        init();
        // one swap needed: zero in the top-left corner
        let m = mat(&[&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]]);
        assert_eq!(m.determinant().unwrap(), -1.0);
    }

    #[test]
    fn test_determinant_singular_column() {
        init();
        let m = mat(&[&[0.0, 1.0, 2.0], &[0.0, 3.0, 4.0], &[0.0, 5.0, 6.0]]);
        assert_eq!(m.determinant().unwrap(), 0.0);
        let m = mat(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[1.0, 0.0, 1.0]]);
        assert_eq!(m.determinant().unwrap(), 0.0);
    }

    #[test]
    fn test_determinant_not_square() {
        let err = mat(&[&[1.0, 2.0, 3.0]]).determinant().unwrap_err();
        assert_eq!(
            err,
            LinalError::NotSquare {
                op: "determinant",
                rows: 1,
                cols: 3
            }
        );
    }

    #[test]
    fn test_inverse() {
        init();
        let m = mat(&[&[2.0, 0.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(
            inv,
            mat(&[&[0.5, 0.0, 0.0], &[0.0, 0.5, 0.0], &[0.0, 0.0, 0.5]])
        );

        let m = mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0]]);
        let inv = m.inverse().unwrap();
        let expected = mat(&[
            &[0.649_425_287, 0.097_701_149, -0.655_172_414],
            &[-0.781_609_195, -0.126_436_782, 0.965_517_241],
            &[0.143_678_161, 0.074_712_644, -0.206_896_552],
        ]);
        assert_eq!(inv, expected);
        assert_eq!(inv.mul_mat(&m).unwrap(), Matrix::identity(3));
        assert_eq!(m.mul_mat(&inv).unwrap(), Matrix::identity(3));
    }

    #[test]
    fn test_inverse_singular() {
        init();
        let m = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(m.inverse().unwrap_err(), LinalError::Singular);
    }

    #[test]
    fn test_inverse_not_square() {
        let err = mat(&[&[1.0, 2.0]]).inverse().unwrap_err();
        assert!(matches!(err, LinalError::NotSquare { op: "inverse", .. }));
    }

    #[test]
    fn test_inverse_complex() {
        init();
        let i = Complex::new(0.0, 1.0);
        let one = Complex::new(1.0, 0.0);
        let zero = Complex::new(0.0, 0.0);
        let m = Matrix::from_rows(&[[i, zero], [zero, one]]).unwrap();
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from_rows(&[[-i, zero], [zero, one]]).unwrap());
    }

    #[test]
    fn test_rank() {
        init();
        assert_eq!(Matrix::<f64>::identity(3).rank(), 3);
        assert_eq!(mat(&[&[1.0, 2.0], &[2.0, 4.0]]).rank(), 1);
        assert_eq!(
            mat(&[&[1.0, 2.0, 0.0, 0.0], &[2.0, 4.0, 0.0, 0.0], &[-1.0, 2.0, 1.0, 1.0]]).rank(),
            2
        );
        assert_eq!(
            mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0], &[21.0, 18.0, 7.0]])
                .rank(),
            3
        );
        assert_eq!(Matrix::<f64>::zeros(3, 2).rank(), 0);
    }
}
