//! In-place arithmetic and reductions for [`Vector`].
//!
//! Mutators (`add`, `sub`, `scl`, `div`) return `()` / `Result<()>` and
//! validate before touching any element, so a failed call leaves the
//! receiver unchanged. Reductions return the scalar's real type.

use num_traits::Zero;

use crate::error::{LinalError, Result};
use crate::{Real, Scalar};

use super::Vector;

#[allow(clippy::should_implement_trait)]
impl<T: Scalar> Vector<T> {
    /// Element-wise `self += other`.
    ///
    /// ```
    /// # use linal_core::Vector;
    /// let mut u = Vector::from([1.0, 2.0, 3.0]);
    /// u.add(&Vector::from([4.0, 5.0, 6.0])).unwrap();
    /// assert_eq!(u, Vector::from([5.0, 7.0, 9.0]));
    /// assert!(u.add(&Vector::from([1.0, 2.0])).is_err());
    /// ```
    pub fn add(&mut self, other: &Vector<T>) -> Result<()> {
        self.check_same_size(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Element-wise `self -= other`.
    pub fn sub(&mut self, other: &Vector<T>) -> Result<()> {
        self.check_same_size(other)?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiply every element by `scalar`.
    pub fn scl(&mut self, scalar: T) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }

    /// Divide every element by `scalar`.
    ///
    /// Fails with [`LinalError::DivisionByZero`] when `scalar` is exactly
    /// zero.
    pub fn div(&mut self, scalar: T) -> Result<()> {
        if scalar.is_zero() {
            return Err(LinalError::DivisionByZero);
        }
        for x in &mut self.data {
            *x /= scalar;
        }
        Ok(())
    }

    /// Inner product `Σ conj(self_i) * other_i`, accumulated left to right.
    ///
    /// For real kinds each step is a fused multiply-add; for complex kinds
    /// the left operand is conjugated, so `u.dot(v) == conj(v.dot(u))`.
    ///
    /// ```
    /// # use linal_core::Vector;
    /// let u = Vector::from([1.0, 2.0, 3.0]);
    /// let v = Vector::from([4.0, 5.0, 6.0]);
    /// assert_eq!(u.dot(&v).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| a.conj_mul_add(b, acc)))
    }

    /// Manhattan norm: sum of magnitudes.
    pub fn norm_1(&self) -> T::Real {
        self.data
            .iter()
            .fold(T::Real::zero(), |acc, &x| acc + x.abs())
    }

    /// Euclidean norm: `sqrt(Σ |x_i|²)`.
    ///
    /// Squares are taken on the magnitude, not the raw value, so complex
    /// inputs produce a real result.
    pub fn norm(&self) -> T::Real {
        self.data
            .iter()
            .fold(T::Real::zero(), |acc, &x| {
                let m = x.abs();
                m.mul_add(m, acc)
            })
            .sqrt()
    }

    /// Supremum norm: largest magnitude, `0` for an empty vector.
    pub fn norm_inf(&self) -> T::Real {
        self.data.iter().fold(T::Real::zero(), |acc, &x| {
            let m = x.abs();
            if m > acc { m } else { acc }
        })
    }
}
