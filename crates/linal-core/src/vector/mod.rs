//! Fixed-length vector of scalars.
//!
//! A [`Vector`] owns a contiguous buffer whose length is set at construction
//! and never changes afterwards. In-place arithmetic lives in `ops`, the
//! flat-to-matrix conversion in `reshape`.

mod display;
mod ops;
mod reshape;

use core::ops::{Index, IndexMut};

use crate::Scalar;

/// An ordered, 0-indexed sequence of scalars.
///
/// Equality is exact and element-wise; use
/// [`Matrix::approx_eq`](crate::Matrix::approx_eq) when comparing results of
/// floating-point elimination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a zero-filled vector of length `size`.
    ///
    /// ```
    /// # use linal_core::Vector;
    /// let v = Vector::<f64>::zeros(3);
    /// assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    /// Create a vector that takes ownership of `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the vector and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Fail with `SizeMismatch` unless `other` has the same length.
    pub(crate) fn check_same_size(&self, other: &Self) -> crate::Result<()> {
        if self.size() != other.size() {
            return Err(crate::LinalError::SizeMismatch {
                expected: self.size(),
                got: other.size(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Default for Vector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T: Scalar> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::<f32>::zeros(4);
        assert_eq!(v.size(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_default_is_empty() {
        let v = Vector::<f64>::default();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn test_from_array_and_index() {
        let mut v = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(v[1], 2.0);
        v[1] = 20.0;
        assert_eq!(v.as_slice(), &[1.0, 20.0, 3.0]);
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_from_iter() {
        let v: Vector<f64> = (1..=3).map(f64::from).collect();
        assert_eq!(v, Vector::from(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector::from([1.0, 2.0]);
        assert_eq!(a, Vector::from_slice(&[1.0, 2.0]));
        assert_ne!(a, Vector::from([1.0, 2.000_001]));
        assert_ne!(a, Vector::from([1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_into_vec_roundtrip() {
        let v = Vector::from_vec(vec![4.0_f32, 5.0]);
        let raw: Vec<f32> = v.clone().into();
        assert_eq!(raw, v.into_vec());
    }
}
