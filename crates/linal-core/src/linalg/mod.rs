//! Linear algebra on [`Vector`] and [`Matrix`].
//!
//! Free functions over vectors live here; the elimination algorithms are
//! methods on [`Matrix`] defined in [`elimination`].
//!
//! | Function | Requirement | Complexity |
//! |----------|-------------|------------|
//! | [`linear_combination`] | equal list lengths, equal vector sizes | O(k·n) |
//! | [`lerp`] | equal sizes | O(n) |
//! | [`angle_cos`] | equal sizes, nonzero norms | O(n) |
//! | [`cross_product`] | real scalars, size 3 | O(1) |
//!
//! [`Matrix`]: crate::Matrix

pub mod elimination;

use num_traits::Zero;

use crate::error::{LinalError, Result};
use crate::{Scalar, Vector};

/// `Σ scalars[i] * vectors[i]`, accumulated left to right with fused
/// multiply-adds.
///
/// An empty list yields an empty vector.
///
/// ```
/// # use linal_core::{Vector, linalg::linear_combination};
/// let e1 = Vector::from([1.0, 0.0, 0.0]);
/// let e2 = Vector::from([0.0, 1.0, 0.0]);
/// let v = linear_combination(&[e1, e2], &[10.0, -2.0]).unwrap();
/// assert_eq!(v, Vector::from([10.0, -2.0, 0.0]));
/// ```
pub fn linear_combination<T: Scalar>(vectors: &[Vector<T>], scalars: &[T]) -> Result<Vector<T>> {
    if vectors.len() != scalars.len() {
        return Err(LinalError::SizeMismatch {
            expected: vectors.len(),
            got: scalars.len(),
        });
    }
    let Some(first) = vectors.first() else {
        return Ok(Vector::default());
    };
    for v in &vectors[1..] {
        first.check_same_size(v)?;
    }

    Ok((0..first.size())
        .map(|j| {
            vectors
                .iter()
                .zip(scalars)
                .fold(T::zero(), |acc, (v, &s)| s.mul_add(v[j], acc))
        })
        .collect())
}

/// Linear interpolation `u + t * (v - u)`, one fused multiply-add per
/// element. `t` outside `[0, 1]` extrapolates.
///
/// ```
/// # use linal_core::{Vector, linalg::lerp};
/// let a = Vector::from([0.0, 0.0, 0.0]);
/// let b = Vector::from([10.0, 10.0, 10.0]);
/// assert_eq!(lerp(&a, &b, 0.5).unwrap(), Vector::from([5.0, 5.0, 5.0]));
/// ```
pub fn lerp<T: Scalar>(u: &Vector<T>, v: &Vector<T>, t: T) -> Result<Vector<T>> {
    u.check_same_size(v)?;
    Ok(u.iter().zip(v).map(|(&a, &b)| t.mul_add(b - a, a)).collect())
}

/// Cosine of the angle between `u` and `v`: `dot(u, v) / (|u| * |v|)`.
///
/// Fails with [`LinalError::DegenerateInput`] when either Euclidean norm is
/// exactly zero. For complex scalars the result carries the phase of the
/// inner product.
pub fn angle_cos<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<T> {
    let dot = u.dot(v)?;
    let (nu, nv) = (u.norm(), v.norm());
    if nu.is_zero() || nv.is_zero() {
        return Err(LinalError::DegenerateInput {
            reason: "angle with a zero-length vector",
        });
    }
    Ok(dot / T::from_real(nu * nv))
}

/// Right-handed cross product of two real 3-vectors.
///
/// Each component is a single fused multiply-add against the negated cross
/// term, e.g. `r0 = fma(u1, v2, -(u2 * v1))`.
///
/// ```
/// # use linal_core::{Vector, linalg::cross_product};
/// let x = Vector::from([1.0, 0.0, 0.0]);
/// let y = Vector::from([0.0, 1.0, 0.0]);
/// assert_eq!(cross_product(&x, &y).unwrap(), Vector::from([0.0, 0.0, 1.0]));
/// ```
pub fn cross_product<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>> {
    if !T::is_real() {
        return Err(LinalError::UnsupportedType {
            op: "cross_product",
            kind: T::KIND,
        });
    }
    for size in [u.size(), v.size()] {
        if size != 3 {
            return Err(LinalError::DimensionMismatch {
                op: "cross_product",
                expected: 3,
                got: size,
            });
        }
    }

    Ok(Vector::from([
        u[1].mul_add(v[2], -(u[2] * v[1])),
        u[2].mul_add(v[0], -(u[0] * v[2])),
        u[0].mul_add(v[1], -(u[1] * v[0])),
    ]))
}
