//! Scalar kinds supported by the kernel.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar            (f32, f64, Complex<f32>, Complex<f64>)
//!   └── Real        (f32, f64)
//! ```
//!
//! Every [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix) routine is
//! generic over [`Scalar`]. Behaviour differs between kinds in exactly three
//! places, all captured here:
//!
//! - magnitude ([`Scalar::abs`]), always returned as the associated real type;
//! - multiply-accumulate: real kinds fuse (`mul_add`), complex kinds do not;
//! - ordering, which only [`Real`] provides.
//!
//! Element types outside this set do not implement [`Scalar`], so they are
//! rejected by the compiler instead of at call time.

use core::fmt;
use core::ops::Neg;

use num_complex::Complex;
use num_traits::NumAssign;

/// Closed tag naming the category of a [`Scalar`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Ordered floating-point numbers.
    Real,
    /// Complex numbers over a [`Real`] type.
    Complex,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Complex => f.write_str("complex"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar: every element type storable in a Vector / Matrix
// ---------------------------------------------------------------------------

/// Base trait for vector and matrix elements.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Default
    + Send
    + Sync
    + NumAssign
    + Neg<Output = Self>
    + 'static
{
    /// Real type used for magnitudes, norms and tolerances.
    type Real: Real;

    /// Category of this scalar type.
    const KIND: ScalarKind;

    /// Non-negative magnitude `|self|`.
    fn abs(self) -> Self::Real;

    /// Complex conjugate; the identity for real kinds.
    fn conj(self) -> Self;

    /// Embed a real value into this scalar type.
    fn from_real(value: Self::Real) -> Self;

    /// `self * a + b`, fused into a single rounding step for real kinds.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Dot-product step: `conj(self) * rhs + acc`.
    ///
    /// Real kinds compute this as a fused multiply-add. Complex kinds
    /// conjugate the left operand and accumulate without fusion.
    fn conj_mul_add(self, rhs: Self, acc: Self) -> Self;

    /// Whether this scalar type is ordered.
    #[inline]
    fn is_real() -> bool {
        Self::KIND == ScalarKind::Real
    }
}

// ---------------------------------------------------------------------------
// Real: ordered scalars
// ---------------------------------------------------------------------------

/// Real-valued floating-point scalars (`f32`, `f64`).
///
/// A real type is its own [`Scalar::Real`], and is the only kind that
/// supports `<` / `>`.
pub trait Real: Scalar<Real = Self> + PartialOrd {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;
}

// ===========================================================================
// Implementations
// ===========================================================================

macro_rules! impl_real {
    ($ty:ty) => {
        impl Scalar for $ty {
            type Real = $ty;

            const KIND: ScalarKind = ScalarKind::Real;

            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn from_real(value: Self) -> Self {
                value
            }
            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                <$ty>::mul_add(self, a, b)
            }
            #[inline]
            fn conj_mul_add(self, rhs: Self, acc: Self) -> Self {
                <$ty>::mul_add(self, rhs, acc)
            }
        }

        impl Real for $ty {
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

impl<R: Real> Scalar for Complex<R> {
    type Real = R;

    const KIND: ScalarKind = ScalarKind::Complex;

    /// Euclidean magnitude `sqrt(re² + im²)`, with `re²` folded into a
    /// fused multiply-add.
    #[inline]
    fn abs(self) -> R {
        self.re.mul_add(self.re, self.im * self.im).sqrt()
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn from_real(value: R) -> Self {
        Complex::new(value, R::zero())
    }

    #[inline]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    #[inline]
    fn conj_mul_add(self, rhs: Self, acc: Self) -> Self {
        Complex::conj(&self) * rhs + acc
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    type C64 = Complex<f64>;

    #[test]
    fn test_kind_tags() {
        assert_eq!(f32::KIND, ScalarKind::Real);
        assert_eq!(f64::KIND, ScalarKind::Real);
        assert_eq!(C64::KIND, ScalarKind::Complex);
        assert!(f64::is_real());
        assert!(!C64::is_real());
        assert_eq!(ScalarKind::Complex.to_string(), "complex");
    }

    #[test]
    fn test_real_abs() {
        assert_eq!(Scalar::abs(-3.5_f64), 3.5);
        assert_eq!(Scalar::abs(2.0_f32), 2.0);
        assert_eq!(Scalar::abs(-0.0_f64), 0.0);
    }

    #[test]
    fn test_complex_abs() {
        let z = C64::new(3.0, -4.0);
        assert!((Scalar::abs(z) - 5.0).abs() < 1e-12);
        assert_eq!(Scalar::abs(C64::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_real_conj_is_identity() {
        assert_eq!(Scalar::conj(-1.25_f64), -1.25);
    }

    #[test]
    fn test_conj_mul_add_real() {
        assert_eq!(2.0_f64.conj_mul_add(3.0, 1.0), 7.0);
    }

    #[test]
    fn test_conj_mul_add_complex_conjugates_left() {
        // conj(i) * i + 0 = -i * i = 1
        let i = C64::new(0.0, 1.0);
        let r = i.conj_mul_add(i, C64::new(0.0, 0.0));
        assert_eq!(r, C64::new(1.0, 0.0));

        // plain multiply-add does not conjugate: i * i + 0 = -1
        let r = Scalar::mul_add(i, i, C64::new(0.0, 0.0));
        assert_eq!(r, C64::new(-1.0, 0.0));
    }

    #[test]
    fn test_from_real() {
        assert_eq!(C64::from_real(2.0), C64::new(2.0, 0.0));
        assert_eq!(f32::from_real(2.0), 2.0);
    }

    #[test]
    fn test_real_helpers() {
        assert_eq!(Real::sqrt(16.0_f64), 4.0);
        assert_eq!(<f32 as Real>::from_f64(0.5), 0.5_f32);
    }
}
