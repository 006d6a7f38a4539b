//! `linal-core`: dense linear algebra over real and complex scalars.
//!
//! Provides a fixed-length [`Vector`], a column-major [`Matrix`], and the
//! Gaussian-elimination family (row echelon form, determinant, inverse,
//! rank) on top of them.
//!
//! # Design
//!
//! - Generic over the element type via the [`Scalar`] / [`Real`] traits.
//!   `f32`, `f64` and `num_complex::Complex<f32 | f64>` are supported; other
//!   types are rejected at compile time.
//! - Mutators (`add`, `sub`, `scl`, `div`) work in place and return `()` or
//!   `Result<()>`. Products, transforms and eliminations return new values.
//! - Every fallible operation returns [`Result`]; preconditions are checked
//!   before anything is mutated.
//! - Matrix equality is approximate, within [`DEFAULT_TOLERANCE`].
//!
//! ```
//! use linal_core::prelude::*;
//!
//! let a = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]])?;
//! assert_eq!(a.determinant()?, 8.0);
//!
//! let mut half = Matrix::identity(3);
//! half.scl(0.5);
//! assert_eq!(a.inverse()?, half);
//!
//! let x = Vector::from([1.0, 0.0, 0.0]);
//! let y = Vector::from([0.0, 1.0, 0.0]);
//! assert_eq!(cross_product(&x, &y)?, Vector::from([0.0, 0.0, 1.0]));
//! # Ok::<(), LinalError>(())
//! ```

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::{Real, Scalar, ScalarKind};
pub use error::{LinalError, Result};
pub use linalg::{angle_cos, cross_product, lerp, linear_combination};
pub use matrix::Matrix;
pub use vector::Vector;

/// Per-element tolerance used by `Matrix` equality.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Items intended for glob-import: `use linal_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Real, Scalar, ScalarKind};
    pub use crate::error::{LinalError, Result};
    pub use crate::linalg::{angle_cos, cross_product, lerp, linear_combination};
    pub use crate::matrix::Matrix;
    pub use crate::vector::Vector;
}
