//! # Linal
//!
//! Small dense linear-algebra kernel: vectors, column-major matrices and
//! Gaussian elimination over `f32`, `f64` and their complex counterparts.
//!
//! One `use linal::prelude::*;` brings in the vector and matrix types, the
//! scalar traits, the error type and the free functions.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Vectors, matrices, elimination, free functions |
//! | `serde` | `Serialize` / `Deserialize` for `Vector` and `Matrix` |
//!
//! ```
//! use linal::prelude::*;
//!
//! let u = Vector::from([1.0, 2.0, 3.0]);
//! let v = Vector::from([4.0, 5.0, 6.0]);
//! assert_eq!(u.dot(&v)?, 32.0);
//! # Ok::<(), LinalError>(())
//! ```

pub use linal_core as core;

/// Glob-import convenience: `use linal::prelude::*;`
pub mod prelude {
    pub use linal_core::prelude::*;
}
