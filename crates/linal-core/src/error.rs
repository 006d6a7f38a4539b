use thiserror::Error;

/// All errors returned by `linal-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalError {
    /// Two vectors (or a vector list and a scalar list) differ in length.
    #[error("size mismatch: expected length {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// Matrix operands (or requested layouts) differ in `(rows, cols)`.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Inner dimensions of a product disagree, or an operation needs a
    /// fixed dimension the operands do not have.
    #[error("dimension mismatch in {op}: expected {expected}, got {got}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// The operation needs a square matrix.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Matrix is singular and cannot be inverted.
    #[error("singular matrix")]
    Singular,

    /// The input has no meaningful answer (e.g. angle with a zero vector).
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: &'static str },

    /// Division by an exact zero scalar.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation is not defined for the scalar kind in use.
    #[error("{op} is not supported for {kind} scalars")]
    UnsupportedType {
        op: &'static str,
        kind: crate::ScalarKind,
    },
}

/// Convenience alias used throughout `linal-core`.
pub type Result<T> = std::result::Result<T, LinalError>;
