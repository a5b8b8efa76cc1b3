//! Error types for sparse matrix construction, arithmetic, and the text codec

use thiserror::Error;

/// Errors surfaced by matrix operations and the triplet codec
///
/// Every error is terminal for the call that produced it: a decode that fails
/// part-way through never yields a partially populated matrix, and no operation
/// retries internally.
#[derive(Debug, Error)]
pub enum SparseError {
    /// A dimension header carried a negative value
    #[error("invalid dimension value `{value}`")]
    InvalidDimension { value: String },

    /// Operand shapes are incompatible for the requested operation
    #[error("{op}: operand shapes {lhs:?} and {rhs:?} are incompatible")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A header or data line could not be parsed
    #[error("line {line}: {reason}")]
    FormatError { line: usize, reason: String },

    /// A decoded entry falls outside the declared matrix dimensions
    #[error("entry ({row}, {col}) outside declared {n_rows}x{n_cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    /// The underlying text source or sink failed; propagated, never generated here
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for coomat operations
pub type Result<T> = std::result::Result<T, SparseError>;
