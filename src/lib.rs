//! # coomat: integer sparse matrix arithmetic over coordinate storage
//!
//! This library represents integer-valued sparse matrices by their non-zero
//! entries only and supports addition, subtraction, and multiplication between
//! two matrices, plus a line-oriented text format for loading and saving them.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! 1. **Storage**: [`SparseMatrixCOO`] keeps fixed dimensions and a map of
//!    non-zero entries keyed by (row, column). Writing a zero through
//!    [`SparseMatrixCOO::set`] removes the entry, so "stored" and "non-zero"
//!    stay synonymous.
//!
//! 2. **Operations and codec**: the stateless functions [`add`], [`sub`], and
//!    [`multiply`] combine two matrices into a freshly owned result, and
//!    [`decode`]/[`encode`] translate matrices to and from the triplet text
//!    format. All failures are reported as [`SparseError`] values; nothing is
//!    retried or partially recovered.
//!
//! The core is single-threaded and synchronous; callers own all scheduling,
//! path resolution, and result display.
//!
//! ## Usage
//!
//! ```
//! use coomat::{decode, encode, multiply};
//!
//! # fn main() -> coomat::Result<()> {
//! let a = decode::<i64, _>("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n".as_bytes())?;
//! let b = decode::<i64, _>("rows=2\ncols=2\n(0, 1, 3)\n".as_bytes())?;
//!
//! let product = multiply(&a, &b)?;
//! assert_eq!(product.get(0, 1), 3);
//!
//! let mut out = Vec::new();
//! encode(&mut out, &product)?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod formats;
pub mod matrix;

// Re-export primary components
pub use codec::{decode, encode, read_matrix, write_matrix, IoConfig};
pub use error::{Result, SparseError};
pub use formats::{from_sprs, to_sprs};
pub use matrix::{add, from_dense, multiply, sub, to_dense, SparseMatrixCOO};

/// Version information for the coomat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
