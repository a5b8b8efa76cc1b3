//! Addition, subtraction, and multiplication over COO sparse matrices
//!
//! Each operation is a pure function of its two operands: the operands are
//! read-only and the result is a freshly owned matrix. Accumulation goes
//! through `get`/`set`, so values that cancel to zero drop out of the result
//! rather than lingering as explicit zeros.

use std::collections::HashMap;

use num_traits::PrimInt;

use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrixCOO;

fn check_same_shape<T: PrimInt>(
    op: &'static str,
    a: &SparseMatrixCOO<T>,
    b: &SparseMatrixCOO<T>,
) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(SparseError::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Computes `a + b`
///
/// Fails with `DimensionMismatch` unless both operands have identical shape.
pub fn add<T: PrimInt>(
    a: &SparseMatrixCOO<T>,
    b: &SparseMatrixCOO<T>,
) -> Result<SparseMatrixCOO<T>> {
    check_same_shape("addition", a, b)?;

    let mut result = SparseMatrixCOO::new(a.n_rows, a.n_cols);
    for (r, c, v) in a.iter() {
        result.set(r, c, v);
    }
    for (r, c, v) in b.iter() {
        let current = result.get(r, c);
        result.set(r, c, current + v);
    }
    Ok(result)
}

/// Computes `a - b`
///
/// Fails with `DimensionMismatch` unless both operands have identical shape.
pub fn sub<T: PrimInt>(
    a: &SparseMatrixCOO<T>,
    b: &SparseMatrixCOO<T>,
) -> Result<SparseMatrixCOO<T>> {
    check_same_shape("subtraction", a, b)?;

    let mut result = SparseMatrixCOO::new(a.n_rows, a.n_cols);
    for (r, c, v) in a.iter() {
        result.set(r, c, v);
    }
    for (r, c, v) in b.iter() {
        let current = result.get(r, c);
        result.set(r, c, current - v);
    }
    Ok(result)
}

/// Computes `a * b`
///
/// Fails with `DimensionMismatch` unless `a.n_cols == b.n_rows`; the result has
/// shape `a.n_rows × b.n_cols`.
///
/// `b`'s entries are indexed by row (the contraction dimension) up front, so
/// each entry of `a` is paired only with the `b` entries it can actually
/// contribute with, instead of the full `|a| × |b|` cross product.
pub fn multiply<T: PrimInt>(
    a: &SparseMatrixCOO<T>,
    b: &SparseMatrixCOO<T>,
) -> Result<SparseMatrixCOO<T>> {
    if a.n_cols != b.n_rows {
        return Err(SparseError::DimensionMismatch {
            op: "multiplication",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (k, j, v) in b.iter() {
        b_rows.entry(k).or_default().push((j, v));
    }

    let mut result = SparseMatrixCOO::new(a.n_rows, b.n_cols);
    for (i, k, a_val) in a.iter() {
        if let Some(row) = b_rows.get(&k) {
            for &(j, b_val) in row {
                let current = result.get(i, j);
                result.set(i, j, current + a_val * b_val);
            }
        }
    }
    Ok(result)
}
