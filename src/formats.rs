//! Conversions between our COO matrix format and the sprs library
//!
//! Used by tests to cross-validate multiplication against sprs, and available
//! to callers who want CSR access to a decoded matrix.

use num_traits::PrimInt;
use sprs::{CsMat, TriMat};

use crate::matrix::SparseMatrixCOO;

/// Converts our COO matrix format to sprs CsMat format (as CSR)
pub fn to_sprs<T>(matrix: &SparseMatrixCOO<T>) -> CsMat<T>
where
    T: PrimInt + Default,
{
    let mut tri = TriMat::with_capacity((matrix.n_rows, matrix.n_cols), matrix.nnz());
    // Insert in sorted order so the CSR conversion never has to merge duplicates
    for (r, c, v) in matrix.sorted_triplets() {
        tri.add_triplet(r, c, v);
    }
    tri.to_csr()
}

/// Converts a sprs CsMat (CSR or CSC) to our COO matrix format
pub fn from_sprs<T>(matrix: &CsMat<T>) -> SparseMatrixCOO<T>
where
    T: PrimInt + Default,
{
    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrixCOO::new(n_rows, n_cols);
    for (&v, (r, c)) in matrix.iter() {
        result.set(r, c, v);
    }
    result
}
