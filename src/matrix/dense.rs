//! Conversions between COO matrices and dense ndarray representations

use ndarray::Array2;
use num_traits::PrimInt;

use crate::matrix::SparseMatrixCOO;

/// Converts a COO matrix to a dense 2-D array
pub fn to_dense<T: PrimInt>(matrix: &SparseMatrixCOO<T>) -> Array2<T> {
    let mut dense = Array2::from_elem((matrix.n_rows, matrix.n_cols), T::zero());
    for (r, c, v) in matrix.iter() {
        dense[[r, c]] = v;
    }
    dense
}

/// Converts a dense 2-D array to a COO matrix, eliding zero elements
pub fn from_dense<T: PrimInt>(dense: &Array2<T>) -> SparseMatrixCOO<T> {
    let (n_rows, n_cols) = dense.dim();
    let mut matrix = SparseMatrixCOO::new(n_rows, n_cols);
    for ((r, c), &v) in dense.indexed_iter() {
        matrix.set(r, c, v);
    }
    matrix
}
