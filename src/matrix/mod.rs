// Matrix data structures and operations

pub mod coo;
pub mod dense;
pub mod ops;

pub use coo::SparseMatrixCOO;
pub use dense::{from_dense, to_dense};
pub use ops::{add, multiply, sub};
