//! Coordinate (COO) sparse matrix storage keyed by (row, column)

use std::collections::HashMap;
use std::fmt;

use num_traits::PrimInt;

/// A sparse matrix holding only its non-zero entries
///
/// Entries are kept in a map keyed by (row, column), so lookup and update are
/// O(1) on average while the matrix stays proportional in memory to its
/// non-zero count. Two invariants hold at all times:
///
/// - no stored value is zero (`set` removes an entry instead of storing zero)
/// - each (row, column) pair appears at most once
///
/// `get` and `set` do not validate coordinates against the matrix dimensions;
/// bounds checking is the responsibility of the calling layer (the codec checks
/// decoded entries, the arithmetic operations check operand shapes). An
/// out-of-range `get` simply finds no entry and returns zero.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrixCOO<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    entries: HashMap<(usize, usize), T>,
}

impl<T> SparseMatrixCOO<T>
where
    T: PrimInt,
{
    /// Creates an empty matrix with the given fixed dimensions
    ///
    /// Zero rows or columns are allowed; the dimensions never change after
    /// construction.
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: HashMap::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut entries = HashMap::with_capacity(n);
        for i in 0..n {
            entries.insert((i, i), T::one());
        }
        Self {
            n_rows: n,
            n_cols: n,
            entries,
        }
    }

    /// Returns the number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns the matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the value at (row, col), or zero if no entry is stored there
    ///
    /// Performs no bounds check; an out-of-range coordinate matches no entry
    /// and yields zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Sets the value at (row, col), maintaining the non-zero invariant
    ///
    /// A non-zero value inserts or overwrites the entry. A zero value removes
    /// any existing entry and is a no-op on an absent coordinate. Performs no
    /// bounds check.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Returns an iterator over the stored entries as (row, col, value) triples
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(r, c), &v)| (r, c, v))
    }

    /// Returns the stored entries sorted by (row, column)
    ///
    /// This is the deterministic order the codec writes.
    pub fn sorted_triplets(&self) -> Vec<(usize, usize, T)> {
        let mut triplets: Vec<_> = self.iter().collect();
        triplets.sort_by_key(|&(r, c, _)| (r, c));
        triplets
    }
}

impl<T: fmt::Debug + PrimInt> fmt::Debug for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCOO {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let triplets = self.sorted_triplets();
        let max_entries_to_print = 8.min(triplets.len());

        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;
            for &(r, c, v) in &triplets[..max_entries_to_print] {
                writeln!(f, "    ({}, {}, {:?})", r, c, v)?;
            }
            if triplets.len() > max_entries_to_print {
                writeln!(
                    f,
                    "    ... ({} more entries)",
                    triplets.len() - max_entries_to_print
                )?;
            }
        }

        write!(f, "}}")
    }
}

impl<T: fmt::Display + PrimInt> fmt::Display for SparseMatrixCOO<T> {
    /// Renders the matrix densely, one row per line
    ///
    /// Intended for small matrices; a caller displaying results owns the
    /// decision of when this is appropriate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
