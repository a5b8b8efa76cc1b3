//! Line-oriented text codec for COO sparse matrices
//!
//! The format is two header lines followed by one parenthesized triplet per
//! stored entry:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (2, 2, -7)
//! ```
//!
//! Blank and whitespace-only lines are skipped. Entries may appear in any
//! order; a duplicate coordinate is resolved last-write-wins. `encode` writes
//! entries sorted by (row, column) so output files are reproducible across
//! runs.
//!
//! The decode and encode functions work over any `BufRead`/`Write`;
//! `read_matrix` and `write_matrix` wrap them for filesystem paths. Directory
//! layout is an explicit [`IoConfig`] value owned by the caller, never global
//! state.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use num_traits::PrimInt;

use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrixCOO;

/// Input and output directories for matrix files
///
/// Replaces ambient working-directory configuration: the caller constructs one
/// of these at startup and passes it wherever paths are resolved.
#[derive(Debug, Clone)]
pub struct IoConfig {
    /// Directory matrix input files are read from
    pub input_dir: PathBuf,

    /// Directory result files are written to
    pub output_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }
}

impl IoConfig {
    /// Creates a configuration with the given input and output directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Resolves a filename against the input directory
    pub fn input_path(&self, filename: &str) -> PathBuf {
        self.input_dir.join(filename)
    }

    /// Resolves a filename against the output directory
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Creates both directories if they do not already exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.input_dir)?;
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

/// Parses a matrix from a line-oriented text source
///
/// Fails with `FormatError` on a malformed header or data line, with
/// `InvalidDimension` on a negative dimension value, with `OutOfBounds` when an
/// entry's coordinates fall outside the declared dimensions, and with `Io` when
/// the reader itself fails. Any failure abandons the whole parse; no partially
/// populated matrix escapes.
pub fn decode<T, R>(reader: R) -> Result<SparseMatrixCOO<T>>
where
    T: PrimInt,
    R: BufRead,
{
    let mut lines = reader.lines().enumerate();
    let mut last_line = 0;

    let n_rows = next_header(&mut lines, "rows", &mut last_line)?;
    let n_cols = next_header(&mut lines, "cols", &mut last_line)?;

    let mut matrix = SparseMatrixCOO::new(n_rows, n_cols);
    for (idx, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry::<T>(trimmed, idx + 1)?;
        if row >= n_rows || col >= n_cols {
            return Err(SparseError::OutOfBounds {
                row,
                col,
                n_rows,
                n_cols,
            });
        }
        matrix.set(row, col, value);
    }
    Ok(matrix)
}

/// Writes the textual form of a matrix: headers first, then one triplet line
/// per entry, sorted by (row, column)
pub fn encode<T, W>(writer: &mut W, matrix: &SparseMatrixCOO<T>) -> Result<()>
where
    T: PrimInt + fmt::Display,
    W: Write,
{
    writeln!(writer, "rows={}", matrix.n_rows)?;
    writeln!(writer, "cols={}", matrix.n_cols)?;
    for (r, c, v) in matrix.sorted_triplets() {
        writeln!(writer, "({}, {}, {})", r, c, v)?;
    }
    Ok(())
}

/// Reads and decodes a matrix file
pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrixCOO<T>>
where
    T: PrimInt,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Encodes a matrix and writes it to a file
pub fn write_matrix<T, P>(path: P, matrix: &SparseMatrixCOO<T>) -> Result<()>
where
    T: PrimInt + fmt::Display,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, matrix)?;
    writer.flush()?;
    Ok(())
}

/// Consumes lines until the `<key>=` header is found, skipping blanks
fn next_header<I>(lines: &mut I, key: &str, last_line: &mut usize) -> Result<usize>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    for (idx, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line_no = idx + 1;
        *last_line = line_no;

        let value = match trimmed.strip_prefix(key).and_then(|r| r.strip_prefix('=')) {
            Some(rest) => rest.trim(),
            None => {
                return Err(SparseError::FormatError {
                    line: line_no,
                    reason: format!("expected `{key}=` header, found `{trimmed}`"),
                })
            }
        };

        let parsed: i64 = value.parse().map_err(|_| SparseError::FormatError {
            line: line_no,
            reason: format!("non-integer dimension `{value}`"),
        })?;
        if parsed < 0 {
            return Err(SparseError::InvalidDimension {
                value: value.to_string(),
            });
        }
        return Ok(parsed as usize);
    }

    Err(SparseError::FormatError {
        line: *last_line + 1,
        reason: format!("missing `{key}=` header"),
    })
}

/// Parses one `(row, col, value)` data line
fn parse_entry<T: PrimInt>(line: &str, line_no: usize) -> Result<(usize, usize, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| SparseError::FormatError {
            line: line_no,
            reason: format!("entry `{line}` is not parenthesized"),
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return Err(SparseError::FormatError {
            line: line_no,
            reason: format!("expected 3 fields per entry, found {}", fields.len()),
        });
    }

    let row = parse_coordinate(fields[0], line_no)?;
    let col = parse_coordinate(fields[1], line_no)?;
    let value_str = fields[2].trim();
    let value = T::from_str_radix(value_str, 10).map_err(|_| SparseError::FormatError {
        line: line_no,
        reason: format!("non-integer value `{value_str}`"),
    })?;

    Ok((row, col, value))
}

fn parse_coordinate(field: &str, line_no: usize) -> Result<usize> {
    let trimmed = field.trim();
    trimmed.parse().map_err(|_| SparseError::FormatError {
        line: line_no,
        reason: format!("non-integer coordinate `{trimmed}`"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(input: &str) -> Result<SparseMatrixCOO<i64>> {
        decode(input.as_bytes())
    }

    #[test]
    fn test_decode_basic() {
        let matrix = decode_str("rows=2\ncols=2\n(0, 0, 5)\n(1,1,-3)\n").unwrap();

        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.get(0, 0), 5);
        assert_eq!(matrix.get(1, 1), -3);
        assert_eq!(matrix.get(0, 1), 0);
        assert_eq!(matrix.get(1, 0), 0);
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let matrix = decode_str("\nrows=2\n\n  \ncols=3\n\n(1, 2, 9)\n\n").unwrap();

        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.get(1, 2), 9);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_decode_tolerates_field_whitespace() {
        let matrix = decode_str("rows=1\ncols=3\n(  0 ,\t2 ,  -11 )\n").unwrap();

        assert_eq!(matrix.get(0, 2), -11);
    }

    #[test]
    fn test_decode_duplicate_coordinate_last_write_wins() {
        let matrix = decode_str("rows=1\ncols=1\n(0, 0, 3)\n(0, 0, 8)\n").unwrap();

        assert_eq!(matrix.get(0, 0), 8);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_decode_explicit_zero_entry_is_elided() {
        let matrix = decode_str("rows=2\ncols=2\n(0, 1, 0)\n").unwrap();

        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_decode_wrong_field_count() {
        let err = decode_str("rows=1\ncols=1\n(0,0)\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 3, .. }));

        let err = decode_str("rows=1\ncols=1\n(0, 0, 1, 2)\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 3, .. }));
    }

    #[test]
    fn test_decode_missing_parentheses() {
        let err = decode_str("rows=1\ncols=1\n0, 0, 1\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { .. }));
    }

    #[test]
    fn test_decode_non_integer_value() {
        let err = decode_str("rows=1\ncols=1\n(0, 0, x)\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { .. }));
    }

    #[test]
    fn test_decode_row_out_of_bounds() {
        let err = decode_str("rows=2\ncols=2\n(2, 0, 1)\n").unwrap_err();
        assert!(matches!(
            err,
            SparseError::OutOfBounds {
                row: 2,
                col: 0,
                n_rows: 2,
                n_cols: 2,
            }
        ));
    }

    #[test]
    fn test_decode_col_out_of_bounds() {
        let err = decode_str("rows=2\ncols=2\n(0, 5, 1)\n").unwrap_err();
        assert!(matches!(err, SparseError::OutOfBounds { col: 5, .. }));
    }

    #[test]
    fn test_decode_missing_header() {
        let err = decode_str("(0, 0, 1)\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 1, .. }));

        let err = decode_str("rows=2\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 2, .. }));

        let err = decode_str("").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 1, .. }));
    }

    #[test]
    fn test_decode_non_integer_dimension() {
        let err = decode_str("rows=two\ncols=2\n").unwrap_err();
        assert!(matches!(err, SparseError::FormatError { line: 1, .. }));
    }

    #[test]
    fn test_decode_negative_dimension() {
        let err = decode_str("rows=-1\ncols=2\n").unwrap_err();
        assert!(matches!(err, SparseError::InvalidDimension { .. }));
    }

    #[test]
    fn test_decode_empty_matrix() {
        let matrix = decode_str("rows=0\ncols=0\n").unwrap();

        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_encode_sorted_output() {
        let mut matrix = SparseMatrixCOO::new(3, 3);
        matrix.set(2, 0, 1i64);
        matrix.set(0, 2, 2);
        matrix.set(0, 1, 3);

        let mut buffer = Vec::new();
        encode(&mut buffer, &matrix).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "rows=3\ncols=3\n(0, 1, 3)\n(0, 2, 2)\n(2, 0, 1)\n"
        );
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut original = SparseMatrixCOO::new(4, 5);
        original.set(3, 4, -100i64);
        original.set(0, 0, 1);
        original.set(2, 1, 42);

        let mut buffer = Vec::new();
        encode(&mut buffer, &original).unwrap();
        let roundtrip: SparseMatrixCOO<i64> = decode(buffer.as_slice()).unwrap();

        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_io_config_paths() {
        let config = IoConfig::new("inputs", "results");

        assert_eq!(config.input_path("a.txt"), PathBuf::from("inputs/a.txt"));
        assert_eq!(config.output_path("r.txt"), PathBuf::from("results/r.txt"));
    }
}
