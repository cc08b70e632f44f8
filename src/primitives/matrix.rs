//! Dense row-major matrix with explicit missing cells.
//!
//! ## Purpose
//!
//! This module provides the `Matrix` container used for state-space
//! reconstructions. Every cell is an `Option<T>`; `None` marks a missing
//! value so that no sentinel ever takes part in arithmetic.
//!
//! ## Design notes
//!
//! * **Row-major**: Rows are time points, so a row is a contiguous slice.
//! * **Named columns**: Each column carries a name such as `y_2`.
//! * **Immutable**: Matrices are built once from complete columns.
//!
//! ## Invariants
//!
//! * `cells.len() == n_rows * names.len()`.
//! * Column names are unique.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SsrError;

// ============================================================================
// Matrix
// ============================================================================

/// Row-major matrix of optional values with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    n_rows: usize,
    names: Vec<String>,
    cells: Vec<Option<T>>,
}

impl<T: Float> Matrix<T> {
    /// Assemble a matrix from named columns of equal length.
    pub fn from_columns(columns: Vec<(String, Vec<Option<T>>)>) -> Result<Self, SsrError> {
        let n_rows = columns.first().map_or(0, |(_, c)| c.len());
        let n_cols = columns.len();

        let mut names: Vec<String> = Vec::with_capacity(n_cols);
        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err(SsrError::MismatchedLengths {
                    expected: n_rows,
                    got: col.len(),
                });
            }
            if names.contains(name) {
                return Err(SsrError::DuplicateColumn(name.clone()));
            }
            names.push(name.clone());
        }

        let mut cells = vec![None; n_rows * n_cols];
        for (j, (_, col)) in columns.iter().enumerate() {
            for (i, &v) in col.iter().enumerate() {
                cells[i * n_cols + j] = v;
            }
        }

        Ok(Self {
            n_rows,
            names,
            cells,
        })
    }

    /// Number of rows (time points).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Cell at (`row`, `col`); `None` if missing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells[row * self.n_cols() + col]
    }

    /// A full row as a slice of optional values.
    #[inline]
    pub fn row(&self, row: usize) -> &[Option<T>] {
        let n_cols = self.n_cols();
        &self.cells[row * n_cols..(row + 1) * n_cols]
    }

    /// A copy of one column.
    pub fn column(&self, col: usize) -> Vec<Option<T>> {
        (0..self.n_rows).map(|i| self.get(i, col)).collect()
    }

    /// Whether every cell of `row` is present.
    #[inline]
    pub fn row_is_complete(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_some)
    }

    /// Values of a complete row, or `None` if any cell is missing.
    pub fn complete_row(&self, row: usize) -> Option<Vec<T>> {
        self.row(row).iter().copied().collect()
    }
}
