//! Time-ordered table of named numeric columns.
//!
//! ## Purpose
//!
//! `TimeSeriesTable` is the raw input of the pipeline: rows are time points in
//! order, columns are named variables. Missing observations are stored as
//! `None`.
//!
//! ## Design notes
//!
//! * **Ordered**: Row order is time order and is never changed.
//! * **Ingest**: Non-finite values (NaN, +/-inf) are stored as missing.
//! * **Builder-style**: Columns are added with `with_column`, consuming `self`.
//!
//! ## Invariants
//!
//! * All columns have the same length.
//! * Column names are unique.
//!
//! ## Non-goals
//!
//! * This module does not load data from files or other sources.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SsrError;

/// Time-ordered table of named numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTable<T> {
    n_rows: usize,
    columns: Vec<(String, Vec<Option<T>>)>,
}

impl<T: Float> Default for TimeSeriesTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TimeSeriesTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            n_rows: 0,
            columns: Vec::new(),
        }
    }

    /// Add a column of raw values; non-finite values become missing.
    pub fn with_column(self, name: &str, values: &[T]) -> Result<Self, SsrError> {
        let values = values
            .iter()
            .map(|&v| if v.is_finite() { Some(v) } else { None })
            .collect();
        self.with_optional_column(name, values)
    }

    /// Add a column with explicit missing cells.
    pub fn with_optional_column(
        mut self,
        name: &str,
        values: Vec<Option<T>>,
    ) -> Result<Self, SsrError> {
        if self.columns.iter().any(|(n, _)| n == name) {
            return Err(SsrError::DuplicateColumn(name.into()));
        }
        if self.columns.is_empty() {
            self.n_rows = values.len();
        } else if values.len() != self.n_rows {
            return Err(SsrError::MismatchedLengths {
                expected: self.n_rows,
                got: values.len(),
            });
        }

        // Non-finite "present" values are still missing.
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        self.columns.push((name.into(), values));
        Ok(self)
    }

    /// Number of rows (time points).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Whether a column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&[Option<T>], SsrError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_slice())
            .ok_or_else(|| SsrError::UnknownColumn(name.into()))
    }
}
