//! Lag operator for time-indexed columns.
//!
//! ## Purpose
//!
//! Shifts a column by an integer number of time steps while keeping its
//! length, padding the vacated end with missing values.
//!
//! ## Key concepts
//!
//! * **Positive lag** `n`: `out[i] = in[i - n]`, the front `n` cells are missing.
//! * **Negative lag** `n`: `out[i] = in[i + |n|]`, the back `|n|` cells are missing.
//! * **Lag 0**: identity.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * Shifting by at least the length yields an all-missing column.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SsrError;
use crate::primitives::matrix::Matrix;

/// Shift `values` by `n` steps, padding with missing values.
pub fn lag<T: Copy>(values: &[Option<T>], n: isize) -> Vec<Option<T>> {
    let len = values.len() as isize;
    (0..len)
        .map(|i| {
            i.checked_sub(n)
                .filter(|src| (0..len).contains(src))
                .and_then(|src| values[src as usize])
        })
        .collect()
}

/// Lag every column of a matrix.
///
/// A single lag applies to all columns; otherwise there must be exactly one
/// lag per column.
pub fn lag_columns<T: Float>(matrix: &Matrix<T>, lags: &[isize]) -> Result<Matrix<T>, SsrError> {
    let n_cols = matrix.n_cols();
    if lags.len() != 1 && lags.len() != n_cols {
        return Err(SsrError::InvalidLagCount {
            lags: lags.len(),
            columns: n_cols,
        });
    }

    let columns = matrix
        .column_names()
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let n = if lags.len() == 1 { lags[0] } else { lags[j] };
            (name.clone(), lag(&matrix.column(j), n))
        })
        .collect();

    Matrix::from_columns(columns)
}
