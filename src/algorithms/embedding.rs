//! State-space reconstruction (SSR) builder.
//!
//! ## Purpose
//!
//! This module turns a time series table and a lag specification into a
//! standardized embedding: one row per time point, one column per
//! coordinate. The first column is the response, named by the variable
//! alone; the remaining columns are the lagged predictors named
//! `variable_lag`. The response may also appear among the predictors, so
//! `x` and `x_0` can coexist.
//!
//! ## Design notes
//!
//! * **Standardize, then lag**: Each referenced variable is z-scored over its
//!   present values before it is shifted, so lagging never changes the moments.
//! * **Aligned rows**: The SSR always has as many rows as the table. Rows
//!   whose lags run past the table boundary hold missing cells.
//! * **Within-row variant**: `build_predictor_ssr` omits the response column
//!   so that the response plays no part in neighbor search.
//!
//! ## Key concepts
//!
//! * **Embedding dimension**: Number of SSR columns.
//! * **Zero variance**: A constant column standardizes to 0/0; those cells are
//!   stored as missing and propagate downstream.
//!
//! ## Invariants
//!
//! * `n_rows == table.n_rows()`.
//! * `n_cols == 1 + lag_spec.total_lags()` (or `total_lags()` without response).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::lag::lag;
use crate::math::moments::{Moments, standardize};
use crate::primitives::errors::SsrError;
use crate::primitives::lag_spec::{LagSpec, column_name};
use crate::primitives::matrix::Matrix;
use crate::primitives::table::TimeSeriesTable;

// ============================================================================
// SSR
// ============================================================================

/// A standardized state-space reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace<T> {
    matrix: Matrix<T>,
    response: Option<String>,
    response_moments: Option<Moments<T>>,
    lag_spec: LagSpec,
}

impl<T: Float> StateSpace<T> {
    /// The embedding matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Number of time points.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.matrix.n_rows()
    }

    /// Embedding dimension (number of columns).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.matrix.n_cols()
    }

    /// Number of neighbors used per forecast: embedding dimension + 1.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.n_cols() + 1
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        self.matrix.column_names()
    }

    /// The lag specification the predictors were built from.
    pub fn lag_spec(&self) -> &LagSpec {
        &self.lag_spec
    }

    /// Name of the response variable, if it is part of the embedding.
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Whether the first column is the standardized response.
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Moments used to standardize the response, if it is part of the embedding.
    pub fn response_moments(&self) -> Option<Moments<T>> {
        self.response_moments
    }

    /// The standardized response column.
    pub fn response_column(&self) -> Option<Vec<Option<T>>> {
        self.response.as_ref().map(|_| self.matrix.column(0))
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Build an SSR whose first column is the standardized `response`.
pub fn build_ssr<T: Float>(
    table: &TimeSeriesTable<T>,
    response: &str,
    lag_spec: &LagSpec,
) -> Result<StateSpace<T>, SsrError> {
    build(table, Some(response), lag_spec)
}

/// Build an SSR from lagged predictors only, for within-row forecasting.
pub fn build_predictor_ssr<T: Float>(
    table: &TimeSeriesTable<T>,
    lag_spec: &LagSpec,
) -> Result<StateSpace<T>, SsrError> {
    if lag_spec.is_empty() {
        return Err(SsrError::InvalidInput(
            "an embedding without the response needs at least one lagged predictor".into(),
        ));
    }
    build(table, None, lag_spec)
}

fn build<T: Float>(
    table: &TimeSeriesTable<T>,
    response: Option<&str>,
    lag_spec: &LagSpec,
) -> Result<StateSpace<T>, SsrError> {
    if table.n_rows() == 0 {
        return Err(SsrError::EmptyInput);
    }

    let mut columns: Vec<(String, Vec<Option<T>>)> =
        Vec::with_capacity(lag_spec.total_lags() + 1);

    let mut response_moments = None;
    if let Some(name) = response {
        let raw = table.column(name)?;
        response_moments = Some(Moments::of(raw));
        columns.push((String::from(name), standardize(raw)));
    }

    for (variable, lags) in lag_spec.entries() {
        let standardized = standardize(table.column(variable)?);
        for &n in lags {
            columns.push((column_name(variable, n), lag(&standardized, n)));
        }
    }

    let matrix = Matrix::from_columns(columns)?;

    log::debug!(
        "built SSR: {} rows x {} columns ({})",
        matrix.n_rows(),
        matrix.n_cols(),
        response.map_or_else(|| String::from("predictors only"), |r| format!("response '{r}'")),
    );

    Ok(StateSpace {
        matrix,
        response: response.map(String::from),
        response_moments,
        lag_spec: lag_spec.clone(),
    })
}
