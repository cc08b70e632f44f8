//! High-level API for state-space reconstruction forecasting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! configures one forecasting pass and produces a reusable model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Fitting is generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SsrBuilder`] via `Ssr::new()`.
//! 2. Chain configuration methods (`.response()`, `.lags()`, `.focal()`, etc.).
//! 3. Call `.build()` to obtain an [`SsrModel`].
//! 4. Call `.fit(&table)` (or `.fit_within_row(&table, &observed)`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SsrExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::distance_matrix::{DistanceMatrix, FocalMode, build_distance_matrix};
pub use crate::algorithms::embedding::{StateSpace, build_predictor_ssr, build_ssr};
pub use crate::algorithms::neighbors::{Forecast, NeighborSet, forecast};
pub use crate::algorithms::rescale::rescale;
pub use crate::algorithms::subsets::{SubsetLags, bitmask, enumerate_subset_lags};
pub use crate::engine::executor::SsrConfig;
pub use crate::engine::output::SsrResult;
pub use crate::math::lag::{lag, lag_columns};
pub use crate::math::moments::{Moments, standardize};
pub use crate::primitives::errors::SsrError;
pub use crate::primitives::lag_spec::LagSpec;
pub use crate::primitives::matrix::Matrix;
pub use crate::primitives::table::TimeSeriesTable;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a forecasting pass.
#[derive(Debug, Clone, Default)]
pub struct SsrBuilder {
    /// Response column name.
    pub response: Option<String>,

    /// Lagged predictors.
    pub lag_spec: Option<LagSpec>,

    /// Time indices to forecast (default: every time point after the first).
    pub focal: Option<Vec<usize>>,

    /// Focal row selection (default: `Exact`).
    pub focal_mode: Option<FocalMode>,

    /// Within-row forecasting (default: false).
    pub within_row: Option<bool>,

    /// Keep projected neighbor sets in the result (default: false).
    pub return_neighbors: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SsrBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response column.
    pub fn response(mut self, name: &str) -> Self {
        if self.response.is_some() {
            self.duplicate_param = Some("response");
        }
        self.response = Some(name.into());
        self
    }

    /// Set the lagged predictors.
    pub fn lags(mut self, spec: LagSpec) -> Self {
        if self.lag_spec.is_some() {
            self.duplicate_param = Some("lags");
        }
        self.lag_spec = Some(spec);
        self
    }

    /// Set the time indices to forecast (0-based).
    pub fn focal<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        if self.focal.is_some() {
            self.duplicate_param = Some("focal");
        }
        self.focal = Some(indices.into_iter().collect());
        self
    }

    /// Set how focal indices select distance rows.
    pub fn focal_mode(mut self, mode: FocalMode) -> Self {
        if self.focal_mode.is_some() {
            self.duplicate_param = Some("focal_mode");
        }
        self.focal_mode = Some(mode);
        self
    }

    /// Exclude the response from the embedding and forecast an observed vector.
    pub fn within_row(mut self) -> Self {
        if self.within_row.is_some() {
            self.duplicate_param = Some("within_row");
        }
        self.within_row = Some(true);
        self
    }

    /// Keep the projected neighbor sets in the result.
    pub fn return_neighbors(mut self) -> Self {
        if self.return_neighbors.is_some() {
            self.duplicate_param = Some("return_neighbors");
        }
        self.return_neighbors = Some(true);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<SsrModel, SsrError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate the response name
        Validator::validate_response(self.response.as_deref())?;
        let response = self.response.unwrap_or_default();

        let lag_spec = self.lag_spec.unwrap_or_default();
        let within_row = self.within_row.unwrap_or(false);

        // Validate within-row constraints
        Validator::validate_within_row(within_row, &response, &lag_spec)?;

        // Without explicit focal times, forecast everything that has a prior state.
        let (focal, focal_mode) = match self.focal {
            Some(focal) => (focal, self.focal_mode.unwrap_or_default()),
            None => (Vec::from([0]), FocalMode::FromEarliest),
        };

        Ok(SsrModel {
            config: SsrConfig {
                response,
                lag_spec,
                focal,
                focal_mode,
                within_row,
                return_neighbors: self.return_neighbors.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated forecasting configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SsrModel {
    config: SsrConfig,
}

impl SsrModel {
    /// The validated configuration.
    pub fn config(&self) -> &SsrConfig {
        &self.config
    }

    /// Forecast from a table, reading targets from the embedded response.
    pub fn fit<T: Float>(&self, table: &TimeSeriesTable<T>) -> Result<SsrResult<T>, SsrError> {
        SsrExecutor::run_with_config(table, None, &self.config)
    }

    /// Forecast from a table, reading targets from `observed`.
    ///
    /// Only meaningful for models built with `.within_row()`; otherwise
    /// `observed` is ignored.
    pub fn fit_within_row<T: Float>(
        &self,
        table: &TimeSeriesTable<T>,
        observed: &[T],
    ) -> Result<SsrResult<T>, SsrError> {
        SsrExecutor::run_with_config(table, Some(observed), &self.config)
    }
}
