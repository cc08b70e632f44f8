//! Execution engine for one forecasting pass.
//!
//! ## Purpose
//!
//! This module runs the full pipeline for a single embedding: build the
//! state-space reconstruction, mask the distance matrix, project nearest
//! neighbors, and rescale the forecast to the response scale.
//!
//! ## Design notes
//!
//! * **Pure**: A pass is a function of (table, configuration, observed vector).
//! * **Within-row**: The embedding is built without the response, and
//!   neighbors read from the standardized observed vector instead.
//! * **Logging**: Each stage reports its shape through the `log` facade.
//!
//! ## Invariants
//!
//! * Every output vector has one entry per table row.
//!
//! ## Non-goals
//!
//! * This module does not run multiple lag subsets or combine their outputs.
//! * This module does not validate builder parameters (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::distance_matrix::{FocalMode, build_distance_matrix};
use crate::algorithms::embedding::{build_predictor_ssr, build_ssr};
use crate::algorithms::neighbors::forecast;
use crate::algorithms::rescale::rescale;
use crate::engine::output::SsrResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SsrError;
use crate::primitives::lag_spec::LagSpec;
use crate::primitives::table::TimeSeriesTable;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one forecasting pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SsrConfig {
    /// Name of the response column.
    pub response: String,

    /// Lagged predictors forming the embedding.
    pub lag_spec: LagSpec,

    /// Time indices to forecast (0-based).
    pub focal: Vec<usize>,

    /// How `focal` selects distance rows.
    pub focal_mode: FocalMode,

    /// Exclude the response from the embedding and read targets from an observed vector.
    pub within_row: bool,

    /// Keep the projected neighbor sets in the result.
    pub return_neighbors: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs one pipeline pass.
pub struct SsrExecutor;

impl SsrExecutor {
    /// Forecast `config.focal` from `table`.
    ///
    /// `observed` is required in within-row mode and ignored otherwise.
    pub fn run_with_config<T: Float>(
        table: &TimeSeriesTable<T>,
        observed: Option<&[T]>,
        config: &SsrConfig,
    ) -> Result<SsrResult<T>, SsrError> {
        let table_response = (!config.within_row).then_some(config.response.as_str());
        Validator::validate_table(table, table_response, &config.lag_spec)?;
        Validator::validate_focal(&config.focal, table.n_rows())?;

        let (ssr, observed_response) = if config.within_row {
            Validator::validate_observed(observed, table.n_rows())?;
            let observed: Vec<Option<T>> = observed
                .unwrap_or_default()
                .iter()
                .map(|&v| if v.is_finite() { Some(v) } else { None })
                .collect();
            (build_predictor_ssr(table, &config.lag_spec)?, observed)
        } else {
            (
                build_ssr(table, &config.response, &config.lag_spec)?,
                table.column(&config.response)?.to_vec(),
            )
        };

        let distances = build_distance_matrix(&ssr, &config.focal, config.focal_mode)?;
        let projected = forecast(&ssr, &distances, config.within_row, observed)?;
        let rescaled = rescale(&observed_response, &projected.values)?;

        log::debug!(
            "pass complete: response '{}', {} of {} focal times forecast",
            config.response,
            projected.defined_count(),
            config.focal.len()
        );

        Ok(SsrResult {
            forecast: projected.values,
            rescaled,
            observed: observed_response,
            columns: ssr.column_names().to_vec(),
            neighbor_count: ssr.neighbor_count(),
            within_row: config.within_row,
            neighbors: config.return_neighbors.then_some(projected.neighbors),
        })
    }
}
