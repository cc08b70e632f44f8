//! Input validation for forecasting configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before a pipeline pass:
//! column references, focal indices, observed vectors, and builder state.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not treat missing data as an error; missing cells are
//!   part of the data model.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SsrError;
use crate::primitives::lag_spec::LagSpec;
use crate::primitives::table::TimeSeriesTable;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for forecasting configuration and input data.
///
/// All methods return `Result<(), SsrError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that a table is non-empty and holds every referenced column.
    ///
    /// `response` is `None` when the response is not read from the table.
    pub fn validate_table<T: Float>(
        table: &TimeSeriesTable<T>,
        response: Option<&str>,
        lag_spec: &LagSpec,
    ) -> Result<(), SsrError> {
        // Check 1: Non-empty table
        if table.n_rows() == 0 {
            return Err(SsrError::EmptyInput);
        }

        // Check 2: Response column exists
        if let Some(name) = response.filter(|r| !table.contains(r)) {
            return Err(SsrError::UnknownColumn(name.into()));
        }

        // Check 3: Every predictor column exists
        if let Some(missing) = lag_spec.variables().find(|v| !table.contains(v)) {
            return Err(SsrError::UnknownColumn(missing.into()));
        }

        Ok(())
    }

    /// Validate focal indices against the series length.
    pub fn validate_focal(focal: &[usize], n_rows: usize) -> Result<(), SsrError> {
        if let Some(&index) = focal.iter().find(|&&f| f >= n_rows) {
            return Err(SsrError::FocalOutOfRange {
                index,
                len: n_rows,
            });
        }
        Ok(())
    }

    /// Validate an observed response vector for within-row forecasting.
    pub fn validate_observed<T: Float>(
        observed: Option<&[T]>,
        n_rows: usize,
    ) -> Result<(), SsrError> {
        let observed = observed.ok_or(SsrError::MissingObserved)?;
        if observed.len() != n_rows {
            return Err(SsrError::MismatchedLengths {
                expected: n_rows,
                got: observed.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the response variable name.
    pub fn validate_response(response: Option<&str>) -> Result<(), SsrError> {
        match response {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(SsrError::InvalidInput(
                "a response variable must be named".into(),
            )),
        }
    }

    /// Validate that within-row mode keeps the response out of the embedding.
    pub fn validate_within_row(
        within_row: bool,
        response: &str,
        lag_spec: &LagSpec,
    ) -> Result<(), SsrError> {
        if !within_row {
            return Ok(());
        }
        if lag_spec.lags(response).is_some() {
            return Err(SsrError::InvalidInput(
                "within-row forecasting cannot use the response as a predictor".into(),
            ));
        }
        if lag_spec.is_empty() {
            return Err(SsrError::InvalidInput(
                "within-row forecasting needs at least one lagged predictor".into(),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SsrError> {
        if let Some(param) = duplicate_param {
            return Err(SsrError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
