//! # SSR — State-Space Reconstruction Forecasting for Rust
//!
//! Empirical, nearest-neighbor forecasting of a scalar response over a
//! reconstructed state space: a non-parametric analogue of nonlinear
//! dynamical forecasting, as used for example to predict ecological
//! recruitment from lagged environmental drivers.
//!
//! ## What is state-space reconstruction?
//!
//! A multivariate time series is turned into a cloud of points, one per time
//! step, whose coordinates are the (standardized) response and lagged copies
//! of its predictors. Points that are close in this space are assumed to
//! evolve similarly, so the future of a focal point is estimated from what
//! happened one step after its nearest earlier analogues.
//!
//! **How a pass works:**
//!
//! 1. Standardize every referenced variable and lag the predictors (the SSR)
//! 2. Compute distances between SSR rows, masking future and missing neighbors
//! 3. Take the E + 1 nearest neighbors of each focal row (E = embedding dimension)
//! 4. Weight them by `exp(-d / d_min)` and advance each neighbor one time step
//! 5. Average the response found there and rescale it to the original units
//!
//! ## Quick Start
//!
//! ```rust
//! use ssr_rs::prelude::*;
//!
//! let x: Vec<f64> = (1..=30).map(|i| (i as f64 * 0.7).sin()).collect();
//! let y: Vec<f64> = (1..=30).map(|i| (i as f64 * 0.3).cos()).collect();
//!
//! let table = TimeSeriesTable::new()
//!     .with_column("x", &x)?
//!     .with_column("y", &y)?;
//!
//! let model = Ssr::new()
//!     .response("x")
//!     .lags(LagSpec::new().with("y", &[0, 1, 2, 3])?)
//!     .focal(19..=24)
//!     .build()?;
//!
//! let result = model.fit(&table)?;
//! assert_eq!(result.defined_count(), 6);
//! println!("{}", result);
//! # Result::<(), SsrError>::Ok(())
//! ```
//!
//! ## Pipeline Functions
//!
//! Every stage is also available on its own:
//!
//! ```rust
//! use ssr_rs::prelude::*;
//!
//! let x: Vec<f64> = (1..=30).map(f64::from).collect();
//! let y: Vec<f64> = (31..=60).map(f64::from).collect();
//! let table = TimeSeriesTable::new()
//!     .with_column("x", &x)?
//!     .with_column("y", &y)?;
//! let lags = LagSpec::new().with("y", &[0, 1, 2, 3])?;
//!
//! let ssr = build_ssr(&table, "x", &lags)?;
//! let distances = build_distance_matrix(&ssr, &[19, 20, 21, 22, 23, 24], Exact)?;
//! let projected = forecast(&ssr, &distances, false, None)?;
//! let rescaled = rescale(table.column("x")?, &projected.values)?;
//!
//! assert_eq!(ssr.n_cols(), 5);
//! assert_eq!(rescaled.iter().filter(|v| v.is_some()).count(), 6);
//! # Result::<(), SsrError>::Ok(())
//! ```
//!
//! ## Missing Values
//!
//! Missing cells are `Option::None` throughout. They are never errors:
//! lags running past the table boundary, zero-variance columns, and focal
//! rows with too few neighbors all yield missing forecasts, and the caller
//! decides how to treat them. Only argument errors (unknown columns,
//! mismatched lengths, bad lag counts) are reported through [`SsrError`].
//!
//! ## Lag Subsets
//!
//! [`enumerate_subset_lags`] lists the `2^L - 1` non-empty subsets of a lag
//! specification with L (variable, lag) pairs, numbered by bitmask. Each
//! subset is an independent embedding; ranking and combining them is left
//! to the caller.
//!
//! ```rust
//! use ssr_rs::prelude::*;
//!
//! let lags = LagSpec::new().with("y", &[1, 2])?.with("z", &[0])?;
//! let subsets = enumerate_subset_lags(&lags)?;
//! assert_eq!(subsets.len(), 7);
//! assert_eq!(subsets[0].column_names(), vec!["y_1"]);
//! # Result::<(), SsrError>::Ok(())
//! ```
//!
//! ## Within-Row Forecasting
//!
//! When the response is attributed to an earlier time than it is realized,
//! build the model with `.within_row()`. The response is left out of the
//! embedding and neighbors read their targets from an observed vector:
//!
//! ```rust
//! use ssr_rs::prelude::*;
//!
//! let z: Vec<f64> = (0..40).map(|i| (i as f64 * 0.5).sin()).collect();
//! let observed: Vec<f64> = (0..40).map(|i| (i as f64 * 0.5).cos()).collect();
//! let table = TimeSeriesTable::new().with_column("z", &z)?;
//!
//! let model = Ssr::new()
//!     .response("recruits")
//!     .lags(LagSpec::new().with("z", &[0, 1])?)
//!     .focal(30..40)
//!     .within_row()
//!     .build()?;
//!
//! let result = model.fit_within_row(&table, &observed)?;
//! assert_eq!(result.embedding_dimension(), 2);
//! # Result::<(), SsrError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ssr-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Each pipeline stage emits `debug` records through the [`log`] facade.
//! Install any `log`-compatible logger to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the input table, lag specifications, the missing-aware matrix,
// and the error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the lag operator, missing-aware moments, and distances.
mod math;

// Layer 3: Algorithms - the forecasting pipeline.
//
// Contains subset enumeration, SSR construction, distance masking,
// nearest-neighbor projection, and rescaling.
mod algorithms;

// Layer 4: Engine - orchestration of one pass.
//
// Contains validation, execution, and result assembly.
mod engine;

// High-level fluent API.
//
// Provides the `Ssr` builder and the pipeline functions.
mod api;

pub use api::{
    DistanceMatrix, FocalMode, Forecast, LagSpec, Matrix, Moments, NeighborSet, SsrBuilder,
    SsrConfig, SsrError, SsrModel, SsrResult, StateSpace, SubsetLags, TimeSeriesTable, bitmask,
    build_distance_matrix, build_predictor_ssr, build_ssr, enumerate_subset_lags, forecast, lag,
    lag_columns, rescale, standardize,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ssr_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DistanceMatrix,
        FocalMode::{self, Exact, FromEarliest},
        Forecast, LagSpec, NeighborSet, SsrBuilder as Ssr, SsrError, SsrModel, SsrResult,
        SubsetLags, TimeSeriesTable, build_distance_matrix, build_predictor_ssr, build_ssr,
        enumerate_subset_lags, forecast, rescale, standardize,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal pipeline algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
