//! Output types for a forecasting pass.
//!
//! ## Purpose
//!
//! This module defines `SsrResult`, which bundles the standardized and
//! rescaled forecasts of one embedding together with the metadata needed to
//! interpret them.
//!
//! ## Design notes
//!
//! * **Aligned**: Every vector has one entry per time point of the input table.
//! * **Optional outputs**: Neighbor sets are only kept when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Non-goals
//!
//! * This module does not score or rank forecasts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::neighbors::NeighborSet;

// ============================================================================
// Result Structure
// ============================================================================

/// Forecasts produced by one pass over one embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct SsrResult<T> {
    /// Forecast in z-score units, one entry per time point.
    pub forecast: Vec<Option<T>>,

    /// Forecast on the response scale.
    pub rescaled: Vec<Option<T>>,

    /// Observed response used for rescaling.
    pub observed: Vec<Option<T>>,

    /// Embedding column names.
    pub columns: Vec<String>,

    /// Number of neighbors used per forecast.
    pub neighbor_count: usize,

    /// Whether the pass ran in within-row mode.
    pub within_row: bool,

    /// Projected neighbor sets, if requested.
    pub neighbors: Option<Vec<Option<NeighborSet<T>>>>,
}

impl<T: Float> SsrResult<T> {
    /// Number of time points.
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    /// True for an empty series.
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Embedding dimension.
    pub fn embedding_dimension(&self) -> usize {
        self.columns.len()
    }

    /// Time indices that received a forecast.
    pub fn forecast_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.forecast
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|_| i))
    }

    /// Number of defined forecasts.
    pub fn defined_count(&self) -> usize {
        self.forecast_indices().count()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SsrResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Time points:         {}", self.len())?;
        writeln!(f, "  Embedding dimension: {}", self.embedding_dimension())?;
        writeln!(f, "  Neighbors:           {}", self.neighbor_count)?;
        writeln!(f, "  Forecasts:           {}", self.defined_count())?;
        if self.within_row {
            writeln!(f, "  Mode:                within-row")?;
        }
        writeln!(f, "  Columns:             {}", self.columns.join(", "))?;
        writeln!(f)?;

        writeln!(f, "Forecasts:")?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "Time", "Observed", "Forecast", "Z_Forecast"
        )?;
        writeln!(f, "{:-<width$}", "", width = 47)?;

        let rows: Vec<usize> = self.forecast_indices().collect();
        let n = rows.len();
        let shown: Vec<usize> = if n <= 20 {
            rows
        } else {
            rows[..10].iter().chain(rows[n - 10..].iter()).copied().collect()
        };

        for (i, &idx) in shown.iter().enumerate() {
            if n > 20 && i == 10 {
                writeln!(f, "{:>8}", "...")?;
            }
            write!(f, "{:>8}", idx)?;
            match self.observed[idx] {
                Some(v) => write!(f, " {:>12.6}", v)?,
                None => write!(f, " {:>12}", "NA")?,
            }
            match self.rescaled[idx] {
                Some(v) => write!(f, " {:>12.6}", v)?,
                None => write!(f, " {:>12}", "NA")?,
            }
            match self.forecast[idx] {
                Some(v) => write!(f, " {:>12.6}", v)?,
                None => write!(f, " {:>12}", "NA")?,
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
