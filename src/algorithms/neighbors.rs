//! Nearest-neighbor selection, weighting, and one-step projection.
//!
//! ## Purpose
//!
//! This module turns a masked distance matrix into forecasts. For each focal
//! row it selects the k = E + 1 nearest earlier neighbors (E being the
//! embedding dimension), weights them by relative distance, advances each
//! neighbor one time step, and averages the response values found there.
//!
//! ## Design notes
//!
//! * **All or nothing**: A row with fewer than k allowed neighbors produces no
//!   neighbor set at all, and therefore no forecast.
//! * **Deterministic ties**: Equal distances are ordered by earlier time index.
//! * **Projection**: The neighbor set found at row `r` forecasts time `r + 1`
//!   from the values at `j + 1` for each neighbor `j`.
//!
//! ## Key concepts
//!
//! * **Weight**: `exp(-d / d_min)`, so every neighbor tied with the nearest
//!   shares its weight. When `d_min` is 0, neighbors at distance 0 get weight 1
//!   and all others 0. Only relative weights matter to the forecast.
//! * **Within-row mode**: Values are gathered from a standardized external
//!   observed vector instead of the SSR response column.
//!
//! ## Invariants
//!
//! * The forecast vector has one entry per time point.
//! * A projected index is always strictly earlier than the forecast time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::distance_matrix::DistanceMatrix;
use crate::algorithms::embedding::StateSpace;
use crate::math::moments::standardize;
use crate::primitives::errors::SsrError;

// ============================================================================
// Neighbor Set
// ============================================================================

/// The k nearest neighbors of one focal row, nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSet<T> {
    /// Time indices of the neighbors.
    pub indices: Vec<usize>,
    /// Distances to each neighbor.
    pub distances: Vec<T>,
    /// Weight of each neighbor.
    pub weights: Vec<T>,
}

impl<T: Float> NeighborSet<T> {
    /// Select the `k` nearest allowed neighbors from a distance row.
    ///
    /// Returns `None` when fewer than `k` neighbors are allowed.
    pub fn select(row: &[Option<T>], k: usize) -> Option<Self> {
        let mut candidates: Vec<(usize, T)> = row
            .iter()
            .enumerate()
            .filter_map(|(j, d)| d.map(|d| (j, d)))
            .collect();

        if k == 0 || candidates.len() < k {
            return None;
        }

        // Stable sort keeps earlier indices first among ties.
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Equal));
        candidates.truncate(k);

        let (indices, distances): (Vec<usize>, Vec<T>) = candidates.into_iter().unzip();
        let weights = neighbor_weights(&distances);

        Some(Self {
            indices,
            distances,
            weights,
        })
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the set holds no neighbors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The same neighbors advanced one time step.
    pub fn project(&self) -> Self {
        Self {
            indices: self.indices.iter().map(|&j| j + 1).collect(),
            distances: self.distances.clone(),
            weights: self.weights.clone(),
        }
    }
}

/// Exponential weights relative to the nearest distance.
///
/// `distances` must be sorted ascending.
pub fn neighbor_weights<T: Float>(distances: &[T]) -> Vec<T> {
    let Some(&nearest) = distances.first() else {
        return Vec::new();
    };

    distances
        .iter()
        .map(|&d| {
            if nearest > T::zero() {
                (-d / nearest).exp()
            } else if d == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        })
        .collect()
}

// ============================================================================
// Forecast
// ============================================================================

/// Standardized forecasts and the projected neighbors behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast<T> {
    /// Standardized forecast per time index; `None` where undefined.
    pub values: Vec<Option<T>>,
    /// Projected neighbor set used for each forecast time.
    pub neighbors: Vec<Option<NeighborSet<T>>>,
}

impl<T: Float> Forecast<T> {
    /// Number of time points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for an empty series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of defined forecasts.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Forecast every focal time encoded in `distances`.
///
/// With `within_row` set, values are gathered from `observed` after
/// standardizing it; otherwise from the SSR response column.
pub fn forecast<T: Float>(
    ssr: &StateSpace<T>,
    distances: &DistanceMatrix<T>,
    within_row: bool,
    observed: Option<&[T]>,
) -> Result<Forecast<T>, SsrError> {
    let n = ssr.n_rows();
    if distances.len() != n {
        return Err(SsrError::MismatchedLengths {
            expected: n,
            got: distances.len(),
        });
    }

    let targets = gather_targets(ssr, within_row, observed)?;
    let k = ssr.neighbor_count();

    let mut values = vec![None; n];
    let mut neighbors = vec![None; n];
    let mut short_rows = 0usize;

    for row in 0..n.saturating_sub(1) {
        if distances.valid_count(row) == 0 {
            continue;
        }
        let Some(set) = NeighborSet::select(distances.row(row), k) else {
            short_rows += 1;
            continue;
        };

        let projected = set.project();
        values[row + 1] = weighted_mean(&targets, &projected);
        neighbors[row + 1] = Some(projected);
    }

    if short_rows > 0 {
        log::debug!("{short_rows} focal rows had fewer than {k} neighbors");
    }

    let result = Forecast { values, neighbors };
    log::debug!(
        "forecast {} of {} time points (k = {})",
        result.defined_count(),
        n,
        k
    );
    Ok(result)
}

/// The standardized values that projected neighbors read from.
fn gather_targets<T: Float>(
    ssr: &StateSpace<T>,
    within_row: bool,
    observed: Option<&[T]>,
) -> Result<Vec<Option<T>>, SsrError> {
    if within_row {
        let observed = observed.ok_or(SsrError::MissingObserved)?;
        if observed.len() != ssr.n_rows() {
            return Err(SsrError::MismatchedLengths {
                expected: ssr.n_rows(),
                got: observed.len(),
            });
        }
        let present: Vec<Option<T>> = observed
            .iter()
            .map(|&v| if v.is_finite() { Some(v) } else { None })
            .collect();
        return Ok(standardize(&present));
    }

    ssr.response_column().ok_or_else(|| {
        SsrError::InvalidInput(
            "the embedding has no response column; use within-row mode with an observed vector"
                .into(),
        )
    })
}

/// Weighted mean of `targets` at the projected indices.
fn weighted_mean<T: Float>(targets: &[Option<T>], set: &NeighborSet<T>) -> Option<T> {
    let mut num = T::zero();
    let mut den = T::zero();
    for (&j, &w) in set.indices.iter().zip(set.weights.iter()) {
        let v = (*targets.get(j)?)?;
        num = num + w * v;
        den = den + w;
    }
    if den > T::zero() { Some(num / den) } else { None }
}
