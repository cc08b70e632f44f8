//! Causally masked distance matrix between embedding points.
//!
//! ## Purpose
//!
//! This module computes the pairwise Euclidean distances between SSR rows and
//! masks every (focal, neighbor) combination that may not be used for a
//! one-step-ahead forecast.
//!
//! ## Design notes
//!
//! * **Explicit masking**: Disallowed cells are `None`, never a numeric sentinel.
//! * **Lower triangle only**: Only `j < i` is ever computed.
//! * **Focal rows**: A forecast for time `f` is made from the embedding state at
//!   `f - 1`, so row `f - 1` is the one kept for each requested `f`.
//!
//! ## Key concepts
//!
//! * **Missing row**: An SSR row with any missing cell is neither a focal point
//!   nor a neighbor.
//! * **Projection guard**: If row `t` is missing, neighbor `t - 1` is masked too,
//!   because projecting it one step lands on `t`.
//! * **Focal mode**: `Exact` keeps only the requested times, `FromEarliest`
//!   keeps every time from the earliest requested one onward.
//!
//! ## Invariants
//!
//! * `D[i][j]` is `None` whenever `j >= i`.
//! * Row `t`, column `t` and column `t - 1` are `None` for every missing SSR row `t`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::embedding::StateSpace;
use crate::math::distance::euclidean;
use crate::primitives::errors::SsrError;

// ============================================================================
// Focal Mode
// ============================================================================

/// Which distance rows are kept for a set of requested focal times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocalMode {
    /// Only the requested focal times are forecast.
    #[default]
    Exact,

    /// Every time from the earliest requested focal time onward is forecast.
    FromEarliest,
}

// ============================================================================
// Distance Matrix
// ============================================================================

/// Square matrix of masked distances between embedding rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<T> {
    n: usize,
    cells: Vec<Option<T>>,
}

impl<T: Float> DistanceMatrix<T> {
    /// Number of rows (and columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// True for a 0×0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from focal row `i` to neighbor `j`, if allowed.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.cells[i * self.n + j]
    }

    /// One row of the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[Option<T>] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Number of allowed neighbors in row `i`.
    pub fn valid_count(&self, i: usize) -> usize {
        self.row(i).iter().filter(|d| d.is_some()).count()
    }

    /// Rows with at least one allowed neighbor.
    pub fn active_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&i| self.valid_count(i) > 0)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Build the masked distance matrix for the requested focal times.
///
/// `focal` holds 0-based time indices to forecast. Any index `>= n_rows`
/// fails with [`SsrError::FocalOutOfRange`]; time 0 has no prior state and
/// contributes nothing.
pub fn build_distance_matrix<T: Float>(
    ssr: &StateSpace<T>,
    focal: &[usize],
    mode: FocalMode,
) -> Result<DistanceMatrix<T>, SsrError> {
    let n = ssr.n_rows();
    if let Some(&index) = focal.iter().find(|&&f| f >= n) {
        return Err(SsrError::FocalOutOfRange { index, len: n });
    }

    // Rows with any missing coordinate are dropped entirely.
    let points: Vec<Option<Vec<T>>> = (0..n).map(|i| ssr.matrix().complete_row(i)).collect();

    // A neighbor whose successor is missing cannot be projected.
    let usable_neighbor: Vec<bool> = (0..n)
        .map(|j| points[j].is_some() && points.get(j + 1).is_none_or(Option::is_some))
        .collect();

    let focal_rows = focal_rows(focal, mode, n);

    let mut cells = vec![None; n * n];
    for i in (0..n).filter(|&i| focal_rows[i]) {
        let Some(pi) = &points[i] else { continue };
        for j in (0..i).filter(|&j| usable_neighbor[j]) {
            if let Some(pj) = &points[j] {
                cells[i * n + j] = Some(euclidean(pi, pj));
            }
        }
    }

    let matrix = DistanceMatrix { n, cells };

    log::debug!(
        "distance matrix: {} rows, {} focal rows with neighbors, {} missing embedding rows",
        n,
        matrix.active_rows().count(),
        points.iter().filter(|p| p.is_none()).count(),
    );

    Ok(matrix)
}

/// Flag the distance rows kept for the requested focal times.
fn focal_rows(focal: &[usize], mode: FocalMode, n: usize) -> Vec<bool> {
    let mut rows = vec![false; n];
    match mode {
        FocalMode::Exact => {
            for &f in focal.iter().filter(|&&f| f > 0) {
                rows[f - 1] = true;
            }
        }
        FocalMode::FromEarliest => {
            if let Some(&earliest) = focal.iter().min() {
                let start = earliest.saturating_sub(1);
                // Time 0 has no prior state; the first forecast is at time 1.
                for row in rows.iter_mut().take(n.saturating_sub(1)).skip(start) {
                    *row = true;
                }
            }
        }
    }
    rows
}
