//! Enumeration of lag subsets (single-view embeddings).
//!
//! ## Purpose
//!
//! Given a lag specification with L (variable, lag) pairs, this module
//! produces every non-empty subset of those pairs as its own lag
//! specification. Each subset drives one independent pass through the
//! forecasting pipeline.
//!
//! ## Key concepts
//!
//! * **Mask numbering**: Subset `m` (1 ..= 2^L - 1) contains pair `p` iff bit
//!   `p` of `m` is set, with bit 0 being the first canonical pair.
//! * **Grouping**: Pairs keep their variable; variables that lose every lag are dropped.
//!
//! ## Invariants
//!
//! * Exactly `2^L - 1` subsets, all distinct, in ascending mask order.
//! * The union of all subsets is the full pair set.
//!
//! ## Non-goals
//!
//! * This module does not fit, rank, or combine the subset embeddings.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SsrError;
use crate::primitives::lag_spec::LagSpec;

/// Largest number of pairs whose subsets can be numbered by a `u64` mask.
pub const MAX_SUBSET_LAGS: usize = 63;

// ============================================================================
// Bitmask
// ============================================================================

/// Binary digits of `value`, least significant first, padded to `digits`.
///
/// Fails when `value` needs more than `digits` bits.
pub fn bitmask(value: u64, digits: usize) -> Result<Vec<bool>, SsrError> {
    let needed = (u64::BITS - value.leading_zeros()) as usize;
    if needed > digits {
        return Err(SsrError::InsufficientDigits { value, digits });
    }
    Ok((0..digits)
        .map(|bit| bit < 64 && (value >> bit) & 1 == 1)
        .collect())
}

// ============================================================================
// Iterator
// ============================================================================

/// Lazy iterator over `(mask, subset)` for every non-empty lag subset.
#[derive(Debug, Clone)]
pub struct SubsetLags<'a> {
    spec: &'a LagSpec,
    next: u64,
    end: u64,
}

impl<'a> SubsetLags<'a> {
    /// Start enumerating the subsets of `spec`.
    pub fn new(spec: &'a LagSpec) -> Result<Self, SsrError> {
        let total = spec.total_lags();
        if total > MAX_SUBSET_LAGS {
            return Err(SsrError::TooManyLags {
                got: total,
                max: MAX_SUBSET_LAGS,
            });
        }
        Ok(Self {
            spec,
            next: 1,
            end: 1u64 << total,
        })
    }

    /// Number of subsets not yet produced.
    pub fn remaining(&self) -> u64 {
        self.end - self.next
    }

    /// The subset for a given mask.
    fn subset(&self, mask: u64) -> LagSpec {
        LagSpec::from_pairs(
            self.spec
                .pairs()
                .enumerate()
                .filter(|(p, _)| (mask >> p) & 1 == 1)
                .map(|(_, pair)| pair),
        )
    }
}

impl Iterator for SubsetLags<'_> {
    type Item = (u64, LagSpec);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some((mask, self.subset(mask)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining()).ok())
    }
}

// ============================================================================
// Enumeration
// ============================================================================

/// All `2^L - 1` non-empty lag subsets of `spec`, in mask order.
pub fn enumerate_subset_lags(spec: &LagSpec) -> Result<Vec<LagSpec>, SsrError> {
    let subsets: Vec<LagSpec> = SubsetLags::new(spec)?.map(|(_, s)| s).collect();
    log::debug!(
        "enumerated {} lag subsets from {} pairs",
        subsets.len(),
        spec.total_lags()
    );
    Ok(subsets)
}
