//! Distances between embedding points.
//!
//! ## Purpose
//!
//! This module computes the Euclidean distance between two rows of a state
//! space reconstruction. Embedding coordinates are already standardized, so
//! no per-dimension scaling is applied here.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//!
//! ## Non-goals
//!
//! * This module does not apply causal masking (see the distance matrix builder).

// External dependencies
use num_traits::Float;

/// Euclidean distance between two points: √(Σ(aᵢ - bᵢ)²).
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}
