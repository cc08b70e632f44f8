//! Mean and standard deviation over non-missing values, and z-scoring.
//!
//! ## Purpose
//!
//! Standardization puts every embedding coordinate on a common scale before
//! distances are taken, and the same moments map forecasts back to the
//! response scale.
//!
//! ## Design notes
//!
//! * **Missing-aware**: Missing cells are skipped, never treated as zero.
//! * **Sample SD**: Uses the `n - 1` denominator.
//! * **No guarding**: A zero-variance column standardizes to non-finite values,
//!   which are stored as missing.
//!
//! ## Invariants
//!
//! * A standardized column with at least two distinct present values has mean 0 and SD 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Location and scale of a column, computed over present values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Arithmetic mean; `None` with no present values.
    pub mean: Option<T>,
    /// Sample standard deviation; `None` with fewer than two present values.
    pub sd: Option<T>,
}

impl<T: Float> Moments<T> {
    /// Compute moments of the present values in `values`.
    pub fn of(values: &[Option<T>]) -> Self {
        let (sum, count) = values
            .iter()
            .flatten()
            .fold((T::zero(), 0usize), |(s, c), &v| (s + v, c + 1));

        if count == 0 {
            return Self {
                mean: None,
                sd: None,
            };
        }

        let n = T::from(count).unwrap_or(T::one());
        let mean = sum / n;
        if count < 2 {
            return Self {
                mean: Some(mean),
                sd: None,
            };
        }

        let ss = values
            .iter()
            .flatten()
            .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));
        let sd = (ss / (n - T::one())).sqrt();

        Self {
            mean: Some(mean),
            sd: Some(sd),
        }
    }

    /// Z-score a single value.
    #[inline]
    pub fn standardize_value(&self, v: T) -> Option<T> {
        let z = (v - self.mean?) / self.sd?;
        z.is_finite().then_some(z)
    }

    /// Map a standardized value back to the original scale.
    #[inline]
    pub fn rescale_value(&self, z: T) -> Option<T> {
        let v = self.mean? + z * self.sd?;
        v.is_finite().then_some(v)
    }
}

/// Z-score a column using its own moments.
pub fn standardize<T: Float>(values: &[Option<T>]) -> Vec<Option<T>> {
    let moments = Moments::of(values);
    values
        .iter()
        .map(|v| v.and_then(|x| moments.standardize_value(x)))
        .collect()
}
