//! Mapping standardized forecasts back to the response scale.
//!
//! ## Purpose
//!
//! Forecasts are produced in z-score units. This module maps them back with
//! the mean and standard deviation of the observed response:
//!
//! ```text
//! rescaled = mean(observed) + forecast * sd(observed)
//! ```
//!
//! ## Invariants
//!
//! * Output length equals input length; missing forecasts stay missing.
//! * `rescale(x, standardize(x))` recovers `x`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::Moments;
use crate::primitives::errors::SsrError;

/// Rescale a standardized `forecast` using the moments of `observed`.
///
/// Both inputs must be non-empty, equally long, and free of non-finite
/// present values.
pub fn rescale<T: Float>(
    observed: &[Option<T>],
    forecast: &[Option<T>],
) -> Result<Vec<Option<T>>, SsrError> {
    if observed.is_empty() || forecast.is_empty() {
        return Err(SsrError::EmptyInput);
    }
    if observed.len() != forecast.len() {
        return Err(SsrError::MismatchedLengths {
            expected: observed.len(),
            got: forecast.len(),
        });
    }
    check_finite(observed, "observed")?;
    check_finite(forecast, "forecast")?;

    let moments = Moments::of(observed);
    Ok(forecast
        .iter()
        .map(|z| z.and_then(|z| moments.rescale_value(z)))
        .collect())
}

fn check_finite<T: Float>(values: &[Option<T>], name: &str) -> Result<(), SsrError> {
    for (i, v) in values.iter().enumerate() {
        if let Some(v) = v.filter(|v| !v.is_finite()) {
            return Err(SsrError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }
    Ok(())
}
