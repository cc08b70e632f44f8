//! Lag specifications: which variables enter an embedding, at which lags.
//!
//! ## Purpose
//!
//! A `LagSpec` maps variable names to ordered sets of integer lags. Reading it
//! variable by variable and lag by lag gives the canonical sequence of
//! (variable, lag) pairs that names embedding columns and numbers lag subsets.
//!
//! ## Design notes
//!
//! * **Ordered**: Insertion order is kept; there is no hashing.
//! * **Validated**: Duplicate variables, duplicate lags, and empty lag lists are rejected.
//!
//! ## Key concepts
//!
//! * **Lag sign**: Positive lags look into the past, negative lags into the future.
//! * **Column name**: `variable_lag`, e.g. `y_3` or `y_-1`.
//!
//! ## Invariants
//!
//! * Every variable has at least one lag.
//! * Lags are unique within a variable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::errors::SsrError;

/// Ordered mapping from variable name to lag offsets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LagSpec {
    entries: Vec<(String, Vec<isize>)>,
}

impl LagSpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with its lags.
    pub fn with(mut self, variable: &str, lags: &[isize]) -> Result<Self, SsrError> {
        if self.entries.iter().any(|(v, _)| v == variable) {
            return Err(SsrError::DuplicateVariable(variable.into()));
        }
        if lags.is_empty() {
            return Err(SsrError::EmptyLagSet(variable.into()));
        }
        for (i, &lag) in lags.iter().enumerate() {
            if lags[..i].contains(&lag) {
                return Err(SsrError::DuplicateLag {
                    variable: variable.into(),
                    lag,
                });
            }
        }
        self.entries.push((variable.into(), lags.to_vec()));
        Ok(self)
    }

    /// Rebuild a specification from canonically ordered pairs.
    ///
    /// Consecutive pairs sharing a variable are grouped. Callers pass pairs
    /// taken from an already validated specification.
    pub(crate) fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, isize)>) -> Self {
        let mut entries: Vec<(String, Vec<isize>)> = Vec::new();
        for (variable, lag) in pairs {
            match entries.last_mut() {
                Some((v, lags)) if v == variable => lags.push(lag),
                _ => entries.push((variable.into(), vec![lag])),
            }
        }
        Self { entries }
    }

    /// Total number of (variable, lag) pairs.
    pub fn total_lags(&self) -> usize {
        self.entries.iter().map(|(_, l)| l.len()).sum()
    }

    /// Number of variables.
    pub fn n_variables(&self) -> usize {
        self.entries.len()
    }

    /// True if no variable is specified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variables in order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(v, _)| v.as_str())
    }

    /// Lags of one variable, if present.
    pub fn lags(&self, variable: &str) -> Option<&[isize]> {
        self.entries
            .iter()
            .find(|(v, _)| v == variable)
            .map(|(_, l)| l.as_slice())
    }

    /// Entries as (variable, lags) in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[isize])> {
        self.entries.iter().map(|(v, l)| (v.as_str(), l.as_slice()))
    }

    /// Canonical flattened (variable, lag) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, isize)> {
        self.entries
            .iter()
            .flat_map(|(v, lags)| lags.iter().map(move |&l| (v.as_str(), l)))
    }

    /// Column names in canonical order.
    pub fn column_names(&self) -> Vec<String> {
        self.pairs().map(|(v, l)| column_name(v, l)).collect()
    }
}

/// Embedding column name for a (variable, lag) pair.
pub fn column_name(variable: &str, lag: isize) -> String {
    format!("{variable}_{lag}")
}
