//! Error types for state-space reconstruction and forecasting.
//!
//! ## Purpose
//!
//! This module defines the argument errors that can be raised while building
//! embeddings, distance matrices, and forecasts. Data-dependent undefined
//! results (zero variance, too few neighbors, lag truncation) are not errors;
//! they travel through the pipeline as missing cells.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, names, indices).
//! * **Synchronous**: Every error is returned to the caller immediately.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for SSR operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SsrError {
    /// An input that must contain data is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Two inputs that must be aligned have different lengths.
    MismatchedLengths {
        /// Expected number of elements.
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// Input data contains NaN or infinite values where only finite values are allowed.
    InvalidNumericValue(String),

    /// Number of lags does not match the number of columns (only 1 or `columns` allowed).
    InvalidLagCount {
        /// Number of lags provided.
        lags: usize,
        /// Number of columns in the matrix being lagged.
        columns: usize,
    },

    /// A referenced column does not exist in the table.
    UnknownColumn(String),

    /// A column name was added to a table twice.
    DuplicateColumn(String),

    /// A variable appears twice in a lag specification.
    DuplicateVariable(String),

    /// A lag appears twice for the same variable.
    DuplicateLag {
        /// Variable name.
        variable: String,
        /// The repeated lag.
        lag: isize,
    },

    /// A variable in a lag specification has no lags.
    EmptyLagSet(String),

    /// The lag specification has too many (variable, lag) pairs to enumerate.
    TooManyLags {
        /// Number of pairs provided.
        got: usize,
        /// Maximum number of pairs supported.
        max: usize,
    },

    /// A bitmask does not fit in the requested number of digits.
    InsufficientDigits {
        /// The value to represent.
        value: u64,
        /// The number of binary digits available.
        digits: usize,
    },

    /// A focal time index lies outside the series.
    FocalOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows in the series.
        len: usize,
    },

    /// Within-row forecasting was requested without an observed response vector.
    MissingObserved,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SsrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedLengths { expected, got } => {
                write!(f, "Length mismatch: expected {expected} values, got {got}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidLagCount { lags, columns } => {
                write!(
                    f,
                    "Invalid lag count: {lags} (must be 1 or the number of columns {columns})"
                )
            }
            Self::UnknownColumn(name) => write!(f, "Unknown column: '{name}'"),
            Self::DuplicateColumn(name) => write!(f, "Duplicate column: '{name}'"),
            Self::DuplicateVariable(name) => {
                write!(f, "Variable '{name}' appears more than once in the lag specification")
            }
            Self::DuplicateLag { variable, lag } => {
                write!(f, "Lag {lag} appears more than once for variable '{variable}'")
            }
            Self::EmptyLagSet(name) => write!(f, "Variable '{name}' has no lags"),
            Self::TooManyLags { got, max } => {
                write!(f, "Too many lags: got {got}, at most {max} can be enumerated")
            }
            Self::InsufficientDigits { value, digits } => {
                write!(f, "Value {value} cannot be represented with {digits} binary digits")
            }
            Self::FocalOutOfRange { index, len } => {
                write!(f, "Focal index {index} is out of range for a series of length {len}")
            }
            Self::MissingObserved => {
                write!(f, "Within-row forecasting requires an observed response vector")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SsrError {}
