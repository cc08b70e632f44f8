//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by the whole pipeline:
//! the input table, lag specifications, the missing-aware matrix, and the
//! error type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Time-ordered input table.
pub mod table;

/// Lag specifications.
pub mod lag_spec;

/// Matrix with explicit missing cells.
pub mod matrix;
