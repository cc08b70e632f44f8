//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the forecasting pipeline itself:
//! - Lag subset enumeration
//! - State-space reconstruction
//! - Causally masked distance matrices
//! - Nearest-neighbor projection
//! - Rescaling to the response scale
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lag subset enumeration.
pub mod subsets;

/// State-space reconstruction.
pub mod embedding;

/// Masked distance matrix.
pub mod distance_matrix;

/// Nearest-neighbor forecasting.
pub mod neighbors;

/// Rescaling.
pub mod rescale;
