//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! pipeline:
//! - The lag operator
//! - Missing-aware moments and standardization
//! - Distances between embedding points
//!
//! These are reusable building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lag operator.
pub mod lag;

/// Mean, standard deviation, and z-scoring.
pub mod moments;

/// Distance between embedding points.
pub mod distance;
