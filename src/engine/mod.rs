//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates one forecasting pass: validation, execution of
//! the algorithms layer, and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Pipeline execution.
pub mod executor;

/// Result types.
pub mod output;
