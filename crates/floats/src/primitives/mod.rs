//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the precondition checks used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Length and parameter validation.
pub mod validator;
