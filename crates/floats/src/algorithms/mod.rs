//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! Operations driven by caller-supplied callables (filters and folds), plus
//! generators that fill a destination from scalar parameters.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Predicate-based selection.
pub mod filter;

/// Left and right folds.
pub mod fold;

/// Evenly spaced sequences and reordering.
pub mod generate;
