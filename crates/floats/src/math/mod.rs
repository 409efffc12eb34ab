//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric kernels of the crate:
//! - Element-wise arithmetic (in-place and out-of-place)
//! - Prefix scans (cumulative sum/product)
//! - Reductions (sum, dot, extrema, norms)
//! - Structural comparisons
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Four-lane SIMD kernels.
pub mod lanes;

/// Element-wise arithmetic.
pub mod elementwise;

/// Cumulative sums and products.
pub mod cumulative;

/// Sums, dot products, extrema and norms.
pub mod reduce;

/// Equality and inspection.
pub mod compare;
