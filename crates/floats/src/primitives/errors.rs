//! Error types for slice operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions an operation can report when its
//! inputs do not satisfy its preconditions.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending lengths or values.
//! * **Up-front**: Every error is raised before the first element is written,
//!   so a failed call leaves its destination untouched.
//! * **No-std**: The type only depends on `core`; `std::error::Error` is
//!   implemented when `std` is enabled.
//!
//! ## Invariants
//!
//! * A `LengthMismatch` always reports two different lengths.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation itself (see `validator`).

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for slice operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatsError {
    /// Two sequences that must share a length do not.
    LengthMismatch {
        /// Length of the first (reference) sequence.
        expected: usize,
        /// Length of the sequence that disagreed with it.
        got: usize,
    },

    /// The operation has no identity element and the sequence is empty.
    EmptyInput,

    /// The destination is too short for the requested operation.
    TooFewPoints {
        /// Number of slots provided.
        got: usize,
        /// Minimum required slots.
        min: usize,
    },

    /// Norm order must be at least 1 (or infinite).
    InvalidNorm(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FloatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "Length mismatch: expected {expected} elements, got {got}")
            }
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNorm(order) => {
                write!(f, "Invalid norm order: {order} (must be >= 1)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FloatsError {}
