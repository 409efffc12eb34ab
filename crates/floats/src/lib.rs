//! # floats — arithmetic, scans, folds and filters over `f64` slices
//!
//! A small library of operations over ordered sequences of 64-bit floats.
//! Every operation is a single synchronous pass over the slices it is given.
//!
//! ## Quick Start
//!
//! ### Accumulating in place
//!
//! The first argument of an in-place operation doubles as its left operand:
//!
//! ```rust
//! use floats::prelude::*;
//!
//! let mut s1 = vec![1.0, 2.0, 3.0, 4.0];
//! let s2 = vec![5.0, 6.0, 7.0, 8.0];
//! let s3 = vec![1.0, 1.0, 1.0, 1.0];
//!
//! add(&mut s1, &s2)?;
//! add(&mut s1, &s3)?;
//!
//! assert_eq!(s1, [7.0, 9.0, 11.0, 13.0]);
//! assert_eq!(s2, [5.0, 6.0, 7.0, 8.0]);
//! # Result::<(), FloatsError>::Ok(())
//! ```
//!
//! ### Writing into a new container
//!
//! ```rust
//! use floats::prelude::*;
//!
//! let s1 = vec![1.0, 2.0, 3.0, 4.0];
//! let s2 = vec![5.0, 6.0, 7.0, 8.0];
//! let mut dst = vec![0.0; s1.len()];
//!
//! add_to(&mut dst, &s1, &s2)?;
//! add(&mut dst, &[1.0, 1.0, 1.0, 1.0])?;
//!
//! assert_eq!(dst, [7.0, 9.0, 11.0, 13.0]);
//! # Result::<(), FloatsError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations over several sequences return `Result<_, FloatsError>` and
//! refuse to run when the lengths disagree. Nothing is written on failure:
//!
//! ```rust
//! use floats::prelude::*;
//!
//! let mut s1 = vec![1.0, 2.0, 3.0];
//! let s2 = vec![5.0, 6.0, 7.0, 8.0];
//!
//! // Guard up front...
//! assert!(!equal_lengths(&[&s1, &s2]));
//!
//! // ...or handle the error at the call site.
//! match add(&mut s1, &s2) {
//!     Ok(()) => unreachable!(),
//!     Err(e) => assert_eq!(e, FloatsError::LengthMismatch { expected: 3, got: 4 }),
//! }
//! assert_eq!(s1, [1.0, 2.0, 3.0]);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! floats = { version = "0.1", default-features = false }
//! ```
//!
//! Only `filter` allocates; it uses `alloc` in that configuration.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and validation.
mod primitives;

// Layer 2: Math - element-wise kernels, scans and reductions.
mod math;

// Layer 3: Algorithms - callable-driven operations and generators.
mod algorithms;

pub use crate::algorithms::filter::filter;
pub use crate::algorithms::fold::{fold_left, fold_right};
pub use crate::algorithms::generate::{reverse, span};
pub use crate::math::compare::{count, equal, equal_approx, has_nan};
pub use crate::math::cumulative::{cum_prod, cum_prod_in_place, cum_sum, cum_sum_in_place};
pub use crate::math::elementwise::{
    add, add_const, add_scaled, add_scaled_to, add_to, div, div_to, mul, mul_to, scale, scale_to,
    sub, sub_to,
};
pub use crate::math::reduce::{arg_max, arg_min, distance, dot, max, min, norm, prod, sum, Norm};
pub use crate::primitives::errors::FloatsError;
pub use crate::primitives::validator::equal_lengths;

// Standard prelude.
pub mod prelude {
    pub use crate::{
        add, add_const, add_scaled, add_scaled_to, add_to, arg_max, arg_min, count, cum_prod,
        cum_prod_in_place, cum_sum, cum_sum_in_place, distance, div, div_to, dot, equal,
        equal_approx, equal_lengths, filter, fold_left, fold_right, has_nan, max, min, mul,
        mul_to, norm, prod, reverse, scale, scale_to, span, sub, sub_to, sum, FloatsError, Norm,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}
