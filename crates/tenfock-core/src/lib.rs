//! # tenfock-core
//!
//! Fock-space addressing and traversal primitives for the tenfock stack.
//!
//! Fock-basis tensors in tenfock are dense, row-major buffers holding one
//! entry per multi-index: one 1-based coordinate per optical mode, each in
//! `[1, resolution]`, where coordinate `c` represents photon number `c - 1`.
//! This crate provides the two building blocks the recurrence kernels in
//! `tenfock-kernels` are driven by:
//!
//! - **Index codec** ([`encode`] / [`decode`]): the bijection between a
//!   multi-index and its flat offset in a mixed-radix buffer of
//!   `resolution^dim` entries, with coordinate 0 as the most significant
//!   digit.
//! - **Odometer traversal** ([`Odometer`]): an iterator visiting every
//!   multi-index of the hypercube exactly once (except the all-ones start),
//!   reporting for each step the index reached, the predecessor it was
//!   reached from, and the coordinate that changed.
//!
//! The odometer order is what makes single-pass recurrence evaluation
//! possible: when a step `(pos, from, changed)` is produced, `from` and every
//! multi-index obtained from `from` by decrementing a single coordinate have
//! already been visited.
//!
//! ## Quick Start
//!
//! ```
//! use tenfock_core::{encode, decode, Odometer};
//!
//! // Flat offset of the multi-index (2, 1) at resolution 3
//! let offset = encode(&[2, 1], 3);
//! assert_eq!(offset, 3);
//! assert_eq!(decode(offset, 2, 3).as_slice(), &[2, 1]);
//!
//! // Walk a 2-mode hypercube at resolution 2
//! let steps: Vec<_> = Odometer::new(2, 2).collect();
//! assert_eq!(steps.len(), 3); // 2^2 - 1 steps, the all-ones seed is not emitted
//! assert_eq!(steps[0].pos.as_slice(), &[2, 1]);
//! assert_eq!(steps[0].from.as_slice(), &[1, 1]);
//! assert_eq!(steps[0].changed, 0);
//! ```

#![deny(warnings)]

pub mod indexing;
pub mod odometer;

#[cfg(test)]
mod property_tests;

pub use indexing::{decode, encode, tensor_len};
pub use odometer::{MultiIndex, Odometer, Step};
