//! # tenfock-kernels
//!
//! Recurrence kernels producing the multidimensional Hermite tensors that
//! hold Fock-basis matrix elements of Gaussian quantum-optical operations.
//!
//! ## Overview
//!
//! Each kernel takes an already-assembled symmetric coupling matrix `R`
//! and/or source vector `y` (how those are built from physical parameters is
//! the caller's business) plus a photon-number cutoff, and returns a dense
//! tensor with one axis of length `resolution` per bra/ket mode coordinate.
//! Every entry is computed in a single pass by a linear recurrence over the
//! odometer traversal from `tenfock-core`; entries excluded by an
//! operation's conservation law are left exactly zero.
//!
//! **Kernels:**
//! - [`hermite`] - multidimensional Hermite polynomial tensor `H_k^{(R)}(y)`
//! - [`hermite_renormalized`] - the same tensor rescaled by inverse
//!   square-root factorials (Fock amplitudes directly)
//! - [`interferometer`] - linear interferometer, photon-number conserving
//! - [`squeezing`] - single-mode squeezer, bra/ket parity conserving
//! - [`two_mode_squeezing`] - two-mode squeezer, pairwise photon creation
//! - [`displacement`] - displacement operation, driven by `(alpha, -conj(alpha))`
//!
//! All kernels are generic over the element type `T: ComplexFloat`, so the
//! same code path serves `f32`, `f64`, `Complex32`, and `Complex64`.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::{arr1, arr2};
//! use tenfock_kernels::{displacement, hermite};
//!
//! // Plain Hermite tensor, one mode: with R = 0 it collapses to powers of y.
//! let r = arr2(&[[0.0_f64]]);
//! let y = arr1(&[2.0_f64]);
//! let h = hermite(&r.view(), &y.view(), 4).unwrap();
//! assert_eq!(h.as_slice().unwrap(), &[1.0, 2.0, 4.0, 8.0]);
//!
//! // Displacement by a real amplitude; the seed is the vacuum overlap.
//! let y = arr1(&[0.5_f64, -0.5]);
//! let d = displacement(&y.view(), 3).unwrap();
//! assert!((d[[0, 0]] - (-0.125_f64).exp()).abs() < 1e-12);
//! ```
//!
//! ## Cost model
//!
//! A call over `dim` mode coordinates costs `O(resolution^dim * dim)` time
//! and allocates the full `resolution^dim` output buffer; the traversal is
//! inherently sequential because every step reads entries written by
//! earlier steps. Callers bound the cost by choosing the cutoff.

#![deny(warnings)]

pub mod displacement;
pub mod error;
pub mod hermite;
pub mod interferometer;
pub mod squeezing;

mod recurrence;


pub use displacement::displacement;
pub use error::{FockError, FockResult};
pub use hermite::{hermite, hermite_renormalized};
pub use interferometer::interferometer;
pub use squeezing::{squeezing, two_mode_squeezing};
