//! Mixed-radix index codec for Fock-basis tensors.
//!
//! A multi-index has one 1-based coordinate per mode, each in
//! `[1, resolution]`. Its flat offset in a row-major buffer is the
//! mixed-radix value with coordinate 0 as the most significant digit:
//!
//! ```text
//! offset = ((pos[0]-1)*resolution + (pos[1]-1))*resolution + ... + (pos[dim-1]-1)
//! ```
//!
//! This matches the default (C-contiguous) layout of an `ndarray` tensor of
//! shape `[resolution; dim]`, so the offset is also the position in that
//! tensor's backing slice.

use crate::odometer::MultiIndex;

/// Number of entries in a Fock-basis tensor over `dim` modes.
///
/// # Examples
///
/// ```
/// use tenfock_core::tensor_len;
///
/// assert_eq!(tensor_len(1, 5), 5);
/// assert_eq!(tensor_len(4, 3), 81);
/// ```
pub fn tensor_len(dim: usize, resolution: usize) -> usize {
    resolution.pow(dim as u32)
}

/// Flat offset of a multi-index in the row-major tensor buffer.
///
/// Coordinate 0 is the most significant mixed-radix digit. Every coordinate
/// must lie in `[1, resolution]` and `pos` must be non-empty; both are
/// debug-asserted.
///
/// # Examples
///
/// ```
/// use tenfock_core::encode;
///
/// assert_eq!(encode(&[1, 1, 1], 4), 0);
/// assert_eq!(encode(&[1, 1, 2], 4), 1);
/// assert_eq!(encode(&[2, 1, 1], 4), 16);
/// assert_eq!(encode(&[4, 4, 4], 4), 63);
/// ```
pub fn encode(pos: &[usize], resolution: usize) -> usize {
    debug_assert!(!pos.is_empty(), "multi-index must have at least one mode");
    debug_assert!(
        pos.iter().all(|&c| (1..=resolution).contains(&c)),
        "coordinates must lie in [1, {}], got {:?}",
        resolution,
        pos
    );

    let mut offset = pos[0] - 1;
    for &c in &pos[1..] {
        offset = offset * resolution + (c - 1);
    }
    offset
}

/// Multi-index of a flat offset; exact inverse of [`encode`].
///
/// The recurrence kernels only ever encode; decoding is provided for callers
/// that want a per-mode view of a flat tensor, and for tests.
///
/// # Examples
///
/// ```
/// use tenfock_core::{decode, encode};
///
/// let pos = decode(16, 3, 4);
/// assert_eq!(pos.as_slice(), &[2, 1, 1]);
/// assert_eq!(encode(&pos, 4), 16);
/// ```
pub fn decode(offset: usize, dim: usize, resolution: usize) -> MultiIndex {
    debug_assert!(dim >= 1, "tensor must have at least one mode");
    debug_assert!(
        offset < tensor_len(dim, resolution),
        "offset {} out of range for {} modes at resolution {}",
        offset,
        dim,
        resolution
    );

    let mut pos = MultiIndex::from_elem(1, dim);
    let mut rest = offset;
    for c in pos.iter_mut().rev() {
        *c = rest % resolution + 1;
        rest /= resolution;
    }
    pos
}
