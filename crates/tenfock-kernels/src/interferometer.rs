//! Fock-basis matrix elements of a linear interferometer.
//!
//! An interferometer over `m` optical modes is parameterized by a symmetric
//! `2m x 2m` coupling matrix whose first `m` coordinates address the bra
//! side and last `m` the ket side. Photon number is conserved, so only
//! entries whose bra photon count equals their ket photon count are ever
//! populated; everything else stays exactly zero.

use ndarray::{ArrayD, ArrayView2};
use num_complex::ComplexFloat;

use crate::error::{FockError, FockResult};
use crate::recurrence::{check_resolution, intsqrt_table, run, square_dim};

/// Compute the Fock-basis tensor of a linear interferometer.
///
/// `r` is the symmetric `2m x 2m` coupling matrix assembled by the caller
/// from the interferometer unitary; `resolution` is the photon-number
/// cutoff. The output has shape `[resolution; 2m]` with the first `m`
/// multi-index coordinates addressing bra photon numbers and the last `m`
/// the ket side.
///
/// There is no linear term in this recurrence: each selected entry is a pure
/// correction sum, and the sum sweeps the opposite mode half from the
/// coordinate that changed (bra increments couple to ket predecessors and
/// vice versa).
///
/// # Errors
///
/// Returns an error if `r` is not square, its dimension is odd, or
/// `resolution` is zero.
///
/// # Examples
///
/// A single-mode interferometer conserves photon number exactly, so its
/// tensor is diagonal:
///
/// ```
/// use ndarray::arr2;
/// use tenfock_kernels::interferometer;
///
/// let r = arr2(&[[0.0_f64, 1.0], [1.0, 0.0]]);
/// let h = interferometer(&r.view(), 3).unwrap();
/// for bra in 0..3 {
///     for ket in 0..3 {
///         if bra != ket {
///             assert_eq!(h[[bra, ket]], 0.0);
///         }
///     }
/// }
/// ```
pub fn interferometer<T>(r: &ArrayView2<T>, resolution: usize) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    let dim = square_dim("interferometer", r)?;
    if dim % 2 != 0 {
        return Err(FockError::odd_dimension("interferometer", dim));
    }
    check_resolution("interferometer", resolution)?;
    let modes = dim / 2;

    let intsqrt = intsqrt_table::<T>(resolution);
    Ok(run(
        dim,
        resolution,
        T::one(),
        |pos| pos[..modes].iter().sum::<usize>() == pos[modes..].iter().sum::<usize>(),
        |_, _| None,
        move |k| if k >= modes { 0..modes } else { modes..dim },
        |k, i, step| intsqrt[step.from[i] - 1] / intsqrt[step.pos[k] - 1] * r[[k, i]],
    ))
}
