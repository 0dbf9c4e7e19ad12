//! Multidimensional Hermite polynomial tensors.
//!
//! These are the workhorse objects for Fock-basis matrix elements of generic
//! Gaussian operations: the tensor `H_k^{(R)}(y)` indexed by one photon
//! number per mode, generated by the recurrence
//!
//! ```text
//! H[pos] = y[k] * H[from] - sum_i (from[i]-1) * R[k,i] * H[from - e_i]
//! ```
//!
//! where `k` is the coordinate in which `pos` exceeds its predecessor
//! `from`. The renormalized variant rescales each entry by the square root
//! of the product of coordinate factorials, which keeps magnitudes bounded
//! at high cutoffs and matches the normalization of Fock-state amplitudes.

use ndarray::{ArrayD, ArrayView1, ArrayView2};
use num_complex::ComplexFloat;

use crate::error::FockResult;
use crate::recurrence::{check_resolution, check_source_len, intsqrt_table, run, square_dim};

/// Compute the multidimensional Hermite polynomial tensor `H_k^{(R)}(y)`.
///
/// `r` is the symmetric `n x n` coupling matrix, `y` the length-`n` source
/// vector, and `resolution` the photon-number cutoff. The returned tensor
/// has shape `[resolution; n]`, row-major, with the multi-index of each
/// entry offset by one from the photon numbers it represents.
///
/// # Errors
///
/// Returns an error if `r` is not square, `y.len() != r.nrows()`, or
/// `resolution` is zero.
///
/// # Examples
///
/// With a zero coupling matrix the recurrence degenerates to powers of `y`:
///
/// ```
/// use ndarray::{arr1, arr2};
/// use tenfock_kernels::hermite;
///
/// let r = arr2(&[[0.0_f64]]);
/// let y = arr1(&[2.0_f64]);
/// let h = hermite(&r.view(), &y.view(), 4).unwrap();
/// assert_eq!(h.as_slice().unwrap(), &[1.0, 2.0, 4.0, 8.0]);
/// ```
pub fn hermite<T>(
    r: &ArrayView2<T>,
    y: &ArrayView1<T>,
    resolution: usize,
) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    let dim = square_dim("hermite", r)?;
    check_source_len("hermite", y, dim)?;
    check_resolution("hermite", resolution)?;

    Ok(run(
        dim,
        resolution,
        T::one(),
        |_| true,
        |k, _| Some(y[k]),
        |_| 0..dim,
        |k, i, step| T::from(step.from[i] - 1).unwrap() * r[[k, i]],
    ))
}

/// Compute the renormalized Hermite tensor `H~_k^{(R)}(y)`.
///
/// Every entry equals the plain [`hermite`] entry divided by the square root
/// of the product of its coordinate photon-number factorials. For physical
/// coupling matrices this is the tensor of Fock-basis amplitudes directly.
///
/// # Errors
///
/// Same preconditions as [`hermite`].
///
/// # Examples
///
/// ```
/// use ndarray::{arr1, arr2};
/// use tenfock_kernels::{hermite, hermite_renormalized};
///
/// let r = arr2(&[[0.4_f64]]);
/// let y = arr1(&[1.5_f64]);
/// let plain = hermite(&r.view(), &y.view(), 5).unwrap();
/// let renorm = hermite_renormalized(&r.view(), &y.view(), 5).unwrap();
///
/// // Entry n of the renormalized tensor is H[n]/sqrt(n!).
/// let mut factorial = 1.0;
/// for n in 0..5 {
///     if n > 0 {
///         factorial *= n as f64;
///     }
///     let expected = plain.as_slice().unwrap()[n] / factorial.sqrt();
///     assert!((renorm.as_slice().unwrap()[n] - expected).abs() < 1e-12);
/// }
/// ```
pub fn hermite_renormalized<T>(
    r: &ArrayView2<T>,
    y: &ArrayView1<T>,
    resolution: usize,
) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    let dim = square_dim("hermite_renormalized", r)?;
    check_source_len("hermite_renormalized", y, dim)?;
    check_resolution("hermite_renormalized", resolution)?;

    let intsqrt = intsqrt_table::<T>(resolution);
    Ok(run(
        dim,
        resolution,
        T::one(),
        |_| true,
        |k, pos| Some(y[k] / intsqrt[pos[k] - 1]),
        |_| 0..dim,
        |k, i, step| intsqrt[step.from[i] - 1] / intsqrt[step.pos[k] - 1] * r[[k, i]],
    ))
}
