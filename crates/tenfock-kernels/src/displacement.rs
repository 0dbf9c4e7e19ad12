//! Fock-basis matrix elements of a displacement operation.
//!
//! Displacement is the one Gaussian operation with no coupling matrix: it is
//! the scalar-identity interferometer driven by the source vector
//! `y = (alpha, -conj(alpha))`. The recurrence therefore carries a linear
//! term but only a single correction term, coupling each mode coordinate to
//! the opposite one.

use ndarray::{ArrayD, ArrayView1};
use num_complex::ComplexFloat;

use crate::error::{FockError, FockResult};
use crate::recurrence::{check_resolution, intsqrt_table, run};

/// Compute the Fock-basis tensor of a displacement operation.
///
/// `y` holds the displacement parameter and its negated conjugate,
/// `(alpha, -conj(alpha))`; the seed `exp(y[0]*y[1]/2)` is then the vacuum
/// amplitude `exp(-|alpha|^2/2)`. The output has shape
/// `[resolution, resolution]`, bra photon number first.
///
/// # Errors
///
/// Returns an error if `y` does not have exactly 2 entries or `resolution`
/// is zero.
///
/// # Examples
///
/// The first column reproduces the coherent-state amplitudes
/// `<n|D(alpha)|0> = exp(-|alpha|^2/2) alpha^n / sqrt(n!)`:
///
/// ```
/// use ndarray::arr1;
/// use num_complex::Complex64;
/// use tenfock_kernels::displacement;
///
/// let alpha = Complex64::new(0.3, 0.4);
/// let y = arr1(&[alpha, -alpha.conj()]);
/// let h = displacement(&y.view(), 4).unwrap();
///
/// let vacuum = (-(alpha.norm_sqr()) / 2.0).exp();
/// let mut expected = Complex64::new(vacuum, 0.0);
/// for n in 0..4 {
///     assert!((h[[n, 0]] - expected).norm() < 1e-12);
///     expected = expected * alpha / ((n + 1) as f64).sqrt();
/// }
/// ```
pub fn displacement<T>(y: &ArrayView1<T>, resolution: usize) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    if y.len() != 2 {
        return Err(FockError::dimension_mismatch(
            "displacement",
            2,
            y.len(),
            "displacement takes the source pair (alpha, -conj(alpha))",
        ));
    }
    check_resolution("displacement", resolution)?;

    let intsqrt = intsqrt_table::<T>(resolution);
    let seed = (T::from(0.5).unwrap() * y[0] * y[1]).exp();
    Ok(run(
        2,
        resolution,
        seed,
        |_| true,
        |k, pos| Some(y[k] / intsqrt[pos[k] - 1]),
        // the scalar identity couples each coordinate only to the other one
        |k| (1 - k)..(2 - k),
        |k, i, step| intsqrt[step.from[i] - 1] / intsqrt[step.pos[k] - 1],
    ))
}
