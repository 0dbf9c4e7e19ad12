//! Shared recurrence driver and input validation.
//!
//! Every kernel in this crate evaluates the same linear recurrence over the
//! Fock-basis hypercube; the variants differ only in their seed value, the
//! coefficient of the linear term, the correction factor, the selection rule
//! deciding which entries are computed at all, and the coordinate range the
//! correction sum sweeps. [`run`] is the single traversal loop all six public
//! entry points parameterize.

use ndarray::{ArrayD, ArrayView1, ArrayView2, IxDyn};
use num_complex::ComplexFloat;
use std::ops::Range;
use tenfock_core::{encode, tensor_len, Odometer, Step};

use crate::error::{FockError, FockResult};

/// Side length of a square coupling matrix, or an error naming the operation.
pub(crate) fn square_dim<T>(operation: &str, r: &ArrayView2<T>) -> FockResult<usize> {
    if r.nrows() != r.ncols() {
        return Err(FockError::not_square(operation, r.nrows(), r.ncols()));
    }
    Ok(r.nrows())
}

/// Reject a zero photon-number cutoff.
pub(crate) fn check_resolution(operation: &str, resolution: usize) -> FockResult<()> {
    if resolution < 1 {
        return Err(FockError::invalid_resolution(operation));
    }
    Ok(())
}

/// Require the source vector to have exactly `expected` entries.
pub(crate) fn check_source_len<T>(
    operation: &str,
    y: &ArrayView1<T>,
    expected: usize,
) -> FockResult<()> {
    if y.len() != expected {
        return Err(FockError::dimension_mismatch(
            operation,
            expected,
            y.len(),
            "source vector length must match the coupling matrix dimension",
        ));
    }
    Ok(())
}

/// Square roots of the integers `0..=resolution`, in the element type.
///
/// The renormalized kernels divide by `intsqrt[pos[k]-1]`; that entry is
/// never `intsqrt[0]` because the changed coordinate of a traversal step
/// always satisfies `pos[k] >= 2` (the all-ones seed is written separately).
pub(crate) fn intsqrt_table<T: ComplexFloat>(resolution: usize) -> Vec<T> {
    (0..=resolution)
        .map(|n| T::from(n).unwrap().sqrt())
        .collect()
}

/// Drive the odometer over `[1, resolution]^dim` and evaluate the recurrence.
///
/// For each step `(pos, from, k)` with `select(pos)` true:
///
/// ```text
/// H[enc(pos)] = H[enc(from)] * base(k, pos)     (zero when base is None)
///             - sum over i in sweep(k) with from[i] > 1 of
///                   correction(k, i, step) * H[enc(from - e_i)]
/// ```
///
/// Entries whose selection rule fails stay at the additive identity; the
/// whole buffer is zero-initialized up front, so skipped entries read back
/// as exact zeros. No entry is written twice.
pub(crate) fn run<T, Sel, Base, Sweep, Corr>(
    dim: usize,
    resolution: usize,
    seed: T,
    select: Sel,
    base: Base,
    sweep: Sweep,
    correction: Corr,
) -> ArrayD<T>
where
    T: ComplexFloat,
    Sel: Fn(&[usize]) -> bool,
    Base: Fn(usize, &[usize]) -> Option<T>,
    Sweep: Fn(usize) -> Range<usize>,
    Corr: Fn(usize, usize, &Step) -> T,
{
    let mut h = vec![T::zero(); tensor_len(dim, resolution)];
    h[0] = seed;

    let mut delta = tenfock_core::MultiIndex::from_elem(1, dim);
    for step in Odometer::new(dim, resolution) {
        if !select(&step.pos) {
            continue;
        }

        let mut value = match base(step.changed, &step.pos) {
            Some(coeff) => h[encode(&step.from, resolution)] * coeff,
            None => T::zero(),
        };

        for i in sweep(step.changed) {
            if step.from[i] > 1 {
                delta.clone_from(&step.from);
                delta[i] -= 1;
                value = value - correction(step.changed, i, &step) * h[encode(&delta, resolution)];
            }
        }

        h[encode(&step.pos, resolution)] = value;
    }

    ArrayD::from_shape_vec(IxDyn(&vec![resolution; dim]), h)
        .expect("buffer length equals resolution^dim by construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_square_dim_accepts_square() {
        let r = arr2(&[[1.0, 2.0], [2.0, 1.0]]);
        assert_eq!(square_dim("op", &r.view()).unwrap(), 2);
    }

    #[test]
    fn test_square_dim_rejects_rectangular() {
        let r = ndarray::Array2::<f64>::zeros((2, 3));
        let err = square_dim("op", &r.view()).unwrap_err();
        assert_eq!(err, FockError::not_square("op", 2, 3));
    }

    #[test]
    fn test_intsqrt_table_values() {
        let table = intsqrt_table::<f64>(4);
        assert_eq!(table.len(), 5);
        assert_eq!(table[0], 0.0);
        assert_eq!(table[1], 1.0);
        assert_eq!(table[4], 2.0);
        assert!((table[2] - 2.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_run_writes_seed_only_when_everything_skipped() {
        let h = run(
            2,
            3,
            7.0_f64,
            |_| false,
            |_, _| None,
            |_| 0..2,
            |_, _, _| 0.0,
        );
        assert_eq!(h.as_slice().unwrap()[0], 7.0);
        assert!(h.as_slice().unwrap()[1..].iter().all(|&v| v == 0.0));
    }
}
