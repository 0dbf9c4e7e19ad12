//! Fock-basis matrix elements of squeezing operations.
//!
//! Single-mode squeezing acts on one mode (bra/ket dimension 2) and creates
//! or destroys photons in pairs, so bra and ket photon numbers always agree
//! in parity. Two-mode squeezing acts on a pair of modes (dimension 4) and
//! conserves the photon-number difference between the two mode pairs. Both
//! kernels are pure correction sums over the renormalized recurrence, with
//! the seed carrying the vacuum amplitude.

use ndarray::{ArrayD, ArrayView2};
use num_complex::ComplexFloat;

use crate::error::{FockError, FockResult};
use crate::recurrence::{check_resolution, intsqrt_table, run, square_dim};

/// Compute the Fock-basis tensor of a single-mode squeezing operation.
///
/// `r` is the symmetric `2 x 2` coupling matrix of the squeezer; the seed is
/// `sqrt(-r[(0,1)])`, the vacuum-to-vacuum amplitude. Entries whose bra and
/// ket photon numbers differ in parity stay exactly zero.
///
/// For real element types the caller must supply a coupling with
/// `r[(0,1)] < 0`; physically valid squeezing matrices satisfy this, and the
/// kernel does not check it (a non-negative value yields a NaN seed).
///
/// # Errors
///
/// Returns an error if `r` is not `2 x 2` or `resolution` is zero.
pub fn squeezing<T>(r: &ArrayView2<T>, resolution: usize) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    let dim = square_dim("squeezing", r)?;
    if dim != 2 {
        return Err(FockError::dimension_mismatch(
            "squeezing",
            2,
            dim,
            "single-mode squeezing takes a 2x2 coupling matrix",
        ));
    }
    check_resolution("squeezing", resolution)?;

    let intsqrt = intsqrt_table::<T>(resolution);
    Ok(run(
        dim,
        resolution,
        (-r[[0, 1]]).sqrt(),
        |pos| pos[0] % 2 == pos[1] % 2,
        |_, _| None,
        |_| 0..2,
        |k, i, step| intsqrt[step.from[i] - 1] / intsqrt[step.pos[k] - 1] * r[[k, i]],
    ))
}

/// Compute the Fock-basis tensor of a two-mode squeezing operation.
///
/// `r` is the symmetric `4 x 4` coupling matrix; the seed is `-r[(0,2)]`.
/// Two-mode squeezing creates photons pairwise across the two modes, so only
/// entries with `pos[0] - pos[1] == pos[2] - pos[3]` are populated.
///
/// # Errors
///
/// Returns an error if `r` is not `4 x 4` or `resolution` is zero.
pub fn two_mode_squeezing<T>(r: &ArrayView2<T>, resolution: usize) -> FockResult<ArrayD<T>>
where
    T: ComplexFloat,
{
    let dim = square_dim("two_mode_squeezing", r)?;
    if dim != 4 {
        return Err(FockError::dimension_mismatch(
            "two_mode_squeezing",
            4,
            dim,
            "two-mode squeezing takes a 4x4 coupling matrix",
        ));
    }
    check_resolution("two_mode_squeezing", resolution)?;

    let intsqrt = intsqrt_table::<T>(resolution);
    Ok(run(
        dim,
        resolution,
        -r[[0, 2]],
        // pos[0] - pos[1] == pos[2] - pos[3], rearranged to avoid underflow
        |pos| pos[0] + pos[3] == pos[1] + pos[2],
        |_, _| None,
        |_| 0..4,
        |k, i, step| intsqrt[step.from[i] - 1] / intsqrt[step.pos[k] - 1] * r[[k, i]],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;
    use tenfock_core::decode;

    #[test]
    fn test_squeezing_seed() {
        let r = arr2(&[[0.5_f64, -0.8], [-0.8, 0.5]]);
        for resolution in 1..=4 {
            let h = squeezing(&r.view(), resolution).unwrap();
            assert_relative_eq!(h.as_slice().unwrap()[0], 0.8_f64.sqrt());
        }
    }

    #[test]
    fn test_squeezing_hand_computed_entries() {
        let (a, b) = (0.5_f64, -0.8);
        let r = arr2(&[[a, b], [b, a]]);
        let h = squeezing(&r.view(), 3).unwrap();
        let s = (-b).sqrt();
        let sqrt2 = 2.0_f64.sqrt();

        assert_relative_eq!(h[[2, 0]], -a * s / sqrt2, max_relative = 1e-12);
        assert_relative_eq!(h[[1, 1]], -b * s, max_relative = 1e-12);
        assert_relative_eq!(h[[0, 2]], -a * s / sqrt2, max_relative = 1e-12);
        assert_relative_eq!(
            h[[2, 2]],
            (a * a / 2.0 + b * b) * s,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_squeezing_parity_zero_fill() {
        let r = arr2(&[[0.5_f64, -0.8], [-0.8, 0.5]]);
        let resolution = 5;
        let h = squeezing(&r.view(), resolution).unwrap();
        for (offset, &value) in h.as_slice().unwrap().iter().enumerate() {
            let pos = decode(offset, 2, resolution);
            if pos[0] % 2 != pos[1] % 2 {
                assert_eq!(value, 0.0, "parity-violating entry at {:?}", pos);
            }
        }
    }

    #[test]
    fn test_two_mode_squeezing_seed_and_pair_creation() {
        let t = 0.6_f64;
        // Coupling of an ideal two-mode squeezer with tanh parameter t on the
        // bra/ket cross blocks.
        let r = arr2(&[
            [0.0_f64, t, -t, 0.0],
            [t, 0.0, 0.0, -t],
            [-t, 0.0, 0.0, t],
            [0.0, -t, t, 0.0],
        ]);
        let resolution = 3;
        let h = two_mode_squeezing(&r.view(), resolution).unwrap();
        let flat = h.as_slice().unwrap();

        assert_relative_eq!(flat[0], t, max_relative = 1e-12);
        // (2,1,2,1): one photon in the first bra and first ket mode.
        let offset = tenfock_core::encode(&[2, 1, 2, 1], resolution);
        assert_relative_eq!(flat[offset], t * t, max_relative = 1e-12);
    }

    #[test]
    fn test_two_mode_squeezing_difference_conservation() {
        let r = arr2(&[
            [0.1_f64, 0.6, -0.6, 0.2],
            [0.6, 0.1, 0.2, -0.6],
            [-0.6, 0.2, 0.1, 0.6],
            [0.2, -0.6, 0.6, 0.1],
        ]);
        let resolution = 3;
        let h = two_mode_squeezing(&r.view(), resolution).unwrap();
        for (offset, &value) in h.as_slice().unwrap().iter().enumerate() {
            if value != 0.0 {
                let pos = decode(offset, 4, resolution);
                assert_eq!(
                    pos[0] + pos[3],
                    pos[1] + pos[2],
                    "nonzero entry at {:?} violates pairwise photon creation",
                    pos
                );
            }
        }
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        let r3 = ndarray::Array2::<f64>::zeros((3, 3));
        assert!(matches!(
            squeezing(&r3.view(), 2),
            Err(FockError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            two_mode_squeezing(&r3.view(), 2),
            Err(FockError::DimensionMismatch { .. })
        ));

        let rect = ndarray::Array2::<f64>::zeros((2, 4));
        assert!(matches!(
            squeezing(&rect.view(), 2),
            Err(FockError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let r2 = ndarray::Array2::<f64>::zeros((2, 2));
        let r4 = ndarray::Array2::<f64>::zeros((4, 4));
        assert_eq!(
            squeezing(&r2.view(), 0).unwrap_err(),
            FockError::invalid_resolution("squeezing")
        );
        assert_eq!(
            two_mode_squeezing(&r4.view(), 0).unwrap_err(),
            FockError::invalid_resolution("two_mode_squeezing")
        );
    }
}
