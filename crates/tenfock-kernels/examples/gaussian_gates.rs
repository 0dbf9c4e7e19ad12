//! Compute small Fock-basis tensors for the standard Gaussian gates and
//! print their nonzero structure.
//!
//! Run with: cargo run -p tenfock-kernels --example gaussian_gates

use ndarray::arr2;
use tenfock_core::decode;
use tenfock_kernels::{interferometer, squeezing, FockResult};

fn main() -> FockResult<()> {
    let resolution = 4;

    // Ideal single-mode squeezer, z = 0.5
    let z = 0.5_f64;
    let (t, s) = (z.tanh(), 1.0 / z.cosh());
    let r = arr2(&[[t, -s], [-s, -t]]);
    let h = squeezing(&r.view(), resolution)?;
    println!("single-mode squeezing, z = {} (parity-conserving):", z);
    for (offset, &value) in h.as_slice().unwrap().iter().enumerate() {
        if value != 0.0 {
            let pos = decode(offset, 2, resolution);
            println!("  <{}|S|{}> = {:+.6}", pos[0] - 1, pos[1] - 1, value);
        }
    }

    // 50:50 beam splitter (photon-number conserving)
    let c = std::f64::consts::FRAC_1_SQRT_2;
    let r = arr2(&[
        [0.0_f64, 0.0, c, c],
        [0.0, 0.0, -c, c],
        [c, -c, 0.0, 0.0],
        [c, c, 0.0, 0.0],
    ]);
    let h = interferometer(&r.view(), 3)?;
    println!("\n50:50 beam splitter (photon-number conserving):");
    for (offset, &value) in h.as_slice().unwrap().iter().enumerate() {
        if value != 0.0 {
            let pos = decode(offset, 4, 3);
            println!(
                "  <{}{}|U|{}{}> = {:+.6}",
                pos[0] - 1,
                pos[1] - 1,
                pos[2] - 1,
                pos[3] - 1,
                value
            );
        }
    }

    Ok(())
}
