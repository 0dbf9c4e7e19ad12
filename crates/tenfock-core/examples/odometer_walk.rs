//! Walk a small Fock-basis hypercube and print each traversal step.
//!
//! Run with: cargo run -p tenfock-core --example odometer_walk

use tenfock_core::{encode, Odometer};

fn main() {
    let dim = 2;
    let resolution: usize = 3;

    println!(
        "Odometer traversal of [1, {}]^{} ({} steps):\n",
        resolution,
        dim,
        resolution.pow(dim as u32) - 1
    );
    println!("{:>6}  {:>8}  {:>8}  changed", "offset", "pos", "from");

    for step in Odometer::new(dim, resolution) {
        println!(
            "{:>6}  {:>8}  {:>8}  {}",
            encode(&step.pos, resolution),
            format!("{:?}", step.pos.as_slice()),
            format!("{:?}", step.from.as_slice()),
            step.changed
        );
    }
}
