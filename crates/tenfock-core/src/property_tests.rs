//! Property-based tests for the index codec and the odometer traversal.
//!
//! These verify the structural guarantees the recurrence kernels rely on,
//! over all small (dim, resolution) combinations.

use super::*;
use proptest::prelude::*;

/// Strategy for hypercube shapes small enough for exhaustive scans.
fn small_hypercube() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=4, 1usize..=4)
}

proptest! {
    /// encode is injective and its image is exactly [0, resolution^dim).
    #[test]
    fn test_encode_bijection((dim, resolution) in small_hypercube()) {
        let len = tensor_len(dim, resolution);
        let mut offsets: Vec<usize> = (0..len)
            .map(|offset| encode(&decode(offset, dim, resolution), resolution))
            .collect();
        offsets.sort_unstable();
        prop_assert_eq!(offsets, (0..len).collect::<Vec<_>>());
    }

    /// decode is the exact inverse of encode over the whole hypercube.
    #[test]
    fn test_decode_inverse((dim, resolution) in small_hypercube()) {
        for offset in 0..tensor_len(dim, resolution) {
            let pos = decode(offset, dim, resolution);
            prop_assert_eq!(pos.len(), dim);
            prop_assert!(pos.iter().all(|&c| (1..=resolution).contains(&c)));
            prop_assert_eq!(encode(&pos, resolution), offset);
        }
    }

    /// Every step's predecessor, and every second-order predecessor obtained
    /// from it by decrementing a coordinate > 1, was visited strictly earlier.
    #[test]
    fn test_odometer_prefix_property((dim, resolution) in small_hypercube()) {
        let mut visited = vec![false; tensor_len(dim, resolution)];
        visited[0] = true;
        for step in Odometer::new(dim, resolution) {
            prop_assert!(visited[encode(&step.from, resolution)], "predecessor of {:?} not yet visited", step.pos);
            for ii in 0..dim {
                if step.from[ii] > 1 {
                    let mut delta = step.from.clone();
                    delta[ii] -= 1;
                    prop_assert!(visited[encode(&delta, resolution)], "second-order predecessor {:?} of {:?} not yet visited", delta, step.pos);
                }
            }
            visited[encode(&step.pos, resolution)] = true;
        }
        prop_assert!(visited.iter().all(|&v| v));
    }

    /// The changed coordinate reported by each step is the first coordinate
    /// where pos and from differ, and the only one.
    #[test]
    fn test_odometer_changed_coordinate((dim, resolution) in small_hypercube()) {
        for step in Odometer::new(dim, resolution) {
            let diffs: Vec<usize> = (0..dim).filter(|&ii| step.pos[ii] != step.from[ii]).collect();
            prop_assert_eq!(&diffs, &[step.changed]);
            prop_assert_eq!(step.pos[step.changed], step.from[step.changed] + 1);
        }
    }
}
