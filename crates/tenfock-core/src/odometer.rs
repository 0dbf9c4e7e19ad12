//! Odometer traversal of the Fock-basis hypercube.
//!
//! The recurrence kernels need to visit every multi-index of
//! `[1, resolution]^dim` exactly once, in an order where the value each entry
//! is computed from has always been written already. A mixed-radix increment
//! with carry (digit 0 fastest-changing) gives exactly that order, and at
//! every step the index reached differs from its predecessor by +1 in a
//! single coordinate.

use smallvec::SmallVec;

/// Multi-index over optical modes, one 1-based coordinate per mode.
///
/// Inline storage for up to 6 modes; tensors that large are already at the
/// edge of what dense Fock-basis storage can hold.
pub type MultiIndex = SmallVec<[usize; 6]>;

/// One step of the odometer traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Multi-index reached by this step.
    pub pos: MultiIndex,
    /// Predecessor: identical to `pos` except coordinate `changed`, which is
    /// lower by exactly 1.
    pub from: MultiIndex,
    /// The mode coordinate in which `pos` and `from` differ.
    pub changed: usize,
}

/// Iterator over every multi-index of `[1, resolution]^dim` except the
/// all-ones start, in mixed-radix order.
///
/// Yields `resolution^dim - 1` [`Step`]s. The order guarantees that when a
/// step `(pos, from, changed)` is produced, `from` and every multi-index
/// obtained from `from` by decrementing a single coordinate with value > 1
/// were produced by strictly earlier steps (or are the all-ones start).
///
/// # Examples
///
/// ```
/// use tenfock_core::Odometer;
///
/// let trace: Vec<(Vec<usize>, Vec<usize>, usize)> = Odometer::new(2, 2)
///     .map(|s| (s.pos.to_vec(), s.from.to_vec(), s.changed))
///     .collect();
/// assert_eq!(
///     trace,
///     vec![
///         (vec![2, 1], vec![1, 1], 0),
///         (vec![1, 2], vec![1, 1], 1),
///         (vec![2, 2], vec![1, 2], 0),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Odometer {
    pos: MultiIndex,
    from: MultiIndex,
    /// Coordinate whose `from` entry still reflects the pre-carry value and
    /// must be bumped before the next step is reported.
    carry: Option<usize>,
    resolution: usize,
    remaining: usize,
}

impl Odometer {
    /// Create a traversal over `dim` modes at the given photon-number cutoff.
    ///
    /// # Panics
    ///
    /// Panics if `dim` or `resolution` is zero; both are structural
    /// preconditions of the hypercube.
    pub fn new(dim: usize, resolution: usize) -> Self {
        assert!(dim >= 1, "traversal needs at least one mode");
        assert!(resolution >= 1, "resolution must be at least 1");
        Odometer {
            pos: MultiIndex::from_elem(1, dim),
            from: MultiIndex::from_elem(1, dim),
            carry: None,
            resolution,
            remaining: resolution.pow(dim as u32) - 1,
        }
    }

    /// Number of modes being traversed.
    pub fn dim(&self) -> usize {
        self.pos.len()
    }

    /// Photon-number cutoff of the traversal.
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

impl Iterator for Odometer {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // The previous step overflowed below this digit; its predecessor
        // entry was left at the pre-increment value and is synced now.
        if let Some(d) = self.carry.take() {
            self.from[d] += 1;
        }

        let mut changed = 0;
        for ii in 0..self.pos.len() {
            if self.pos[ii] == self.resolution {
                self.pos[ii] = 1;
                self.from[ii] = 1;
                self.carry = Some(ii + 1);
            } else {
                self.from[ii] = self.pos[ii];
                self.pos[ii] += 1;
                changed = ii;
                break;
            }
        }

        Some(Step {
            pos: self.pos.clone(),
            from: self.from.clone(),
            changed,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Odometer {}

impl std::iter::FusedIterator for Odometer {}
