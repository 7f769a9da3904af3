/*!
# Utilities

Helpers for the working storage of the algorithms. Every search struct in [`algo`](crate::algo)
owns its scratch buffers and resizes them at the start of each run; [`ResetScratch`] implements
that resize-and-clear step without giving up the allocation.
*/

use crate::prelude::*;

/// Helper trait for scratch datastructures that are reinitialized for every run.
///
/// Unlike `clear()`, the buffer ends up with exactly `n` entries in their initial state.
pub trait ResetScratch {
    /// Resets the buffer to `n` entries in their initial state
    fn reset_scratch(&mut self, n: NumNodes);
}

impl ResetScratch for NodeBitSet {
    fn reset_scratch(&mut self, n: NumNodes) {
        if self.number_of_bits() == n {
            self.clear_all();
        } else {
            *self = NodeBitSet::new(n);
        }
    }
}

/// Resets a `Vec` to `n` copies of `value`, keeping its allocation
pub(crate) fn assign<T: Clone>(vec: &mut Vec<T>, n: NumNodes, value: T) {
    vec.clear();
    vec.resize(n as usize, value);
}
