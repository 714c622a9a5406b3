use crate::model::ValidRange;
use bitvec::prelude::*;

/// Membership set over the slots of a weighted pool
///
/// One bit per distinct observed value, so its size follows the pool and not
/// the configured range. Slots whose value lies outside the range are marked
/// disallowed once at construction. Used to reject candidate drawings with
/// repeated or out-of-range numbers.
#[derive(Clone, Debug)]
pub struct NumberSet {
    allowed: BitVec,
    seen: BitVec,
}

impl NumberSet {
    /// Create an empty set over the pool `values`, allowing only those inside `range`
    pub fn new(values: &[u32], range: ValidRange) -> Self {
        Self {
            allowed: values.iter().map(|&value| range.contains(value)).collect(),
            seen: bitvec![0; values.len()],
        }
    }

    /// Mark a pool slot as drawn
    ///
    /// Returns false if the slot is unknown, holds an out-of-range value or
    /// was already drawn
    pub fn insert(&mut self, slot: usize) -> bool {
        if self.allowed.get(slot).as_deref() != Some(&true) {
            return false;
        }
        if self.seen.get(slot).as_deref() == Some(&true) {
            return false;
        }
        self.seen.set(slot, true);
        true
    }

    /// Forget every drawn slot, keeping the allocation
    pub fn clear(&mut self) {
        self.seen.fill(false);
    }

    /// Count drawn slots
    pub fn count(&self) -> usize {
        self.seen.count_ones()
    }

    /// Count slots whose value lies inside the range
    pub fn allowed(&self) -> usize {
        self.allowed.count_ones()
    }
}
