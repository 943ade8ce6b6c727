use bitvec::prelude::*;

/// Fixed-size bitset over the dense value ids of one column
///
/// Uses 0-based ids as assigned by [`ColumnIndex`](crate::algorithm::columns::ColumnIndex).
#[derive(Clone, Debug)]
pub struct ValueBitset {
    bits: BitVec,
}

impl ValueBitset {
    /// Create a bitset with no values present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert a value id, returning true when it was not already present
    ///
    /// Ids beyond the capacity are ignored.
    pub fn insert(&mut self, id: usize) -> bool {
        if id >= self.bits.len() || self.contains(id) {
            return false;
        }
        self.bits.set(id, true);
        true
    }

    /// Test value membership
    pub fn contains(&self, id: usize) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Remove every value, keeping the capacity
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Count values in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
