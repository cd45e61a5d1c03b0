use bitvec::prelude::*;

/// Fixed-size bitset of grid cells, indexed row-major
///
/// Tracks which cells a partial path already consumes so the
/// no-reuse check is O(1) instead of a scan over the path.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
}

impl CellSet {
    /// Create a set with room for `cell_count` cells, none present
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Mark a cell as present
    ///
    /// Indices outside the capacity are ignored
    pub fn insert(&mut self, cell: usize) {
        if cell < self.bits.len() {
            self.bits.set(cell, true);
        }
    }

    /// Mark a cell as absent
    pub fn remove(&mut self, cell: usize) {
        if cell < self.bits.len() {
            self.bits.set(cell, false);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }
}
