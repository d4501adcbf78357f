//! Fixed-capacity bit array backed by 64-bit blocks
//!
//! Bit `j` of block `b` (least-significant bit first) is global index `b * 64 + j`.
//! This is the layout Guava's `LockFreeBitArray` uses, so blocks can be written to
//! and read from the wire without reordering.

use bitvec::prelude::*;

/// Number of bits in one storage block
pub const BLOCK_BITS: u64 = 64;

/// Bit array whose capacity is always a multiple of 64
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVector {
    bits: BitVec<u64, Lsb0>,
}

impl BitVector {
    /// Create a zeroed bit array holding at least `num_bits` bits
    ///
    /// The capacity is rounded up to the next multiple of 64.
    pub fn new(num_bits: u64) -> Self {
        let capacity = num_bits.div_ceil(BLOCK_BITS) * BLOCK_BITS;
        Self {
            bits: bitvec![u64, Lsb0; 0; capacity as usize],
        }
    }

    /// Rebuild a bit array from its blocks, in wire order
    pub fn from_blocks(blocks: Vec<u64>) -> Self {
        Self {
            bits: BitVec::from_vec(blocks),
        }
    }

    /// Capacity in bits
    pub fn capacity(&self) -> u64 {
        self.bits.len() as u64
    }

    /// Number of 64-bit blocks
    pub fn block_count(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Test a bit. Indices past the capacity read as unset.
    pub fn get(&self, index: u64) -> bool {
        self.bits
            .get(index as usize)
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    /// Set a bit, returning `true` if it was previously unset
    ///
    /// # Panics
    /// Panics if `index >= capacity()`.
    pub fn set(&mut self, index: u64) -> bool {
        let index = index as usize;
        if self.bits[index] {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Iterate over the 64-bit blocks in ascending order
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.bits.as_raw_slice().iter().copied()
    }

    /// Number of set bits
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones() as u64
    }

    /// OR another bit array of the same capacity into this one
    ///
    /// # Panics
    /// Panics if capacities differ.
    pub fn union_with(&mut self, other: &BitVector) {
        assert_eq!(
            self.capacity(),
            other.capacity(),
            "Cannot union bit arrays with different capacities"
        );

        let self_raw = self.bits.as_raw_mut_slice();
        let other_raw = other.bits.as_raw_slice();
        for (s, o) in self_raw.iter_mut().zip(other_raw.iter()) {
            *s |= *o;
        }
    }
}
