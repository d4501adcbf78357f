//! Hashing strategies mapping a key to bit positions
//!
//! Both strategies derive `k` positions from one 128-bit MurmurHash3 digest using
//! double hashing, `g(i) = h1 + i * h2` for `i` in `0..k`, with the overflow
//! behaviour of Guava's `BloomFilterStrategies`:
//!
//! - `MURMUR128_MITZ_32` (ordinal 0): 32-bit wrapping arithmetic on the low two
//!   32-bit words of the digest; negative sums are bit-complemented. Guava's own
//!   loop starts at `i = 1`, so only the wire format (not the bit positions) of
//!   ordinal 0 is shared with Guava.
//! - `MURMUR128_MITZ_64` (ordinal 1): 64-bit wrapping arithmetic on both 64-bit
//!   halves; the sign bit is masked off.
//!
//! The ordinal is persisted in the serialized form, so the order of
//! [`STRATEGIES`] is part of the wire format.

use serde::{Deserialize, Serialize};

use super::bit_vector::BitVector;
use super::hash_functions::{murmur3_128, Hash128};

/// A hashing strategy: turns a key digest into `k` bit positions
pub trait HashStrategy {
    /// Iterator over the bit positions of one key
    type Positions: Iterator<Item = u64>;

    /// Tag identifying this strategy in the serialized form
    fn ordinal(&self) -> u8;

    /// Bit positions for a digest, each in `[0, bit_size)`
    fn positions(&self, hash: Hash128, num_hash_functions: u8, bit_size: u64)
        -> Self::Positions;

    /// Set the key's bits. Returns `true` if any bit changed.
    fn put(&self, key: &[u8], num_hash_functions: u8, bits: &mut BitVector) -> bool {
        let bit_size = bits.capacity();
        let mut bits_changed = false;
        for index in self.positions(murmur3_128(key), num_hash_functions, bit_size) {
            bits_changed |= bits.set(index);
        }
        bits_changed
    }

    /// Test the key's bits, stopping at the first unset one
    fn might_contain(&self, key: &[u8], num_hash_functions: u8, bits: &BitVector) -> bool {
        let bit_size = bits.capacity();
        self.positions(murmur3_128(key), num_hash_functions, bit_size)
            .all(|index| bits.get(index))
    }
}

/// Guava's `MURMUR128_MITZ_32`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur128Mitz32;

/// Positions produced by [`Murmur128Mitz32`]
#[derive(Clone, Debug)]
pub struct Mitz32Positions {
    hash1: i32,
    hash2: i32,
    i: i32,
    remaining: u8,
    bit_size: u64,
}

impl Iterator for Mitz32Positions {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let mut combined = self.hash1.wrapping_add(self.i.wrapping_mul(self.hash2));
        if combined < 0 {
            combined = !combined;
        }
        self.i += 1;
        self.remaining -= 1;
        Some(combined as u64 % self.bit_size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl HashStrategy for Murmur128Mitz32 {
    type Positions = Mitz32Positions;

    fn ordinal(&self) -> u8 {
        0
    }

    fn positions(
        &self,
        hash: Hash128,
        num_hash_functions: u8,
        bit_size: u64,
    ) -> Mitz32Positions {
        Mitz32Positions {
            hash1: hash.h1 as i32,
            hash2: (hash.h1 >> 32) as i32,
            i: 0,
            remaining: num_hash_functions,
            bit_size,
        }
    }
}

/// Guava's `MURMUR128_MITZ_64`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur128Mitz64;

/// Positions produced by [`Murmur128Mitz64`]
#[derive(Clone, Debug)]
pub struct Mitz64Positions {
    combined: u64,
    step: u64,
    remaining: u8,
    bit_size: u64,
}

impl Iterator for Mitz64Positions {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let index = (self.combined & i64::MAX as u64) % self.bit_size;
        self.combined = self.combined.wrapping_add(self.step);
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl HashStrategy for Murmur128Mitz64 {
    type Positions = Mitz64Positions;

    fn ordinal(&self) -> u8 {
        1
    }

    fn positions(
        &self,
        hash: Hash128,
        num_hash_functions: u8,
        bit_size: u64,
    ) -> Mitz64Positions {
        Mitz64Positions {
            combined: hash.h1,
            step: hash.h2,
            remaining: num_hash_functions,
            bit_size,
        }
    }
}

/// The strategy bound to a filter, selected at construction and recorded by ordinal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "murmur128_mitz_32")]
    Murmur128Mitz32,
    #[default]
    #[serde(rename = "murmur128_mitz_64")]
    Murmur128Mitz64,
}

/// Strategies indexed by ordinal
pub const STRATEGIES: [Strategy; 2] = [Strategy::Murmur128Mitz32, Strategy::Murmur128Mitz64];

impl Strategy {
    /// Look up a strategy by its serialized ordinal
    pub fn from_ordinal(ordinal: u8) -> Option<Strategy> {
        STRATEGIES.get(ordinal as usize).copied()
    }

    /// Guava's enum constant name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Murmur128Mitz32 => "MURMUR128_MITZ_32",
            Strategy::Murmur128Mitz64 => "MURMUR128_MITZ_64",
        }
    }
}

/// Positions produced by a [`Strategy`]
#[derive(Clone, Debug)]
pub enum BitPositions {
    Mitz32(Mitz32Positions),
    Mitz64(Mitz64Positions),
}

impl Iterator for BitPositions {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            BitPositions::Mitz32(positions) => positions.next(),
            BitPositions::Mitz64(positions) => positions.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            BitPositions::Mitz32(positions) => positions.size_hint(),
            BitPositions::Mitz64(positions) => positions.size_hint(),
        }
    }
}

impl HashStrategy for Strategy {
    type Positions = BitPositions;

    fn ordinal(&self) -> u8 {
        match self {
            Strategy::Murmur128Mitz32 => Murmur128Mitz32.ordinal(),
            Strategy::Murmur128Mitz64 => Murmur128Mitz64.ordinal(),
        }
    }

    fn positions(
        &self,
        hash: Hash128,
        num_hash_functions: u8,
        bit_size: u64,
    ) -> BitPositions {
        match self {
            Strategy::Murmur128Mitz32 => {
                BitPositions::Mitz32(Murmur128Mitz32.positions(hash, num_hash_functions, bit_size))
            }
            Strategy::Murmur128Mitz64 => {
                BitPositions::Mitz64(Murmur128Mitz64.positions(hash, num_hash_functions, bit_size))
            }
        }
    }
}
