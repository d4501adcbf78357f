//! 128-bit MurmurHash3 used by both hashing strategies
//!
//! Guava hashes keys with `Hashing.murmur3_128()` (x64 variant, seed 0) and reads the
//! result as two little-endian 64-bit words. The `murmur3` crate packs the same
//! words into a `u128` with the first word in the low half.

use std::io::Cursor;

/// Seed Guava uses for `murmur3_128()`
const SEED: u32 = 0;

/// The two 64-bit halves of a 128-bit MurmurHash3 digest
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hash128 {
    /// First 64-bit word (Guava's `asLong()`)
    pub h1: u64,
    /// Second 64-bit word
    pub h2: u64,
}

/// Hash a byte sequence with MurmurHash3 x64_128, seed 0
pub fn murmur3_128(bytes: &[u8]) -> Hash128 {
    let mut cursor = Cursor::new(bytes);
    // Reading from an in-memory cursor cannot fail.
    let hash = murmur3::murmur3_x64_128(&mut cursor, SEED).unwrap_or(0);
    Hash128 {
        h1: hash as u64,
        h2: (hash >> 64) as u64,
    }
}
