//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - The bit array capacity is a multiple of 64 and never changes.
//! - 1 <= number of hash functions <= 255.
//! - No false negatives: once `put(key)` returns, `might_contain(key)` is true.
//!
//! The filter is not synchronized. Share it across threads behind a lock.

use std::io::{Read, Write};

use tracing::{debug, warn};

use crate::error::FilterError;

use super::bit_vector::BitVector;
use super::config::FilterConfig;
use super::key::Key;
use super::parameters::calculate_parameters;
use super::serialization;
use super::strategy::{HashStrategy, Strategy};

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// Filters with the default strategy serialize to the same bytes as Guava's
/// `BloomFilter<Integer/Long/CharSequence/byte[]>` built with the same parameters
/// and contents, and either side can read the other's output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Number of hash functions (k)
    num_hash_functions: u8,
    /// Bit array storing the filter state
    bits: BitVector,
    /// Strategy mapping keys to bit positions
    strategy: Strategy,
}

impl BloomFilter {
    /// Create a filter with the default `MURMUR128_MITZ_64` strategy
    ///
    /// # Arguments
    /// * `expected_insertions` - Expected number of elements (n); 0 is treated as 1
    /// * `error_rate` - Target false positive rate, strictly between 0 and 1
    pub fn new(expected_insertions: i64, error_rate: f64) -> Result<Self, FilterError> {
        Self::with_strategy(expected_insertions, error_rate, Strategy::default())
    }

    /// Create a filter with an explicit strategy
    pub fn with_strategy(
        expected_insertions: i64,
        error_rate: f64,
        strategy: Strategy,
    ) -> Result<Self, FilterError> {
        let params = calculate_parameters(expected_insertions, error_rate)?;
        let bits = BitVector::new(params.num_bits);

        debug!(
            expected_insertions,
            error_rate,
            bit_size = bits.capacity(),
            num_hash_functions = params.num_hash_functions,
            strategy = strategy.name(),
            "Created bloom filter"
        );

        Ok(Self::from_parts(strategy, params.num_hash_functions, bits))
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_strategy(config.expected_insertions, config.error_rate, config.strategy)
    }

    pub(crate) fn from_parts(strategy: Strategy, num_hash_functions: u8, bits: BitVector) -> Self {
        Self {
            num_hash_functions,
            bits,
            strategy,
        }
    }

    /// Insert a key into the filter
    ///
    /// Returns `true` if any bit changed. A `false` result does not prove the key
    /// was inserted before: its bits may all have been set by other keys.
    ///
    /// Keys with an empty byte representation (`""`, `b""`) cannot be hashed the
    /// way Guava hashes them. They are rejected with a warning and `false`, and the
    /// filter is left untouched.
    pub fn put<'a>(&mut self, key: impl Into<Key<'a>>) -> bool {
        let key = key.into();
        let bytes = key.to_bytes();
        if bytes.is_empty() {
            warn!(key = ?key, "Key has no byte representation, ignoring put");
            return false;
        }
        self.strategy
            .put(&bytes, self.num_hash_functions, &mut self.bits)
    }

    /// Test if a key might be in the filter
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be false positive)
    /// - `false` if the key is definitely NOT in the set (never false negative)
    ///
    /// Keys with an empty byte representation always return `false`.
    pub fn might_contain<'a>(&self, key: impl Into<Key<'a>>) -> bool {
        let key = key.into();
        let bytes = key.to_bytes();
        if bytes.is_empty() {
            warn!(key = ?key, "Key has no byte representation, ignoring lookup");
            return false;
        }
        self.strategy
            .might_contain(&bytes, self.num_hash_functions, &self.bits)
    }

    /// Whether `other` has the same strategy, hash count and bit size
    pub fn is_compatible(&self, other: &BloomFilter) -> bool {
        self.strategy == other.strategy
            && self.num_hash_functions == other.num_hash_functions
            && self.bits.capacity() == other.bits.capacity()
    }

    /// Merge another filter into this one (OR operation)
    ///
    /// After merge, this filter will match all keys from both filters.
    pub fn put_all(&mut self, other: &BloomFilter) -> Result<(), FilterError> {
        if !self.is_compatible(other) {
            return Err(FilterError::Incompatible {
                reason: format!(
                    "{}/k={}/m={} vs {}/k={}/m={}",
                    self.strategy.name(),
                    self.num_hash_functions,
                    self.bits.capacity(),
                    other.strategy.name(),
                    other.num_hash_functions,
                    other.bits.capacity()
                ),
            });
        }
        self.bits.union_with(&other.bits);
        Ok(())
    }

    /// Probability that `might_contain` returns `true` for a key never inserted,
    /// given the bits currently set
    pub fn expected_fpp(&self) -> f64 {
        (self.bit_count() as f64 / self.bit_size() as f64).powi(self.num_hash_functions as i32)
    }

    /// Estimate of the number of distinct keys inserted
    ///
    /// Formula: n ≈ -m/k * ln(1 - X/m), where X is the number of set bits.
    ///
    /// A saturated filter (every bit set) carries no count information; the
    /// estimate is then `bit_size()`.
    pub fn approximate_element_count(&self) -> u64 {
        let bit_count = self.bit_count();
        if bit_count == self.bit_size() {
            return self.bit_size();
        }
        let bit_size = self.bit_size() as f64;
        let fraction_of_bits_set = bit_count as f64 / bit_size;
        let estimate =
            -(-fraction_of_bits_set).ln_1p() * bit_size / self.num_hash_functions as f64;
        // Half-up rounding
        (estimate + 0.5).floor() as u64
    }

    /// Filter size in bits (always a multiple of 64)
    pub fn bit_size(&self) -> u64 {
        self.bits.capacity()
    }

    /// Number of set bits
    pub fn bit_count(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Number of hash functions
    pub fn num_hash_functions(&self) -> u8 {
        self.num_hash_functions
    }

    /// Strategy bound at construction
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Underlying bit array
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Serialize the filter to bytes in Guava's format
    pub fn to_bytes(&self) -> Vec<u8> {
        serialization::encode(self)
    }

    /// Deserialize a filter from bytes in Guava's format
    ///
    /// The slice must hold exactly one filter.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        Ok(serialization::decode(bytes)?)
    }

    /// Write the filter to a stream in Guava's format
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), FilterError> {
        Ok(serialization::write_filter(self, writer)?)
    }

    /// Read one filter from a stream, leaving any following bytes unread
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, FilterError> {
        Ok(serialization::read_filter(reader)?)
    }

    /// Size of [`to_bytes`](Self::to_bytes) output
    pub fn serialized_size(&self) -> usize {
        serialization::serialized_size(self)
    }
}
