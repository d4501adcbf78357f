//! # Guava Bloom
//!
//! A Bloom filter whose hashing and serialized form are compatible with Guava's
//! `com.google.common.hash.BloomFilter`, so filters can be built on one side and
//! queried on the other.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `Strategy`: `MURMUR128_MITZ_32` / `MURMUR128_MITZ_64` bit-position algorithms
//!   - `parameters`: Sizing from expected insertions and error rate
//!   - `serialization`: Guava's `writeTo` / `readFrom` byte layout
//!   - `FilterConfig`: Configuration with validation
//!
//! ## Invariants
//!
//! - No false negatives - if inserted, `might_contain()` MUST return true
//! - Bit size is a multiple of 64 and fixed for the filter's lifetime
//! - Identical inputs produce identical sizing and bytes on both sides
//!
//! ## Usage Example
//!
//! ```
//! use guava_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(500, 0.01)?;
//! filter.put(42i32);
//! filter.put("0xABCD");
//!
//! assert!(filter.might_contain(42i32));
//!
//! let bytes = filter.to_bytes();
//! let restored = BloomFilter::from_bytes(&bytes)?;
//! assert!(restored.might_contain("0xABCD"));
//! # Ok::<(), guava_bloom::FilterError>(())
//! ```
//!
//! ## Concurrency
//!
//! A filter is a plain owned value with no internal locking. Wrap it in a
//! `Mutex`/`RwLock` to share it between threads.

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    BitVector, BloomFilter, FilterConfig, FilterConfigBuilder, HashStrategy, Key, Strategy,
};
pub use error::{DecodeError, FilterError};
