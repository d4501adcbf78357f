//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Bit array storage
//! - MurmurHash3 digest and the two Guava hashing strategies
//! - Key-to-bytes conversion
//! - Parameter calculations
//! - The Bloom filter and its wire format
//! - Configuration
//!
//! RULES:
//! - No I/O beyond the `Read`/`Write` streams callers hand in
//! - No async code
//! - No locking; callers synchronize shared filters

pub mod bit_vector;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod key;
pub mod parameters;
pub mod serialization;
pub mod strategy;

pub use bit_vector::BitVector;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{murmur3_128, Hash128};
pub use key::Key;
pub use parameters::{calculate_fpr, calculate_parameters, BloomFilterParams};
pub use strategy::{HashStrategy, Murmur128Mitz32, Murmur128Mitz64, Strategy, STRATEGIES};
