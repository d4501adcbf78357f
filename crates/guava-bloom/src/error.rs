//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur when building, combining or reading a Bloom filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid error rate: {rate} (must be > 0.0 and < 1.0)")]
    InvalidErrorRate { rate: f64 },

    #[error("Invalid expected insertions: {count} (must be >= 0)")]
    InvalidExpectedInsertions { count: i64 },

    #[error("Too many hash functions: {count} > 255")]
    TooManyHashFunctions { count: u64 },

    #[error("Filter size exceeds maximum: {bits} bits")]
    FilterTooLarge { bits: u64 },

    #[error("Incompatible filters: {reason}")]
    Incompatible { reason: String },

    #[error("Deserialization error: {0}")]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding the serialized form
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Truncated input: failed to read {field}")]
    Truncated { field: &'static str },

    #[error("Unknown strategy ordinal: {ordinal}")]
    UnknownStrategy { ordinal: u8 },

    #[error("Number of hash functions must be > 0")]
    ZeroHashFunctions,

    #[error("Bit array has no blocks")]
    EmptyBitArray,

    #[error("Trailing bytes after bit array: {remaining}")]
    TrailingBytes { remaining: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilterError {
    /// Whether this error rejects caller-supplied construction parameters
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidErrorRate { .. }
                | FilterError::InvalidExpectedInsertions { .. }
                | FilterError::TooManyHashFunctions { .. }
                | FilterError::FilterTooLarge { .. }
        )
    }
}
