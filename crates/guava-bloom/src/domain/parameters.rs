//! Bloom filter sizing
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- bits, truncated toward zero
//! - k = round((m/n) * ln(2))  -- hash functions, at least 1
//!
//! Both must agree with Guava's `optimalNumOfBits` / `optimalNumOfHashFunctions`
//! for every input, otherwise filters built on either side would not share a
//! layout. `f64::ln` and `f64::round` (half away from zero) give the same results
//! as the JVM for these inputs.

use std::f64::consts::LN_2;

use crate::error::FilterError;

use super::bit_vector::BLOCK_BITS;

/// Largest hash-function count the one-byte wire field can carry
pub const MAX_HASH_FUNCTIONS: u64 = u8::MAX as u64;

/// Smallest positive double, substituted for an error rate of exactly zero
const MIN_POSITIVE_SUBNORMAL: f64 = 4.9e-324;

/// Sizing derived from a target capacity and false positive rate
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Bits requested by the sizing formula, before rounding to whole blocks
    pub num_bits: u64,
    /// Number of hash functions
    pub num_hash_functions: u8,
}

impl BloomFilterParams {
    /// Bit array capacity after rounding up to a multiple of 64
    pub fn capacity_bits(&self) -> u64 {
        self.num_bits.div_ceil(BLOCK_BITS) * BLOCK_BITS
    }
}

/// Validate inputs and compute filter sizing
///
/// An `expected_insertions` of zero is treated as one.
pub fn calculate_parameters(
    expected_insertions: i64,
    error_rate: f64,
) -> Result<BloomFilterParams, FilterError> {
    validate_error_rate(error_rate)?;
    if expected_insertions < 0 {
        return Err(FilterError::InvalidExpectedInsertions {
            count: expected_insertions,
        });
    }

    let n = expected_insertions.max(1) as u64;
    let num_bits = optimal_num_of_bits(n, error_rate);
    let num_hash_functions = optimal_num_of_hash_functions(n, num_bits);

    if num_hash_functions > MAX_HASH_FUNCTIONS {
        return Err(FilterError::TooManyHashFunctions {
            count: num_hash_functions,
        });
    }
    if num_bits.div_ceil(BLOCK_BITS) > u32::MAX as u64 {
        return Err(FilterError::FilterTooLarge { bits: num_bits });
    }

    Ok(BloomFilterParams {
        num_bits,
        num_hash_functions: num_hash_functions as u8,
    })
}

/// Reject error rates outside the open interval (0, 1), including NaN
pub fn validate_error_rate(error_rate: f64) -> Result<(), FilterError> {
    if error_rate > 0.0 && error_rate < 1.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidErrorRate { rate: error_rate })
    }
}

/// Number of bits needed for `expected_insertions` at `error_rate`
///
/// A rate of exactly 0.0 is replaced by the smallest positive double. Callers
/// outside this module go through [`calculate_parameters`], which rejects it.
pub(crate) fn optimal_num_of_bits(expected_insertions: u64, error_rate: f64) -> u64 {
    let error_rate = if error_rate == 0.0 {
        MIN_POSITIVE_SUBNORMAL
    } else {
        error_rate
    };
    (-(expected_insertions as f64) * error_rate.ln() / (LN_2 * LN_2)) as u64
}

/// Number of hash functions minimising the false positive rate for `num_bits`
pub(crate) fn optimal_num_of_hash_functions(expected_insertions: u64, num_bits: u64) -> u64 {
    let k = (num_bits as f64 / expected_insertions as f64 * LN_2).round() as u64;
    k.max(1)
}

/// False positive probability after `n` insertions into `m` bits with `k` hashes
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: u64, n: u64, k: u8) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
