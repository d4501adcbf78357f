//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use guava_bloom::{BloomFilter, FilterConfigBuilder, Strategy};
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_insertions(10_000)
//!     .error_rate(0.001)
//!     .strategy(Strategy::Murmur128Mitz64)
//!     .build()
//!     .expect("Valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("Valid filter");
//! assert_eq!(filter.num_hash_functions(), 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

use super::parameters::{calculate_parameters, BloomFilterParams};
use super::strategy::Strategy;

/// Parameters a filter is built from
///
/// Deserializable, so it can sit inside an application's config file:
///
/// ```toml
/// expected_insertions = 1000000
/// error_rate = 0.01
/// strategy = "murmur128_mitz_64"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Expected number of insertions (0 is treated as 1)
    pub expected_insertions: i64,
    /// Target false positive rate, strictly between 0 and 1
    pub error_rate: f64,
    /// Hashing strategy
    pub strategy: Strategy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_insertions: 1000,
            error_rate: 0.03, // Guava's default fpp
            strategy: Strategy::Murmur128Mitz64,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(
        expected_insertions: i64,
        error_rate: f64,
        strategy: Strategy,
    ) -> Result<Self, FilterError> {
        let config = Self {
            expected_insertions,
            error_rate,
            strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate with the same checks filter construction applies
    pub fn validate(&self) -> Result<(), FilterError> {
        self.parameters().map(|_| ())
    }

    /// Sizing this configuration produces
    pub fn parameters(&self) -> Result<BloomFilterParams, FilterError> {
        calculate_parameters(self.expected_insertions, self.error_rate)
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_insertions: Option<i64>,
    error_rate: Option<f64>,
    strategy: Option<Strategy>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of insertions
    pub fn expected_insertions(mut self, count: i64) -> Self {
        self.expected_insertions = Some(count);
        self
    }

    /// Set target false positive rate
    pub fn error_rate(mut self, rate: f64) -> Self {
        self.error_rate = Some(rate);
        self
    }

    /// Set hashing strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        FilterConfig::new(
            self.expected_insertions.unwrap_or(defaults.expected_insertions),
            self.error_rate.unwrap_or(defaults.error_rate),
            self.strategy.unwrap_or(defaults.strategy),
        )
    }
}
