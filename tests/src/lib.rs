//! # Guava Bloom Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── fixtures/          # Filters serialized in Guava's format
//! ├── benches/           # Criterion benchmarks
//! └── src/integration/
//!     ├── guava_compat.rs  # Reading Guava-format dumps
//!     ├── round_trip.rs    # Serialize / deserialize / garbage input
//!     └── properties.rs    # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p guava-bloom-tests
//!
//! # With filter logging
//! RUST_LOG=guava_bloom=debug cargo test -p guava-bloom-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p guava-bloom-tests
//! ```


use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`, once per test binary
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
