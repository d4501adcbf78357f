//! # Property Tests
//!
//! Invariants checked over generated inputs:
//!
//! - No false negatives for any key set, either strategy
//! - Serialize → deserialize → serialize is the identity
//! - Arbitrary bytes never panic the decoder

#[cfg(test)]
mod tests {
    use guava_bloom::{BloomFilter, Strategy as HashingStrategy};
    use proptest::prelude::*;

    fn hashing_strategy() -> impl Strategy<Value = HashingStrategy> {
        prop_oneof![
            Just(HashingStrategy::Murmur128Mitz32),
            Just(HashingStrategy::Murmur128Mitz64)
        ]
    }

    proptest! {
        #[test]
        fn prop_no_false_negatives(
            strategy in hashing_strategy(),
            keys in proptest::collection::vec(any::<Vec<u8>>(), 1..200),
            error_rate in 0.0001f64..0.5,
        ) {
            let mut filter = BloomFilter::with_strategy(keys.len() as i64, error_rate, strategy)
                .expect("valid parameters");
            for key in &keys {
                filter.put(key);
            }
            for key in keys.iter().filter(|k| !k.is_empty()) {
                prop_assert!(filter.might_contain(key));
            }
        }

        #[test]
        fn prop_serialization_is_stable(
            strategy in hashing_strategy(),
            expected in 0i64..5000,
            keys in proptest::collection::vec(any::<i64>(), 0..300),
        ) {
            let mut filter = BloomFilter::with_strategy(expected, 0.01, strategy)
                .expect("valid parameters");
            for key in &keys {
                filter.put(*key);
            }

            let bytes = filter.to_bytes();
            let restored = BloomFilter::from_bytes(&bytes).expect("round trip");
            prop_assert_eq!(restored.to_bytes(), bytes);
            for key in &keys {
                prop_assert!(restored.might_contain(*key));
            }
        }

        #[test]
        fn prop_decoder_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = BloomFilter::from_bytes(&bytes);
        }

        #[test]
        fn prop_text_keys_match_their_bytes(text in "\\PC{1,40}") {
            let mut filter = BloomFilter::new(10, 0.01).expect("valid parameters");
            filter.put(text.as_str());
            prop_assert!(filter.might_contain(text.as_bytes()));
        }
    }
}
