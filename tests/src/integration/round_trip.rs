//! # Round Trips and Malformed Input
//!
//! Serialized filters must read back byte-identical and answer identically.
//! Short or unrelated input must be rejected with an error, never a panic or a
//! silently wrong filter.

#[cfg(test)]
mod tests {
    use guava_bloom::{BloomFilter, DecodeError, FilterError, Strategy};
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use crate::init_test_logging;

    #[test]
    fn test_round_trip_both_strategies() {
        init_test_logging();
        for strategy in [Strategy::Murmur128Mitz32, Strategy::Murmur128Mitz64] {
            let mut filter =
                BloomFilter::with_strategy(1000, 0.02, strategy).expect("valid parameters");
            for i in 0..1000i64 {
                filter.put(i);
            }

            let bytes = filter.to_bytes();
            let restored = BloomFilter::from_bytes(&bytes).expect("round trip");

            assert_eq!(restored.to_bytes(), bytes);
            assert_eq!(restored.strategy(), strategy);
            for i in 0..1000i64 {
                assert!(restored.might_contain(i), "{strategy:?}: lost key {i}");
            }
        }
    }

    #[test]
    fn test_round_trip_preserves_answers_for_random_keys() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut filter = BloomFilter::new(2000, 0.01).expect("valid parameters");
        let inserted: Vec<u64> = (0..2000).map(|_| rng.gen()).collect();
        for key in &inserted {
            filter.put(*key);
        }

        let restored = BloomFilter::from_bytes(&filter.to_bytes()).expect("round trip");

        for key in &inserted {
            assert!(restored.might_contain(*key));
        }
        for _ in 0..10_000 {
            let probe: u64 = rng.gen();
            assert_eq!(restored.might_contain(probe), filter.might_contain(probe));
        }
    }

    #[test]
    fn test_garbage_byte_arrays_rejected() {
        init_test_logging();
        let garbage: [&[u8]; 6] = [
            b"this-is-a-line-of-garbage",
            &[],
            &[0],
            &[0, 1],
            &[0, 1, 2],
            &[0, 1, 2, 3, 4, 5],
        ];

        for bytes in garbage {
            let result = BloomFilter::from_bytes(bytes);
            assert!(
                matches!(result, Err(FilterError::Decode(_))),
                "Expected error on garbage byte array: {bytes:?}"
            );
        }
    }

    #[test]
    fn test_unrelated_text_fails_on_strategy() {
        let result = BloomFilter::from_bytes(b"this-is-a-line-of-garbage");
        assert!(matches!(
            result,
            Err(FilterError::Decode(DecodeError::UnknownStrategy { ordinal: b't' }))
        ));
    }

    #[test]
    fn test_every_truncation_of_valid_filter_rejected() {
        let mut filter = BloomFilter::new(100, 0.01).expect("valid parameters");
        filter.put("truncate me");
        let bytes = filter.to_bytes();

        for len in 0..bytes.len() {
            assert!(
                BloomFilter::from_bytes(&bytes[..len]).is_err(),
                "Prefix of length {len} should not decode"
            );
        }
    }

    #[test]
    fn test_stream_reads_consecutive_filters() {
        let mut first = BloomFilter::new(10, 0.1).expect("valid parameters");
        let mut second = BloomFilter::with_strategy(20, 0.05, Strategy::Murmur128Mitz32)
            .expect("valid parameters");
        first.put("first");
        second.put("second");

        let mut buffer = Vec::new();
        first.write_to(&mut buffer).expect("write");
        second.write_to(&mut buffer).expect("write");

        let mut reader = buffer.as_slice();
        let read_first = BloomFilter::read_from(&mut reader).expect("first filter");
        let read_second = BloomFilter::read_from(&mut reader).expect("second filter");

        assert_eq!(read_first, first);
        assert_eq!(read_second, second);
        assert!(reader.is_empty());
    }
}
