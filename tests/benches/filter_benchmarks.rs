//! # Bloom Filter Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | put (either strategy) | < 1µs per key |
//! | might_contain | < 1µs per key |
//! | from_bytes, 1M insertions at 1% | < 10ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use guava_bloom::{BloomFilter, Strategy};
use rand::Rng;
use std::time::Duration;

const STRATEGIES: [Strategy; 2] = [Strategy::Murmur128Mitz32, Strategy::Murmur128Mitz64];

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-put");
    let keys = random_keys(10_000);
    group.throughput(Throughput::Elements(keys.len() as u64));

    for strategy in STRATEGIES {
        group.bench_with_input(
            BenchmarkId::new("u64_keys", strategy.name()),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    let mut filter = BloomFilter::with_strategy(10_000, 0.01, strategy)
                        .expect("valid parameters");
                    for key in &keys {
                        filter.put(*key);
                    }
                    black_box(filter)
                })
            },
        );
    }

    let words: Vec<String> = (0..10_000).map(|i| format!("word-{i}")).collect();
    group.bench_function("string_keys", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(10_000, 0.01).expect("valid parameters");
            for word in &words {
                filter.put(word);
            }
            black_box(filter)
        })
    });

    group.finish();
}

fn bench_might_contain(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-might-contain");

    for error_rate in [0.1, 0.01, 0.0001] {
        let keys = random_keys(10_000);
        let mut filter = BloomFilter::new(10_000, error_rate).expect("valid parameters");
        for key in &keys {
            filter.put(*key);
        }
        let probes = random_keys(10_000);

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("hits", error_rate),
            &keys,
            |b, keys| b.iter(|| keys.iter().filter(|k| filter.might_contain(**k)).count()),
        );
        group.bench_with_input(
            BenchmarkId::new("misses", error_rate),
            &probes,
            |b, probes| b.iter(|| probes.iter().filter(|k| filter.might_contain(**k)).count()),
        );
    }

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-serialization");
    group.measurement_time(Duration::from_secs(10));

    let mut filter = BloomFilter::new(1_000_000, 0.01).expect("valid parameters");
    for key in random_keys(100_000) {
        filter.put(key);
    }
    let bytes = filter.to_bytes();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("to_bytes", |b| b.iter(|| black_box(filter.to_bytes())));
    group.bench_function("from_bytes", |b| {
        b.iter(|| BloomFilter::from_bytes(black_box(&bytes)).expect("valid bytes"))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_might_contain,
    bench_serialization
);
criterion_main!(benches);
