use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use lrukit::cache::CacheCursor;
use lrukit::metrics::Statistics;
use lrukit::policy::lfu::LfuCache;
use lrukit::policy::lru::LruCache;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 1024;

fn filled_lru(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity);
    for i in 0..capacity as u64 {
        cache.insert(i, i);
    }
    cache
}

fn filled_lfu(capacity: usize) -> LfuCache<u64, u64> {
    let mut cache = LfuCache::new(capacity);
    for i in 0..capacity as u64 {
        cache.insert(i, i);
    }
    cache
}

/// Skewed key stream: 80% of accesses land on the first 20% of a keyspace
/// twice the cache size.
fn hotset_keys(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let universe = (CAPACITY * 2) as u64;
    let hot = universe / 5;
    (0..len)
        .map(|_| {
            if rng.random_bool(0.8) {
                rng.random_range(0..hot)
            } else {
                rng.random_range(hot..universe)
            }
        })
        .collect()
}

fn bench_lru_insert_lookup(c: &mut Criterion) {
    c.bench_function("lru_insert_lookup", |b| {
        b.iter_batched(
            || filled_lru(CAPACITY),
            |mut cache| {
                for i in 0..CAPACITY as u64 {
                    cache.insert(black_box(i + 10_000), i);
                    let _ = black_box(cache.lookup(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || filled_lru(CAPACITY),
            |mut cache| {
                for i in 0..4 * CAPACITY as u64 {
                    cache.insert(black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_update_hotset(c: &mut Criterion) {
    let keys = hotset_keys(4096, 7);
    c.bench_function("lru_update_hotset", |b| {
        b.iter_batched(
            || filled_lru(CAPACITY),
            |mut cache| {
                for &k in &keys {
                    cache.insert(black_box(k), k);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lfu_update_hotset(c: &mut Criterion) {
    let keys = hotset_keys(4096, 11);
    c.bench_function("lfu_update_hotset", |b| {
        b.iter_batched(
            || filled_lfu(CAPACITY),
            |mut cache| {
                for &k in &keys {
                    cache.insert(black_box(k), k);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_ordered_walk(c: &mut Criterion) {
    let cache = filled_lru(CAPACITY);
    c.bench_function("lru_ordered_iter", |b| {
        b.iter(|| black_box(cache.ordered_iter().map(|(_, v)| *v).sum::<u64>()))
    });
    c.bench_function("lru_ordered_cursor", |b| {
        b.iter(|| {
            let mut cursor = cache.ordered_begin();
            let mut sum = 0u64;
            while let Some(v) = cursor.value() {
                sum += *v;
                cursor.move_next();
            }
            black_box(sum)
        })
    });
}

fn bench_monitored_lookup(c: &mut Criterion) {
    let keys = hotset_keys(4096, 13);
    c.bench_function("lru_monitored_lookup", |b| {
        b.iter_batched(
            || {
                let mut cache = filled_lru(CAPACITY);
                cache.monitor(Statistics::new());
                cache
            },
            |cache| {
                for k in &keys {
                    let _ = black_box(cache.lookup(k));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_insert_lookup,
    bench_lru_eviction_churn,
    bench_lru_update_hotset,
    bench_lfu_update_hotset,
    bench_ordered_walk,
    bench_monitored_lookup
);
criterion_main!(benches);
