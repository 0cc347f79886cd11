use std::rc::Rc;

use lrukit::builder::CacheBuilder;
use lrukit::metrics::Statistics;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stats = Rc::new(Statistics::with_keys(["b"]));
    let mut cache = CacheBuilder::new()
        .capacity(3)
        .entries([("a", 1), ("b", 2)])
        .monitor(Rc::clone(&stats))
        .build();

    let _ = cache.lookup(&"a");
    let _ = cache.lookup(&"b");
    let _ = cache.lookup(&"zzz");
    cache.shrink(1);

    println!("len: {}", cache.len());
    println!("hits: {} misses: {}", stats.total_hits(), stats.total_misses());
    println!("hits for b: {:?}", stats.hits_for(&"b"));
}

// Expected output:
// len: 1
// hits: 2 misses: 1
// hits for b: Some(1)
//
// Run with RUST_LOG=lrukit=debug to see the shrink event.
