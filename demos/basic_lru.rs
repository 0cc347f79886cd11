use lrukit::policy::lru::LruCache;

fn main() {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.insert(1, "alpha".to_string());
    cache.insert(2, "beta".to_string());

    if let Ok(value) = cache.lookup(&1) {
        println!("hit 1: {value}");
    }

    cache.insert(3, "gamma".to_string());

    println!("contains 1? {}", cache.contains(&1));
    println!("contains 2? {}", cache.contains(&2));
}

// Expected output:
// hit 1: alpha
// contains 1? false
// contains 2? true
//
// Explanation: capacity=2 and reads do not refresh recency. Key 1 is still
// the oldest write when key 3 arrives, so it is the one evicted.
