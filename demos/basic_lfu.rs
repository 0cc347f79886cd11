use lrukit::policy::lfu::LfuCache;

fn main() {
    let mut cache: LfuCache<&str, u32> = LfuCache::new(2);

    cache.insert("hot", 1);
    cache.insert("hot", 2);
    cache.insert("hot", 3);
    cache.insert("cold", 1);

    println!("writes to hot: {:?}", cache.write_count(&"hot"));

    cache.insert("new", 1);

    println!("contains hot? {}", cache.contains(&"hot"));
    println!("contains cold? {}", cache.contains(&"cold"));
}

// Expected output:
// writes to hot: Some(3)
// contains hot? true
// contains cold? false
//
// Explanation: "hot" has been written three times, "cold" once. The entry
// with the fewest writes sits at the front of the order and is evicted.
