use lrukit::cache::CacheCursor;
use lrukit::policy::lru::LruCache;

fn main() {
    let mut cache = LruCache::new(4);
    for (i, key) in ["w", "x", "y", "z"].into_iter().enumerate() {
        cache.insert(key, i);
    }
    cache.insert("w", 10);

    // Eviction order, oldest write first
    let mut cursor = cache.ordered_begin();
    while let Some((k, v)) = cursor.entry() {
        println!("{k} = {v}");
        cursor.move_next();
    }

    // Positions stay valid while other entries change
    let pos = cache.find(&"y").position();
    cache.erase(&"x");
    println!("still at y: {:?}", cache.cursor_at(pos).key());

    // Drop every entry whose value is odd
    let mut cursor = cache.ordered_begin_mut();
    while !cursor.is_end() {
        if cursor.value().is_some_and(|v| v % 2 == 1) {
            cursor.remove_current();
        } else {
            cursor.move_next();
        }
    }
    let mut left: Vec<_> = cache.keys().copied().collect();
    left.sort_unstable();
    println!("left: {left:?}");
}

// Expected output:
// x = 1
// y = 2
// z = 3
// w = 10
// still at y: Some("y")
// left: ["w", "y"]
