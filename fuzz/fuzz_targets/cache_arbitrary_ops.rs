#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::cache::CacheCursor;
use lrukit::policy::lfu::LfuCache;
use lrukit::policy::lru::LruCache;

// Drives the same byte stream through an LRU and an LFU cache and checks the
// structural invariants after every step.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 32);
    let mut lru: LruCache<u8, u8> = LruCache::new(capacity);
    let mut lfu: LfuCache<u8, u8> = LfuCache::new(capacity);

    for pair in rest.chunks_exact(2) {
        let key = pair[1];

        match pair[0] % 8 {
            0 | 1 => {
                lru.insert(key, key);
                lfu.insert(key, key);
            }
            2 => {
                let _ = lru.lookup(&key);
                let _ = lfu.lookup(&key);
            }
            3 => {
                let present = lru.contains(&key);
                assert_eq!(lru.erase(&key), present);
                assert!(!lru.contains(&key));
                lfu.erase(&key);
            }
            4 => {
                let pos = lru.ordered_begin().position();
                lru.erase_ordered(pos);
                let pos = lfu.begin().position();
                lfu.erase_unordered(pos);
            }
            5 => {
                lru.shrink(usize::from(key % 16));
                lfu.shrink(usize::from(key % 16));
            }
            6 => {
                lru.set_capacity(usize::from(key % 32));
                lfu.set_capacity(usize::from(key % 32));
            }
            7 => {
                let mut cursor = lru.ordered_begin_mut();
                for _ in 0..key % 4 {
                    cursor.move_next();
                }
                cursor.remove_current();
            }
            _ => unreachable!(),
        }

        assert!(lru.len() <= lru.capacity());
        assert!(lfu.len() <= lfu.capacity());
        assert!(lru.check_invariants().is_ok());
        assert!(lfu.check_invariants().is_ok());
        assert_eq!(lru.ordered_iter().count(), lru.len());
        assert_eq!(lfu.iter().count(), lfu.len());
    }
});
