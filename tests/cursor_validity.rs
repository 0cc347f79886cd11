// ==============================================
// POSITION AND CURSOR STABILITY (integration)
// ==============================================
//
// Positions are handles into the entry store and the order queue. They must
// keep naming their entry while unrelated keys come and go, including
// across index growth.

use lrukit::cache::{CacheCursor, OrderedPosition, UnorderedPosition};
use lrukit::policy::lfu::LfuCache;
use lrukit::policy::lru::LruCache;

#[test]
fn unordered_position_survives_growth() {
    let mut cache = LruCache::new(10_000);
    let pos = cache.insert(0u32, "zero".to_string()).position();
    for i in 1..5_000 {
        cache.insert(i, i.to_string());
    }
    for i in (1..5_000).step_by(3) {
        cache.erase(&i);
    }

    let cursor = cache.cursor_at(pos);
    assert_eq!(cursor.key(), Some(&0));
    assert_eq!(cursor.value().map(String::as_str), Some("zero"));
}

#[test]
fn ordered_position_survives_promotions() {
    let mut cache = LruCache::new(8);
    for i in 0..8u32 {
        cache.insert(i, i);
    }
    let pos = cache.find(&3).to_ordered().position();
    for i in [0, 5, 7, 1] {
        cache.insert(i, i * 10);
    }
    cache.erase(&6);

    let cursor = cache.ordered_cursor_at(pos);
    assert_eq!(cursor.entry(), Some((&3, &3)));
}

#[test]
fn ordered_and_unordered_views_agree() {
    let mut cache = LfuCache::new(6);
    for i in 0..6u32 {
        cache.insert(i, i);
        if i % 2 == 0 {
            cache.insert(i, i + 100);
        }
    }

    let mut cursor = cache.ordered_begin();
    let mut walked = 0;
    while !cursor.is_end() {
        let unordered = cursor.to_unordered();
        assert_eq!(unordered.entry(), cursor.entry());
        assert_eq!(unordered.to_ordered(), cursor);
        cursor.move_next();
        walked += 1;
    }
    assert_eq!(walked, cache.len());
}

#[test]
fn end_positions_round_trip() {
    let cache: LruCache<u8, u8> = LruCache::new(2);
    assert!(cache.begin().is_end());
    assert_eq!(cache.begin(), cache.end());
    assert_eq!(cache.ordered_begin(), cache.ordered_end());
    assert_eq!(cache.end().to_ordered().position(), OrderedPosition::END);
    assert_eq!(cache.ordered_end().to_unordered().position(), UnorderedPosition::END);
    assert_eq!(cache.find(&1), cache.end());
}

#[test]
fn removed_entry_position_no_longer_resolves_to_it() {
    let mut cache = LruCache::new(4);
    let pos = cache.insert("gone", 1).position();
    cache.insert("kept", 2);
    cache.erase(&"gone");

    let cursor = cache.cursor_at(pos);
    assert_ne!(cursor.key(), Some(&"gone"));
    assert!(!cache.erase_unordered(pos));
}

#[test]
fn removing_through_cursor_keeps_other_positions() {
    let mut cache = LruCache::new(5);
    let positions: Vec<_> = (0..5u32).map(|i| cache.insert(i, i).position()).collect();

    {
        let mut cursor = cache.ordered_begin_mut();
        cursor.move_next();
        assert_eq!(cursor.remove_current(), Some((1, 1)));
        assert_eq!(cursor.key(), Some(&2));
    }

    for (i, pos) in positions.iter().enumerate() {
        if i == 1 {
            continue;
        }
        assert_eq!(cache.cursor_at(*pos).key(), Some(&(i as u32)));
    }
    assert!(cache.check_invariants().is_ok());
}

#[test]
fn mutable_cursor_edits_survive_conversion() {
    let mut cache = LruCache::new(3);
    cache.insert('a', 1);
    cache.insert('b', 2);

    let mut cursor = cache.find_mut(&'a');
    if let Some(v) = cursor.value_mut() {
        *v = 11;
    }
    let mut ordered = cursor.into_ordered();
    ordered.move_next();
    if let Some(v) = ordered.value_mut() {
        *v = 22;
    }
    let unordered = ordered.into_unordered();
    assert_eq!(unordered.entry(), Some((&'b', &22)));

    assert_eq!(cache.lookup(&'a'), Ok(&11));
    let order: Vec<_> = cache.ordered_iter().map(|(k, _)| *k).collect();
    assert_eq!(order, vec!['a', 'b']);
}
