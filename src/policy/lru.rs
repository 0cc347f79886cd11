//! # Least Recently Used (LRU) Policy
//!
//! Orders entries by write recency. New keys join the back of the order
//! queue, rewritten keys move to the back, and the front is evicted.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                    LruCache<K, V, S, E>                          │
//!   │                  = Cache<K, V, Lru, S, E>                        │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  EntryStore: HashTable<SlotId> ──► SlotArena<Entry>        │ │
//!   │   │                                                            │ │
//!   │   │   slot 0: (page_7, v, hash, handle ─────────────┐)         │ │
//!   │   │   slot 1: (page_2, v, hash, handle ───────┐     │)         │ │
//!   │   │   slot 2: (page_9, v, hash, handle ─┐     │     │)         │ │
//!   │   └─────────────────────────────────────┼─────┼─────┼──────────┘ │
//!   │                                         ▼     ▼     ▼            │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  OrderQueue<()>                                            │ │
//!   │   │  front ──► [slot 2] ◄──► [slot 1] ◄──► [slot 0] ◄── back   │ │
//!   │   │  (victim)                               (most recent)      │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   INSERT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════
//!     front ──► [A] ◄──► [B] ◄──► [C] ◄── back
//!
//!   insert(D):
//!     1. Evict [A] from the front
//!     2. Push [D] at the back
//!
//!     front ──► [B] ◄──► [C] ◄──► [D] ◄── back
//!
//!   INSERT existing key
//!   ═══════════════════════════════════════════════════════════════════
//!   insert(B, v'):
//!     1. Replace value in place
//!     2. Move [B] to the back: O(1)
//!
//!     front ──► [C] ◄──► [D] ◄──► [B] ◄── back
//!
//!   LOOKUP / CONTAINS / FIND
//!   ═══════════════════════════════════════════════════════════════════
//!     Order unchanged. Only writes refresh recency.
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<&str, u32> = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("a", 10); // "a" is now most recent
//! cache.insert("c", 3); // evicts "b"
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! let order: Vec<_> = cache.ordered_iter().map(|(k, _)| *k).collect();
//! assert_eq!(order, ["a", "c"]);
//! ```

use rustc_hash::FxBuildHasher;

use crate::cache::Cache;
use crate::ds::SlotId;
use crate::policy::{OrderNode, OrderQueue};
use crate::traits::{DefaultKeyEqual, EvictionPolicy};

/// Least-recently-written ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lru;

impl EvictionPolicy for Lru {
    type Meta = ();

    #[inline]
    fn admit(&mut self, order: &mut OrderQueue<()>, entry: SlotId) -> SlotId {
        order.push_back(OrderNode::new(entry, ()))
    }

    #[inline]
    fn promote(&mut self, order: &mut OrderQueue<()>, handle: SlotId) {
        order.move_to_back(handle);
    }
}

/// Cache evicting the least recently written entry.
pub type LruCache<K, V, S = FxBuildHasher, E = DefaultKeyEqual> = Cache<K, V, Lru, S, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn order_of<V>(cache: &LruCache<i32, V>) -> Vec<i32> {
        cache.ordered_iter().map(|(k, _)| *k).collect()
    }

    // ==============================================
    // CORRECTNESS TESTS MODULE
    // ==============================================
    mod correctness {
        use super::*;

        mod policy_behavior {
            use super::*;

            #[test]
            fn test_admit_pushes_back() {
                // New nodes join the back of the queue
                let mut order = OrderQueue::new();
                let mut lru = Lru;
                let a = lru.admit(&mut order, SlotId(0));
                let b = lru.admit(&mut order, SlotId(1));
                assert_eq!(order.front_id(), Some(a));
                assert_eq!(order.back_id(), Some(b));
            }

            #[test]
            fn test_promote_moves_to_back() {
                let mut order = OrderQueue::new();
                let mut lru = Lru;
                let a = lru.admit(&mut order, SlotId(0));
                let b = lru.admit(&mut order, SlotId(1));
                lru.promote(&mut order, a);
                assert_eq!(order.front_id(), Some(b));
                assert_eq!(order.back_id(), Some(a));
                assert_eq!(lru.victim(&order), Some(b));
            }

            #[test]
            fn test_victim_empty_queue() {
                let order: OrderQueue<()> = OrderQueue::new();
                assert_eq!(Lru.victim(&order), None);
            }
        }

        mod basic_behavior {
            use super::*;

            #[test]
            fn test_new_cache_creation() {
                // Test creating new LRU cache with various capacities
                let cache1: LruCache<i32, i32> = LruCache::new(0);
                assert_eq!(cache1.capacity(), 0);
                assert_eq!(cache1.len(), 0);

                let cache2: LruCache<i32, i32> = LruCache::new(10);
                assert_eq!(cache2.capacity(), 10);
                assert!(cache2.is_empty());
            }

            #[test]
            fn test_insert_reports_new_key() {
                let mut cache = LruCache::new(5);
                let result = cache.insert(1, 100);
                assert!(result.was_inserted());
                assert_eq!(cache.len(), 1);
                assert_eq!(cache.lookup(&1), Ok(&100));
            }

            #[test]
            fn test_insert_existing_key_updates() {
                // Update-insert keeps the length and replaces the value
                let mut cache = LruCache::new(5);
                cache.insert(1, 100);
                let result = cache.insert(1, 200);
                assert!(!result.was_inserted());
                assert_eq!(cache.len(), 1);
                assert_eq!(cache.lookup(&1), Ok(&200));
            }

            #[test]
            fn test_lookup_missing_key() {
                let cache: LruCache<i32, i32> = LruCache::new(5);
                assert_eq!(cache.lookup(&1), Err(CacheError::KeyNotFound));
            }

            #[test]
            fn test_lru_eviction_basic() {
                // Test that LRU item is evicted when capacity exceeded
                let mut cache = LruCache::new(2);
                cache.insert(1, 100);
                cache.insert(2, 200);
                cache.insert(3, 300);

                assert_eq!(cache.len(), 2);
                assert!(!cache.contains(&1)); // First inserted, first evicted
                assert!(cache.contains(&2));
                assert!(cache.contains(&3));
            }

            #[test]
            fn test_lookup_does_not_refresh() {
                // Reads leave recency untouched, so the oldest write goes first
                let mut cache = LruCache::new(2);
                cache.insert(1, 100);
                cache.insert(2, 200);
                assert_eq!(cache.lookup(&1), Ok(&100));
                assert!(cache.contains(&1));
                cache.insert(3, 300);

                assert!(!cache.contains(&1));
                assert_eq!(order_of(&cache), vec![2, 3]);
            }

            #[test]
            fn test_rewrite_refreshes() {
                let mut cache = LruCache::new(3);
                cache.insert(1, 100);
                cache.insert(2, 200);
                cache.insert(3, 300);
                cache.insert(1, 101);
                cache.insert(4, 400);

                assert!(cache.contains(&1));
                assert!(!cache.contains(&2));
                assert_eq!(order_of(&cache), vec![3, 1, 4]);
            }

            #[test]
            fn test_erase_then_reinsert_is_most_recent() {
                let mut cache = LruCache::new(3);
                cache.insert(1, 1);
                cache.insert(2, 2);
                cache.insert(3, 3);
                assert!(cache.erase(&1));
                assert!(!cache.contains(&1));
                cache.insert(1, 10);
                assert_eq!(order_of(&cache), vec![2, 3, 1]);
            }
        }

        mod edge_cases {
            use super::*;

            #[test]
            fn test_zero_capacity_operations() {
                // A zero-capacity cache admits nothing
                let mut cache = LruCache::new(0);
                let result = cache.insert(1, 100);
                assert!(!result.was_inserted());
                assert!(result.position().is_end());
                assert_eq!(cache.len(), 0);
                assert!(!cache.contains(&1));
                assert!(cache.is_full());
            }

            #[test]
            fn test_single_capacity_eviction_patterns() {
                let mut cache = LruCache::new(1);
                for i in 0..10 {
                    cache.insert(i, i * 10);
                    assert_eq!(cache.len(), 1);
                    assert_eq!(cache.lookup(&i), Ok(&(i * 10)));
                    if i > 0 {
                        assert!(!cache.contains(&(i - 1)));
                    }
                }
            }

            #[test]
            fn test_repeated_insert_same_key() {
                let mut cache = LruCache::new(3);
                for i in 0..100 {
                    cache.insert(7, i);
                }
                assert_eq!(cache.len(), 1);
                assert_eq!(cache.lookup(&7), Ok(&99));
            }

            #[test]
            fn test_clear_then_operations() {
                let mut cache = LruCache::new(3);
                cache.insert(1, 1);
                cache.insert(2, 2);
                cache.clear();
                assert!(cache.is_empty());
                assert!(!cache.contains(&1));

                cache.insert(3, 3);
                assert_eq!(order_of(&cache), vec![3]);
                assert_eq!(cache.capacity(), 3);
            }

            #[test]
            fn test_interleaved_operations() {
                let mut cache = LruCache::new(3);
                cache.insert(1, 1);
                cache.insert(2, 2);
                cache.erase(&1);
                cache.insert(3, 3);
                cache.insert(4, 4);
                cache.insert(2, 20);
                cache.insert(5, 5);

                assert_eq!(order_of(&cache), vec![4, 2, 5]);
                assert!(cache.check_invariants().is_ok());
            }
        }

        mod capacity_changes {
            use super::*;

            #[test]
            fn test_shrink_keeps_most_recent() {
                let mut cache = LruCache::new(3);
                cache.insert(1, 1);
                cache.insert(2, 2);
                cache.shrink(1);
                assert!(!cache.contains(&1));
                assert!(cache.contains(&2));
                assert_eq!(cache.capacity(), 3);
            }

            #[test]
            fn test_set_capacity_evicts_oldest() {
                let mut cache = LruCache::new(4);
                for i in 1..=4 {
                    cache.insert(i, i);
                }
                cache.set_capacity(2);
                assert_eq!(cache.capacity(), 2);
                assert_eq!(order_of(&cache), vec![3, 4]);
            }
        }
    }
}
