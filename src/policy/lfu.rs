//! # Least Frequently Written (LFU) Policy
//!
//! Keeps the order queue sorted by per-entry write count, lowest first.
//! Entries with equal counts stay in promotion order, so among the coldest
//! entries the least recently written one is evicted first.
//!
//! ```text
//!   front                                                   back
//!     [d:1] ◄──► [e:1] ◄──► [a:2] ◄──► [c:2] ◄──► [b:5]
//!     victim     newest      older      newest
//!                count 1     count 2    count 2
//!
//!   insert(a, v'):  a: 2 → 3, slides right past every count ≤ 3
//!
//!     [d:1] ◄──► [e:1] ◄──► [c:2] ◄──► [a:3] ◄──► [b:5]
//!
//!   insert(f, v):   count 1, linked after the last count-1 node
//!                   (after evicting [d:1] when full)
//!
//!     [e:1] ◄──► [f:1] ◄──► [c:2] ◄──► [a:3] ◄──► [b:5]
//! ```
//!
//! Admission and promotion walk the queue, so they cost O(k) in the number
//! of nodes skipped. Reads do not count as writes.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lfu::LfuCache;
//!
//! let mut cache: LfuCache<&str, u32> = LfuCache::new(2);
//! cache.insert("hot", 1);
//! cache.insert("hot", 2);
//! cache.insert("cold", 1);
//! cache.insert("new", 1); // evicts "cold"
//!
//! assert!(cache.contains(&"hot"));
//! assert!(!cache.contains(&"cold"));
//! assert_eq!(cache.write_count(&"hot"), Some(2));
//! ```

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::cache::Cache;
use crate::ds::SlotId;
use crate::policy::{OrderNode, OrderQueue};
use crate::traits::{DefaultKeyEqual, EvictionPolicy, KeyEqual};

/// Least-frequently-written ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lfu;

impl Lfu {
    /// Last node at or after `start` whose count is `<= count`, walking
    /// towards the back and stopping at the first larger count.
    fn last_within(order: &OrderQueue<u64>, start: Option<SlotId>, count: u64) -> Option<SlotId> {
        let mut anchor = None;
        let mut cursor = start;
        while let Some(id) = cursor {
            match order.get(id) {
                Some(node) if node.meta <= count => {
                    anchor = Some(id);
                    cursor = order.next_id(id);
                }
                _ => break,
            }
        }
        anchor
    }
}

impl EvictionPolicy for Lfu {
    type Meta = u64;

    fn admit(&mut self, order: &mut OrderQueue<u64>, entry: SlotId) -> SlotId {
        let node = OrderNode::new(entry, 1);
        match Self::last_within(order, order.front_id(), 1) {
            Some(anchor) => order
                .insert_after(anchor, node)
                .unwrap_or_else(|node| order.push_back(node)),
            None => order.push_front(node),
        }
    }

    fn promote(&mut self, order: &mut OrderQueue<u64>, handle: SlotId) {
        let Some(node) = order.get_mut(handle) else {
            return;
        };
        node.meta = node.meta.saturating_add(1);
        let count = node.meta;

        if let Some(anchor) = Self::last_within(order, order.next_id(handle), count) {
            order.move_after(handle, anchor);
        }
    }
}

/// Cache evicting the least frequently written entry.
pub type LfuCache<K, V, S = FxBuildHasher, E = DefaultKeyEqual> = Cache<K, V, Lfu, S, E>;

impl<K, V, S, E> Cache<K, V, Lfu, S, E>
where
    K: Hash + Eq,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    /// Number of writes (`insert`/`emplace`) seen by `key` since it was
    /// admitted. Does not touch statistics or the last-accessed slot.
    pub fn write_count(&self, key: &K) -> Option<u64> {
        self.order_meta(key).copied()
    }
}
