//! # Engine Extension Points
//!
//! The cache engine is a single generic type, [`Cache`](crate::cache::Cache),
//! parameterized at the seams where behavior differs between deployments:
//!
//! ```text
//!   Cache<K, V, P, S, E>
//!            │  │  │
//!            │  │  └── E: KeyEqual<K>      key equality predicate
//!            │  └───── S: BuildHasher      hash function
//!            └──────── P: EvictionPolicy   order metadata + placement rules
//! ```
//!
//! ## EvictionPolicy
//!
//! A policy owns no entries. It only decides where an entry's node sits in
//! the shared order queue:
//!
//! ```text
//!   admit(entry)    new key    ──► link a fresh node, return its handle
//!   promote(handle) write hit  ──► reposition the node
//!   victim()        full cache ──► node to evict (default: front)
//! ```
//!
//! Reads never reach the policy; only `insert`/`emplace` do.
//!
//! | Policy | Meta  | admit           | promote                  | victim |
//! |--------|-------|-----------------|--------------------------|--------|
//! | `Lru`  | `()`  | push back       | move to back             | front  |
//! | `Lfu`  | `u64` | after count ≤ 1 | bump count, slide right  | front  |
//!
//! ## KeyEqual
//!
//! Equality used by the entry store and the last-accessed fast path. It must
//! agree with the configured hasher: keys that compare equal must hash
//! equally. Any `Fn(&K, &K) -> bool` is a `KeyEqual`.

use std::fmt;

use crate::ds::SlotId;
use crate::policy::OrderQueue;

/// Strategy that places entries in the order queue.
///
/// The front of the queue is the next eviction victim unless
/// [`victim`](Self::victim) is overridden; ordered traversal of a cache walks
/// the queue front to back.
pub trait EvictionPolicy {
    /// Per-entry ordering metadata stored in the entry's queue node.
    type Meta: Clone + fmt::Debug;

    /// Links a node for a newly admitted entry and returns its handle.
    fn admit(&mut self, order: &mut OrderQueue<Self::Meta>, entry: SlotId) -> SlotId;

    /// Repositions an existing node after its entry was written.
    fn promote(&mut self, order: &mut OrderQueue<Self::Meta>, handle: SlotId);

    /// Returns the handle of the node whose entry should be evicted next.
    fn victim(&self, order: &OrderQueue<Self::Meta>) -> Option<SlotId> {
        order.front_id()
    }
}

/// Key equality predicate used by the entry store.
pub trait KeyEqual<K: ?Sized> {
    /// Returns `true` if `a` and `b` name the same cache entry.
    fn equal(&self, a: &K, b: &K) -> bool;
}

/// [`KeyEqual`] that delegates to `Eq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultKeyEqual;

impl<K> KeyEqual<K> for DefaultKeyEqual
where
    K: Eq + ?Sized,
{
    #[inline]
    fn equal(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

impl<K, F> KeyEqual<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn equal(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_equal_uses_eq() {
        let eq = DefaultKeyEqual;
        assert!(KeyEqual::<str>::equal(&eq, "a", "a"));
        assert!(!KeyEqual::<u32>::equal(&eq, &1, &2));
    }

    #[test]
    fn closures_are_key_equal() {
        let case_insensitive = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
        assert!(case_insensitive.equal(&"Key".to_string(), &"kEY".to_string()));
        assert!(!case_insensitive.equal(&"Key".to_string(), &"other".to_string()));
    }
}
