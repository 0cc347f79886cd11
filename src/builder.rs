//! Configuration builder for caches.
//!
//! Collects capacity, policy, hasher, key equality, initial entries and an
//! optional statistics monitor, then assembles a [`Cache`].
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//! use lrukit::policy::lfu::Lfu;
//!
//! // LRU by default, capacity taken from the initial entries
//! let cache = CacheBuilder::new().entries([(1u64, "one"), (2, "two")]).build();
//! assert_eq!(cache.capacity(), 2);
//!
//! // LFU with an explicit bound
//! let mut lfu = CacheBuilder::<u64, String>::new().capacity(100).policy(Lfu).build();
//! lfu.insert(1, "hello".to_string());
//! assert_eq!(lfu.lookup(&1), Ok(&"hello".to_string()));
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use rustc_hash::FxBuildHasher;

use crate::cache::Cache;
use crate::metrics::Statistics;
use crate::policy::lru::Lru;
use crate::traits::{DefaultKeyEqual, EvictionPolicy, KeyEqual};

/// Builder for [`Cache`] instances.
///
/// Without an explicit [`capacity`](Self::capacity) the cache is sized to
/// the number of initial entries.
pub struct CacheBuilder<K, V, P = Lru, S = FxBuildHasher, E = DefaultKeyEqual> {
    capacity: Option<usize>,
    policy: P,
    hash_builder: S,
    key_eq: E,
    entries: Vec<(K, V)>,
    stats: Option<Rc<Statistics<K>>>,
}

impl<K, V> CacheBuilder<K, V> {
    /// LRU builder with the default hasher and key equality.
    pub fn new() -> Self {
        Self {
            capacity: None,
            policy: Lru,
            hash_builder: FxBuildHasher,
            key_eq: DefaultKeyEqual,
            entries: Vec::new(),
            stats: None,
        }
    }
}

impl<K, V> Default for CacheBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P, S, E> CacheBuilder<K, V, P, S, E> {
    /// Maximum number of entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Replaces the eviction policy.
    pub fn policy<P2>(self, policy: P2) -> CacheBuilder<K, V, P2, S, E>
    where
        P2: EvictionPolicy,
    {
        CacheBuilder {
            capacity: self.capacity,
            policy,
            hash_builder: self.hash_builder,
            key_eq: self.key_eq,
            entries: self.entries,
            stats: self.stats,
        }
    }

    /// Replaces the hash function used by the entry store.
    pub fn hasher<S2>(self, hash_builder: S2) -> CacheBuilder<K, V, P, S2, E>
    where
        S2: BuildHasher,
    {
        CacheBuilder {
            capacity: self.capacity,
            policy: self.policy,
            hash_builder,
            key_eq: self.key_eq,
            entries: self.entries,
            stats: self.stats,
        }
    }

    /// Replaces the key equality predicate. It must agree with the hasher.
    pub fn key_eq<E2>(self, key_eq: E2) -> CacheBuilder<K, V, P, S, E2> {
        CacheBuilder {
            capacity: self.capacity,
            policy: self.policy,
            hash_builder: self.hash_builder,
            key_eq,
            entries: self.entries,
            stats: self.stats,
        }
    }

    /// Appends initial entries, inserted in order by [`build`](Self::build).
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Attaches statistics to the built cache.
    pub fn monitor(mut self, stats: impl Into<Rc<Statistics<K>>>) -> Self {
        self.stats = Some(stats.into());
        self
    }

    pub fn build(self) -> Cache<K, V, P, S, E>
    where
        K: Hash + Eq,
        P: EvictionPolicy,
        S: BuildHasher,
        E: KeyEqual<K>,
    {
        let capacity = self.capacity.unwrap_or(self.entries.len());
        let mut cache = Cache::with_parts(capacity, self.policy, self.hash_builder, self.key_eq);
        cache.insert_many(self.entries);
        if let Some(stats) = self.stats {
            cache.monitor(stats);
        }
        cache
    }
}

impl<K, V, P, S, E> fmt::Debug for CacheBuilder<K, V, P, S, E>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("entries", &self.entries.len())
            .field("monitored", &self.stats.is_some())
            .finish_non_exhaustive()
    }
}
