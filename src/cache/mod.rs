//! # Cache Engine
//!
//! One generic engine, [`Cache`], parameterized by eviction policy, hasher
//! and key equality. The LRU and LFU front-ends are type aliases over it.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                        Cache<K, V, P, S, E>                        │
//!   │                                                                    │
//!   │   last_accessed: Cell<Option<SlotId>> ───────┐  fast path          │
//!   │                                              ▼                     │
//!   │   ┌──────────────────────────────────────────────────────────────┐ │
//!   │   │ EntryStore: HashTable<SlotId> ──► SlotArena<Entry<K, V>>     │ │
//!   │   │                                   (key, value, hash, handle) │ │
//!   │   └─────────────────────────────────────────────────┬────────────┘ │
//!   │                                         handle      │  ▲ entry     │
//!   │   ┌─────────────────────────────────────────────────▼──┴─────────┐ │
//!   │   │ OrderQueue<P::Meta>:  front (victim) ◄──► ... ◄──► back      │ │
//!   │   └──────────────────────────────────────────────────────────────┘ │
//!   │                                                                    │
//!   │   policy: P              monitor: Option<Rc<Statistics<K>>>        │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recency Rules
//!
//! | Operation                          | Order queue          | Statistics |
//! |------------------------------------|----------------------|------------|
//! | `insert`/`emplace` (new key)       | evict if full, admit | -          |
//! | `insert`/`emplace` (existing key)  | promote              | -          |
//! | `contains`/`lookup`/`find`/index   | unchanged            | hit / miss |
//! | iteration, cursors, `value_mut`    | unchanged            | -          |
//! | `erase`/`remove`/`remove_current`  | node removed         | -          |
//!
//! Every successful key resolution and every write refreshes the
//! last-accessed slot, so repeated access to one key skips hashing.
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//!
//! use lrukit::cache::CacheCursor;
//! use lrukit::metrics::Statistics;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<String, u32> = LruCache::new(2);
//! let stats = Rc::new(Statistics::new());
//! cache.monitor(Rc::clone(&stats));
//!
//! cache.insert("a".to_string(), 1);
//! cache.insert("b".to_string(), 2);
//! assert_eq!(cache.lookup(&"a".to_string()), Ok(&1));
//! assert!(cache.lookup(&"z".to_string()).is_err());
//!
//! cache.insert("c".to_string(), 3); // "a" was written first; reads do not refresh
//! assert!(!cache.contains(&"a".to_string()));
//!
//! let cursor = cache.find(&"c".to_string());
//! assert_eq!(cursor.value(), Some(&3));
//! assert_eq!(stats.total_hits(), 2);
//! assert_eq!(stats.total_misses(), 2);
//! ```

pub mod cursor;
pub mod insertion;
pub mod iter;
mod last_accessed;

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::rc::Rc;

use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::ds::SlotId;
use crate::error::{CacheError, InvariantError, Result};
use crate::metrics::monitor::Monitor;
use crate::metrics::Statistics;
use crate::policy::lru::Lru;
use crate::policy::OrderQueue;
use crate::store::entry_store::MAX_PREALLOC;
use crate::store::EntryStore;
use crate::traits::{DefaultKeyEqual, EvictionPolicy, KeyEqual};

pub use cursor::{
    CacheCursor, OrderedCursor, OrderedCursorMut, OrderedPosition, UnorderedCursor,
    UnorderedCursorMut, UnorderedPosition,
};
pub use insertion::InsertionResult;
pub use iter::{Iter, IterMut, Keys, OrderedIter, OrderedIterMut, Values};

use last_accessed::LastAccessed;

/// Placeholder order handle for an entry whose node is not linked yet.
const UNLINKED: SlotId = SlotId(usize::MAX);

/// Bounded associative cache with a pluggable eviction policy.
///
/// `len()` never exceeds `capacity()`: when a new key arrives at a full
/// cache, the policy victim is evicted before the key is admitted. Reads
/// never change eviction order.
pub struct Cache<K, V, P = Lru, S = FxBuildHasher, E = DefaultKeyEqual>
where
    P: EvictionPolicy,
{
    pub(crate) store: EntryStore<K, V, S, E>,
    pub(crate) order: OrderQueue<P::Meta>,
    policy: P,
    last_accessed: LastAccessed,
    monitor: Monitor<K>,
    capacity: usize,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<K, V, P, S, E> Cache<K, V, P, S, E>
where
    P: EvictionPolicy,
{
    /// Creates an empty cache from explicit parts.
    pub fn with_parts(capacity: usize, policy: P, hash_builder: S, key_eq: E) -> Self {
        Self {
            store: EntryStore::with_capacity_and_hasher(capacity, hash_builder, key_eq),
            order: OrderQueue::with_capacity(capacity.min(MAX_PREALLOC)),
            policy,
            last_accessed: LastAccessed::default(),
            monitor: Monitor::detached(),
            capacity,
        }
    }
}

impl<K, V, P, S, E> Cache<K, V, P, S, E>
where
    P: EvictionPolicy + Default,
{
    pub fn with_hasher_and_key_eq(capacity: usize, hash_builder: S, key_eq: E) -> Self {
        Self::with_parts(capacity, P::default(), hash_builder, key_eq)
    }
}

impl<K, V, P, S> Cache<K, V, P, S, DefaultKeyEqual>
where
    P: EvictionPolicy + Default,
{
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::with_hasher_and_key_eq(capacity, hash_builder, DefaultKeyEqual)
    }
}

impl<K, V, P> Cache<K, V, P, FxBuildHasher, DefaultKeyEqual>
where
    P: EvictionPolicy + Default,
{
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }

    /// Creates a cache and inserts `entries` in order. Later duplicates
    /// overwrite earlier ones; when `entries` outnumber `capacity`, the
    /// usual eviction rules apply.
    pub fn with_entries<I>(capacity: usize, entries: I) -> Self
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut cache = Self::new(capacity);
        cache.insert_many(entries);
        cache
    }
}

// ---------------------------------------------------------------------------
// Size, capacity, removal by position (no hashing required)
// ---------------------------------------------------------------------------

impl<K, V, P, S, E> Cache<K, V, P, S, E>
where
    P: EvictionPolicy,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries that can be admitted before eviction starts.
    #[inline]
    pub fn space_left(&self) -> usize {
        self.capacity.saturating_sub(self.len())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.store.hasher()
    }

    #[inline]
    pub fn key_eq(&self) -> &E {
        self.store.key_eq()
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Removes every entry. Capacity and monitor are kept.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.store.clear();
        self.order.clear();
        self.last_accessed.invalidate();
        debug!(dropped, capacity = self.capacity, "cache cleared");
    }

    /// Evicts policy victims until at most `new_len` entries remain.
    /// Capacity is unchanged.
    pub fn shrink(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }
        if new_len == 0 {
            self.clear();
            return;
        }
        let before = self.len();
        while self.len() > new_len {
            if self.evict_one().is_none() {
                break;
            }
        }
        debug!(before, after = self.len(), "cache shrunk");
    }

    /// Changes the maximum size, evicting victims first if the cache holds
    /// more than `new_capacity` entries.
    pub fn set_capacity(&mut self, new_capacity: usize) {
        while self.len() > new_capacity {
            if self.evict_one().is_none() {
                break;
            }
        }
        debug!(old = self.capacity, new = new_capacity, len = self.len(), "cache capacity changed");
        self.capacity = new_capacity;
    }

    /// Removes the entry at `position`. Returns `false` for the end
    /// position or a stale one.
    pub fn erase_unordered(&mut self, position: UnorderedPosition) -> bool {
        position
            .slot()
            .is_some_and(|id| self.remove_slot(id).is_some())
    }

    /// Removes the entry at an ordered `position`.
    pub fn erase_ordered(&mut self, position: OrderedPosition) -> bool {
        let Some(id) = position
            .node()
            .and_then(|handle| self.order.get(handle))
            .map(|node| node.entry())
        else {
            return false;
        };
        self.remove_slot(id).is_some()
    }

    /// Exchanges the entire state of two caches.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // -- monitoring -----------------------------------------------------

    /// Attaches `stats`; subsequent key lookups record hits and misses.
    /// Replaces any previously attached statistics.
    pub fn monitor(&mut self, stats: impl Into<Rc<Statistics<K>>>) {
        self.monitor.attach(stats.into());
    }

    /// Detaches the current statistics, returning them if any were attached.
    pub fn stop_monitoring(&mut self) -> Option<Rc<Statistics<K>>> {
        self.monitor.detach()
    }

    #[inline]
    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_attached()
    }

    /// Attached statistics, or [`CacheError::NotMonitoring`].
    pub fn statistics(&self) -> Result<&Statistics<K>> {
        self.monitor.stats().ok_or(CacheError::NotMonitoring)
    }

    // -- cursors --------------------------------------------------------

    /// Cursor at the first entry in store order.
    pub fn begin(&self) -> UnorderedCursor<'_, K, V, P, S, E> {
        self.unordered_begin()
    }

    pub fn end(&self) -> UnorderedCursor<'_, K, V, P, S, E> {
        self.unordered_end()
    }

    pub fn begin_mut(&mut self) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        self.unordered_begin_mut()
    }

    pub fn end_mut(&mut self) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        self.unordered_end_mut()
    }

    pub fn unordered_begin(&self) -> UnorderedCursor<'_, K, V, P, S, E> {
        UnorderedCursor::new(self, self.first_slot())
    }

    pub fn unordered_end(&self) -> UnorderedCursor<'_, K, V, P, S, E> {
        UnorderedCursor::new(self, UnorderedPosition::END)
    }

    pub fn unordered_begin_mut(&mut self) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        let pos = self.first_slot();
        UnorderedCursorMut::new(self, pos)
    }

    pub fn unordered_end_mut(&mut self) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        UnorderedCursorMut::new(self, UnorderedPosition::END)
    }

    /// Cursor at the next eviction victim.
    pub fn ordered_begin(&self) -> OrderedCursor<'_, K, V, P, S, E> {
        OrderedCursor::new(self, self.first_node())
    }

    pub fn ordered_end(&self) -> OrderedCursor<'_, K, V, P, S, E> {
        OrderedCursor::new(self, OrderedPosition::END)
    }

    pub fn ordered_begin_mut(&mut self) -> OrderedCursorMut<'_, K, V, P, S, E> {
        let pos = self.first_node();
        OrderedCursorMut::new(self, pos)
    }

    pub fn ordered_end_mut(&mut self) -> OrderedCursorMut<'_, K, V, P, S, E> {
        OrderedCursorMut::new(self, OrderedPosition::END)
    }

    /// Cursor at a previously obtained store-order position.
    pub fn cursor_at(&self, position: UnorderedPosition) -> UnorderedCursor<'_, K, V, P, S, E> {
        UnorderedCursor::new(self, position)
    }

    pub fn cursor_at_mut(
        &mut self,
        position: UnorderedPosition,
    ) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        UnorderedCursorMut::new(self, position)
    }

    pub fn ordered_cursor_at(&self, position: OrderedPosition) -> OrderedCursor<'_, K, V, P, S, E> {
        OrderedCursor::new(self, position)
    }

    pub fn ordered_cursor_at_mut(
        &mut self,
        position: OrderedPosition,
    ) -> OrderedCursorMut<'_, K, V, P, S, E> {
        OrderedCursorMut::new(self, position)
    }

    // -- iterators ------------------------------------------------------

    /// Entries in store order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.store.arena())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.store.arena_mut())
    }

    /// Entries from the next victim to the most recently promoted.
    pub fn ordered_iter(&self) -> OrderedIter<'_, K, V, P::Meta> {
        OrderedIter::new(&self.order, self.store.arena())
    }

    pub fn ordered_iter_mut(&mut self) -> OrderedIterMut<'_, K, V, P::Meta> {
        OrderedIterMut::new(&self.order, self.store.arena_mut())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    // -- invariants -----------------------------------------------------

    /// Verifies the structural invariants linking store, order queue and
    /// last-accessed slot.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        if self.store.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "store holds {} entries but order queue holds {}",
                self.store.len(),
                self.order.len()
            )));
        }
        if self.store.index_len() != self.store.len() {
            return Err(InvariantError::new(format!(
                "index holds {} slots for {} entries",
                self.store.index_len(),
                self.store.len()
            )));
        }
        if self.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len(),
                self.capacity
            )));
        }
        for (id, entry) in self.store.iter() {
            match self.order.get(entry.handle) {
                Some(node) if node.entry() == id => {}
                Some(node) => {
                    return Err(InvariantError::new(format!(
                        "entry {} points at node {} owned by entry {}",
                        id.index(),
                        entry.handle.index(),
                        node.entry().index()
                    )));
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "entry {} has dangling order handle {}",
                        id.index(),
                        entry.handle.index()
                    )));
                }
            }
        }
        let mut walked = 0usize;
        let mut cursor = self.order.front_id();
        while let Some(handle) = cursor {
            walked += 1;
            if walked > self.order.len() {
                return Err(InvariantError::new("order queue contains a cycle"));
            }
            cursor = self.order.next_id(handle);
        }
        if walked != self.order.len() {
            return Err(InvariantError::new(format!(
                "order queue walk visited {walked} of {} nodes",
                self.order.len()
            )));
        }
        if let Some(id) = self.last_accessed.get() {
            if !self.store.contains_slot(id) {
                return Err(InvariantError::new(format!(
                    "last-accessed slot {} names no entry",
                    id.index()
                )));
            }
        }
        Ok(())
    }

    // -- internals ------------------------------------------------------

    fn first_slot(&self) -> UnorderedPosition {
        self.store
            .next_occupied(None)
            .map_or(UnorderedPosition::END, UnorderedPosition::at)
    }

    fn first_node(&self) -> OrderedPosition {
        self.order
            .front_id()
            .map_or(OrderedPosition::END, OrderedPosition::at)
    }

    /// Removes the entry in store slot `id` together with its order node.
    pub(crate) fn remove_slot(&mut self, id: SlotId) -> Option<(K, V)> {
        let entry = self.store.remove(id)?;
        self.order.remove(entry.handle);
        self.last_accessed.invalidate_if(id);
        Some(entry.into_pair())
    }

    /// Removes the policy victim.
    fn evict_one(&mut self) -> Option<(K, V)> {
        let handle = self.policy.victim(&self.order)?;
        let id = self.order.get(handle)?.entry();
        let evicted = self.remove_slot(id);
        trace!(
            slot = id.index(),
            len = self.len(),
            capacity = self.capacity,
            "evicted cache entry"
        );
        evicted
    }
}

// ---------------------------------------------------------------------------
// Key-based operations
// ---------------------------------------------------------------------------

impl<K, V, P, S, E> Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    /// Inserts or updates `key`.
    ///
    /// A new key evicts the policy victim first if the cache is full and
    /// reports `was_inserted == true`. An existing key has its value
    /// replaced and is promoted by the policy.
    pub fn insert(&mut self, key: K, value: V) -> InsertionResult {
        match self.locate(&key) {
            Some(id) => self.update(id, value),
            None => self.admit(key, || value),
        }
    }

    /// Like [`insert`](Self::insert), building key and value from
    /// convertible arguments.
    pub fn emplace<Q, W>(&mut self, key: Q, value: W) -> InsertionResult
    where
        Q: Into<K>,
        W: Into<V>,
    {
        let key = key.into();
        match self.locate(&key) {
            Some(id) => self.update(id, value.into()),
            None => self.admit(key, || value.into()),
        }
    }

    /// Inserts each pair in order.
    pub fn insert_many<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Replaces the contents with `entries`, keeping capacity and monitor.
    pub fn assign<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.clear();
        self.insert_many(entries);
    }

    /// Returns `true` if `key` is cached. Records a hit or miss.
    pub fn contains(&self, key: &K) -> bool {
        self.resolve(key).is_some()
    }

    /// Value for `key`, or [`CacheError::KeyNotFound`]. Does not change
    /// eviction order.
    pub fn lookup(&self, key: &K) -> Result<&V> {
        let id = self.resolve(key).ok_or(CacheError::KeyNotFound)?;
        self.store
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::KeyNotFound)
    }

    pub fn lookup_mut(&mut self, key: &K) -> Result<&mut V> {
        let id = self.resolve(key).ok_or(CacheError::KeyNotFound)?;
        self.store
            .get_mut(id)
            .map(|entry| &mut entry.value)
            .ok_or(CacheError::KeyNotFound)
    }

    /// Cursor at `key`, or the end cursor when absent.
    pub fn find(&self, key: &K) -> UnorderedCursor<'_, K, V, P, S, E> {
        let pos = self
            .resolve(key)
            .map_or(UnorderedPosition::END, UnorderedPosition::at);
        UnorderedCursor::new(self, pos)
    }

    pub fn find_mut(&mut self, key: &K) -> UnorderedCursorMut<'_, K, V, P, S, E> {
        let pos = self
            .resolve(key)
            .map_or(UnorderedPosition::END, UnorderedPosition::at);
        UnorderedCursorMut::new(self, pos)
    }

    /// Removes `key`; returns `false` if it was not cached.
    pub fn erase(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.locate(key)?;
        self.remove_slot(id).map(|(_, value)| value)
    }

    /// Policy metadata of `key`'s order node, without touching statistics.
    pub(crate) fn order_meta(&self, key: &K) -> Option<&P::Meta> {
        let entry = self.store.get(self.locate(key)?)?;
        self.order.get(entry.handle).map(|node| &node.meta)
    }

    /// Last-accessed fast path, then one hash probe. Records statistics and
    /// refreshes the memo on success.
    fn resolve(&self, key: &K) -> Option<SlotId> {
        match self.locate(key) {
            Some(id) => {
                self.last_accessed.set(id);
                self.monitor.register_hit(key);
                Some(id)
            }
            None => {
                self.monitor.register_miss(key);
                None
            }
        }
    }

    fn locate(&self, key: &K) -> Option<SlotId> {
        if let Some(id) = self.last_accessed.get() {
            if self.store.key_matches(id, key) {
                return Some(id);
            }
        }
        self.store.find(key)
    }

    fn update(&mut self, id: SlotId, value: V) -> InsertionResult {
        if let Some(entry) = self.store.get_mut(id) {
            entry.value = value;
            let handle = entry.handle;
            self.policy.promote(&mut self.order, handle);
        }
        self.last_accessed.set(id);
        InsertionResult::new(false, UnorderedPosition::at(id))
    }

    fn admit(&mut self, key: K, make_value: impl FnOnce() -> V) -> InsertionResult {
        if self.capacity == 0 {
            trace!("zero-capacity cache rejected insert");
            return InsertionResult::new(false, UnorderedPosition::END);
        }
        if self.len() >= self.capacity {
            self.evict_one();
        }
        let hash = self.store.hash_key(&key);
        let id = self.store.insert_new(hash, key, make_value(), UNLINKED);
        let handle = self.policy.admit(&mut self.order, id);
        if let Some(entry) = self.store.get_mut(id) {
            entry.handle = handle;
        }
        self.last_accessed.set(id);
        InsertionResult::new(true, UnorderedPosition::at(id))
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V, P, S, E> Clone for Cache<K, V, P, S, E>
where
    K: Clone,
    V: Clone,
    P: EvictionPolicy + Clone,
    S: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            order: self.order.clone(),
            policy: self.policy.clone(),
            last_accessed: self.last_accessed.clone(),
            monitor: self.monitor.clone(),
            capacity: self.capacity,
        }
    }
}

impl<K, V, P, S, E> fmt::Debug for Cache<K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("entries", &DebugOrdered(self))
            .field("monitoring", &self.is_monitoring())
            .finish_non_exhaustive()
    }
}

struct DebugOrdered<'a, K, V, P, S, E>(&'a Cache<K, V, P, S, E>)
where
    P: EvictionPolicy;

impl<K, V, P, S, E> fmt::Debug for DebugOrdered<'_, K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.ordered_iter()).finish()
    }
}

impl<K, V, P, S, E> Default for Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy + Default,
    S: BuildHasher + Default,
    E: KeyEqual<K> + Default,
{
    /// An empty zero-capacity cache; raise the bound with
    /// [`set_capacity`](Cache::set_capacity).
    fn default() -> Self {
        Self::with_parts(0, P::default(), S::default(), E::default())
    }
}

/// Caches are equal when their policy-ordered entries are pairwise equal.
/// Capacity is not compared.
impl<K, V, P, S, E> PartialEq for Cache<K, V, P, S, E>
where
    K: PartialEq,
    V: PartialEq,
    P: EvictionPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.ordered_iter().eq(other.ordered_iter())
    }
}

impl<K, V, P, S, E> Eq for Cache<K, V, P, S, E>
where
    K: Eq,
    V: Eq,
    P: EvictionPolicy,
{
}

impl<K, V, P, S, E> Extend<(K, V)> for Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

/// Collects into a cache whose capacity equals the number of pairs.
impl<K, V, P, S, E> FromIterator<(K, V)> for Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy + Default,
    S: BuildHasher + Default,
    E: KeyEqual<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries: Vec<(K, V)> = iter.into_iter().collect();
        let mut cache = Self::with_parts(entries.len(), P::default(), S::default(), E::default());
        cache.insert_many(entries);
        cache
    }
}

impl<K, V, P, S, E> Index<&K> for Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not cached.
    fn index(&self, key: &K) -> &V {
        match self.lookup(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, V, P, S, E> IndexMut<&K> for Cache<K, V, P, S, E>
where
    K: Hash + Eq,
    P: EvictionPolicy,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    fn index_mut(&mut self, key: &K) -> &mut V {
        match self.lookup_mut(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, K, V, P, S, E> IntoIterator for &'a Cache<K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, P, S, E> IntoIterator for &'a mut Cache<K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
