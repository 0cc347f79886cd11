//! Hash-indexed entry store with stable slot handles.
//!
//! Entries live in a [`SlotArena`]; a `hashbrown` [`HashTable`] maps key
//! hashes to their slots. The table stores only `SlotId`s, so rehashing
//! never moves an entry and slot handles held elsewhere stay valid.
//!
//! ```text
//!   key ──► S::hash_one ──► HashTable<SlotId> ──► SlotArena<Entry>
//!                                                   │
//!                                                   ├─ key
//!                                                   ├─ value
//!                                                   ├─ hash    (cached for rehash)
//!                                                   └─ handle  (order-queue node)
//! ```
//!
//! Equality is delegated to the store's [`KeyEqual`]; it must agree with
//! the hasher. Native traversal order is arena slot order.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use hashbrown::HashTable;

use crate::ds::{SlotArena, SlotId};
use crate::traits::KeyEqual;

/// Upper bound on slots reserved up front; larger caches grow on demand.
pub(crate) const MAX_PREALLOC: usize = 1 << 12;

/// A stored key/value pair plus engine bookkeeping.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
    pub(crate) handle: SlotId,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Order-queue node that ranks this entry.
    #[inline]
    pub fn handle(&self) -> SlotId {
        self.handle
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Key → entry mapping with unique keys under `E`.
#[derive(Clone)]
pub struct EntryStore<K, V, S, E> {
    entries: SlotArena<Entry<K, V>>,
    index: HashTable<SlotId>,
    hash_builder: S,
    key_eq: E,
}

impl<K, V, S, E> EntryStore<K, V, S, E> {
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S, key_eq: E) -> Self {
        let reserve = capacity.min(MAX_PREALLOC);
        Self {
            entries: SlotArena::with_capacity(reserve),
            index: HashTable::with_capacity(reserve),
            hash_builder,
            key_eq,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    #[inline]
    pub fn key_eq(&self) -> &E {
        &self.key_eq
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&Entry<K, V>> {
        self.entries.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Entry<K, V>> {
        self.entries.get_mut(id)
    }

    #[inline]
    pub fn contains_slot(&self, id: SlotId) -> bool {
        self.entries.contains(id)
    }

    /// First occupied slot after `after` (or the first one overall).
    #[inline]
    pub fn next_occupied(&self, after: Option<SlotId>) -> Option<SlotId> {
        self.entries.next_occupied(after)
    }

    /// Iterates entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Entry<K, V>)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut Entry<K, V>)> {
        self.entries.iter_mut()
    }

    /// Removes the entry in slot `id`, unlinking it from the index by its
    /// cached hash.
    pub fn remove(&mut self, id: SlotId) -> Option<Entry<K, V>> {
        let hash = self.entries.get(id)?.hash;
        if let Ok(occupied) = self.index.find_entry(hash, |&slot| slot == id) {
            occupied.remove();
        }
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Number of index buckets currently in use.
    #[inline]
    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn arena(&self) -> &SlotArena<Entry<K, V>> {
        &self.entries
    }

    pub(crate) fn arena_mut(&mut self) -> &mut SlotArena<Entry<K, V>> {
        &mut self.entries
    }
}

impl<K, V, S, E> EntryStore<K, V, S, E>
where
    K: Hash,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    #[inline]
    pub fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    /// Locates `key` with one hash probe.
    pub fn find(&self, key: &K) -> Option<SlotId> {
        self.find_hashed(self.hash_key(key), key)
    }

    pub fn find_hashed(&self, hash: u64, key: &K) -> Option<SlotId> {
        let entries = &self.entries;
        let key_eq = &self.key_eq;
        self.index
            .find(hash, |&slot| {
                entries
                    .get(slot)
                    .is_some_and(|entry| entry.hash == hash && key_eq.equal(&entry.key, key))
            })
            .copied()
    }

    /// Returns `true` if slot `id` is occupied by an entry equal to `key`.
    #[inline]
    pub fn key_matches(&self, id: SlotId, key: &K) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| self.key_eq.equal(&entry.key, key))
    }

    /// Stores a key that is known to be absent.
    pub fn insert_new(&mut self, hash: u64, key: K, value: V, handle: SlotId) -> SlotId {
        let id = self.entries.insert(Entry {
            key,
            value,
            hash,
            handle,
        });
        let entries = &self.entries;
        self.index.insert_unique(hash, id, |&slot| {
            entries.get(slot).map_or(0, |entry| entry.hash)
        });
        id
    }
}

impl<K, V, S, E> fmt::Debug for EntryStore<K, V, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(_, e)| (&e.key, &e.value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultKeyEqual;
    use rustc_hash::FxBuildHasher;

    type Store = EntryStore<String, u32, FxBuildHasher, DefaultKeyEqual>;

    fn store() -> Store {
        EntryStore::with_capacity_and_hasher(8, FxBuildHasher, DefaultKeyEqual)
    }

    fn put(store: &mut Store, key: &str, value: u32) -> SlotId {
        let key = key.to_string();
        let hash = store.hash_key(&key);
        store.insert_new(hash, key, value, SlotId(0))
    }

    #[test]
    fn find_after_insert() {
        let mut store = store();
        let a = put(&mut store, "a", 1);
        let b = put(&mut store, "b", 2);

        assert_eq!(store.find(&"a".to_string()), Some(a));
        assert_eq!(store.find(&"b".to_string()), Some(b));
        assert_eq!(store.find(&"c".to_string()), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_unlinks_index() {
        let mut store = store();
        let a = put(&mut store, "a", 1);
        put(&mut store, "b", 2);

        let removed = store.remove(a).map(Entry::into_pair);
        assert_eq!(removed, Some(("a".to_string(), 1)));
        assert_eq!(store.find(&"a".to_string()), None);
        assert_eq!(store.index_len(), 1);
        assert!(store.remove(a).is_none());
    }

    #[test]
    fn slots_survive_growth() {
        let mut store = store();
        let first = put(&mut store, "first", 0);
        for i in 0..1000 {
            put(&mut store, &format!("k{i}"), i);
        }
        assert_eq!(store.find(&"first".to_string()), Some(first));
        assert_eq!(store.get(first).map(|e| e.value), Some(0));
        let last = store.find(&"k999".to_string());
        assert_eq!(last.and_then(|id| store.get(id)).map(|e| e.value), Some(999));
    }

    #[test]
    fn key_matches_checks_occupancy_and_equality() {
        let mut store = store();
        let a = put(&mut store, "a", 1);
        assert!(store.key_matches(a, &"a".to_string()));
        assert!(!store.key_matches(a, &"b".to_string()));
        store.remove(a);
        assert!(!store.key_matches(a, &"a".to_string()));
    }

    #[test]
    fn custom_key_equality() {
        // Hash on the lowercase form so the predicate agrees with the hasher
        #[derive(Default, Clone)]
        struct Lower;
        impl BuildHasher for Lower {
            type Hasher = rustc_hash::FxHasher;
            fn build_hasher(&self) -> Self::Hasher {
                rustc_hash::FxHasher::default()
            }
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Name(String);
        impl Hash for Name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.0.to_ascii_lowercase().hash(state);
            }
        }

        let eq = |a: &Name, b: &Name| a.0.eq_ignore_ascii_case(&b.0);
        let mut store = EntryStore::with_capacity_and_hasher(4, Lower, eq);
        let key = Name("Alice".into());
        let hash = store.hash_key(&key);
        let id = store.insert_new(hash, key, 1u8, SlotId(0));

        assert_eq!(store.find(&Name("ALICE".into())), Some(id));
    }

    #[test]
    fn clear_empties_both_structures() {
        let mut store = store();
        put(&mut store, "a", 1);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.index_len(), 0);
        assert_eq!(store.next_occupied(None), None);
    }
}
