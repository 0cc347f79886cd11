//! Positions and cursors over the two traversal orders of a cache.
//!
//! ```text
//!   unordered (store slot order)         ordered (policy order)
//!   ─────────────────────────────        ───────────────────────────────
//!   UnorderedPosition = slot id          OrderedPosition = order-node id
//!
//!   UnorderedCursor ──to_ordered()──►  OrderedCursor
//!          ▲                                  │
//!          └─────────to_unordered()───────────┘
//!   (same for the `Mut` variants via into_ordered / into_unordered)
//! ```
//!
//! Positions are plain `Copy` handles. A position keeps naming its entry
//! while other entries are inserted or removed; once its own entry is
//! removed the position is stale and may resolve to nothing or to a later
//! entry that reuses the slot.
//!
//! Cursors borrow the cache. Shared cursors are `Copy`; mutable cursors
//! hold the only borrow and can edit values or remove the current entry.

use std::fmt;
use std::ptr;

use crate::ds::SlotId;
use crate::traits::EvictionPolicy;

use super::Cache;

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Handle to an entry in store order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnorderedPosition(Option<SlotId>);

impl UnorderedPosition {
    /// One past the last entry.
    pub const END: Self = Self(None);

    #[inline]
    pub(crate) fn at(id: SlotId) -> Self {
        Self(Some(id))
    }

    #[inline]
    pub(crate) fn slot(self) -> Option<SlotId> {
        self.0
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.0.is_none()
    }
}

/// Handle to an entry in policy order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderedPosition(Option<SlotId>);

impl OrderedPosition {
    /// One past the most recently promoted entry.
    pub const END: Self = Self(None);

    #[inline]
    pub(crate) fn at(handle: SlotId) -> Self {
        Self(Some(handle))
    }

    #[inline]
    pub(crate) fn node(self) -> Option<SlotId> {
        self.0
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.0.is_none()
    }
}

// ---------------------------------------------------------------------------
// CacheCursor
// ---------------------------------------------------------------------------

/// Operations shared by every cursor type.
pub trait CacheCursor {
    type Key;
    type Value;

    /// Key at the cursor, or `None` at the end (or on a stale position).
    fn key(&self) -> Option<&Self::Key>;

    fn value(&self) -> Option<&Self::Value>;

    /// Advances one entry; an end cursor stays at the end.
    fn move_next(&mut self);

    /// `true` when the cursor does not name a live entry.
    fn is_end(&self) -> bool;

    fn entry(&self) -> Option<(&Self::Key, &Self::Value)> {
        Some((self.key()?, self.value()?))
    }
}

// Position arithmetic shared by every cursor flavor.

fn slot_after<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: UnorderedPosition) -> UnorderedPosition
where
    P: EvictionPolicy,
{
    match pos.slot() {
        None => UnorderedPosition::END,
        Some(id) => cache
            .store
            .next_occupied(Some(id))
            .map_or(UnorderedPosition::END, UnorderedPosition::at),
    }
}

fn node_after<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: OrderedPosition) -> OrderedPosition
where
    P: EvictionPolicy,
{
    match pos.node() {
        None => OrderedPosition::END,
        Some(h) => cache
            .order
            .next_id(h)
            .map_or(OrderedPosition::END, OrderedPosition::at),
    }
}

fn node_before<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: OrderedPosition) -> OrderedPosition
where
    P: EvictionPolicy,
{
    let prev = match pos.node() {
        None => cache.order.back_id(),
        Some(h) => cache.order.prev_id(h),
    };
    prev.map_or(OrderedPosition::END, OrderedPosition::at)
}

fn entry_slot_of<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: OrderedPosition) -> Option<SlotId>
where
    P: EvictionPolicy,
{
    cache.order.get(pos.node()?).map(|node| node.entry())
}

fn ordered_of<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: UnorderedPosition) -> OrderedPosition
where
    P: EvictionPolicy,
{
    pos.slot()
        .and_then(|id| cache.store.get(id))
        .map_or(OrderedPosition::END, |entry| OrderedPosition::at(entry.handle))
}

fn unordered_of<K, V, P, S, E>(cache: &Cache<K, V, P, S, E>, pos: OrderedPosition) -> UnorderedPosition
where
    P: EvictionPolicy,
{
    entry_slot_of(cache, pos).map_or(UnorderedPosition::END, UnorderedPosition::at)
}

// ---------------------------------------------------------------------------
// UnorderedCursor
// ---------------------------------------------------------------------------

/// Read-only cursor in store order.
pub struct UnorderedCursor<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    cache: &'a Cache<K, V, P, S, E>,
    pos: UnorderedPosition,
}

impl<'a, K, V, P, S, E> UnorderedCursor<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    pub(crate) fn new(cache: &'a Cache<K, V, P, S, E>, pos: UnorderedPosition) -> Self {
        Self { cache, pos }
    }

    #[inline]
    pub fn position(&self) -> UnorderedPosition {
        self.pos
    }

    /// Same entry, viewed in policy order.
    pub fn to_ordered(&self) -> OrderedCursor<'a, K, V, P, S, E> {
        OrderedCursor::new(self.cache, ordered_of(self.cache, self.pos))
    }

    /// Entry with the cache's lifetime rather than the cursor's.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let entry = self.cache.store.get(self.pos.slot()?)?;
        Some((&entry.key, &entry.value))
    }
}

impl<K, V, P, S, E> CacheCursor for UnorderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Key = K;
    type Value = V;

    fn key(&self) -> Option<&K> {
        self.get().map(|(k, _)| k)
    }

    fn value(&self) -> Option<&V> {
        self.get().map(|(_, v)| v)
    }

    fn move_next(&mut self) {
        self.pos = slot_after(self.cache, self.pos);
    }

    fn is_end(&self) -> bool {
        self.get().is_none()
    }
}

impl<K, V, P, S, E> Clone for UnorderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, P, S, E> Copy for UnorderedCursor<'_, K, V, P, S, E> where P: EvictionPolicy {}

impl<K, V, P, S, E> PartialEq for UnorderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.cache, other.cache) && self.pos == other.pos
    }
}

impl<K, V, P, S, E> Eq for UnorderedCursor<'_, K, V, P, S, E> where P: EvictionPolicy {}

impl<K, V, P, S, E> fmt::Debug for UnorderedCursor<'_, K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedCursor")
            .field("position", &self.pos)
            .field("entry", &self.get())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// OrderedCursor
// ---------------------------------------------------------------------------

/// Read-only cursor in policy order (front = next victim).
pub struct OrderedCursor<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    cache: &'a Cache<K, V, P, S, E>,
    pos: OrderedPosition,
}

impl<'a, K, V, P, S, E> OrderedCursor<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    pub(crate) fn new(cache: &'a Cache<K, V, P, S, E>, pos: OrderedPosition) -> Self {
        Self { cache, pos }
    }

    #[inline]
    pub fn position(&self) -> OrderedPosition {
        self.pos
    }

    /// Steps towards the front. From the end this lands on the back entry;
    /// from the front it becomes the end.
    pub fn move_prev(&mut self) {
        self.pos = node_before(self.cache, self.pos);
    }

    /// Same entry, viewed in store order.
    pub fn to_unordered(&self) -> UnorderedCursor<'a, K, V, P, S, E> {
        UnorderedCursor::new(self.cache, unordered_of(self.cache, self.pos))
    }

    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let entry = self.cache.store.get(entry_slot_of(self.cache, self.pos)?)?;
        Some((&entry.key, &entry.value))
    }
}

impl<K, V, P, S, E> CacheCursor for OrderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Key = K;
    type Value = V;

    fn key(&self) -> Option<&K> {
        self.get().map(|(k, _)| k)
    }

    fn value(&self) -> Option<&V> {
        self.get().map(|(_, v)| v)
    }

    fn move_next(&mut self) {
        self.pos = node_after(self.cache, self.pos);
    }

    fn is_end(&self) -> bool {
        self.get().is_none()
    }
}

impl<K, V, P, S, E> Clone for OrderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, P, S, E> Copy for OrderedCursor<'_, K, V, P, S, E> where P: EvictionPolicy {}

impl<K, V, P, S, E> PartialEq for OrderedCursor<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.cache, other.cache) && self.pos == other.pos
    }
}

impl<K, V, P, S, E> Eq for OrderedCursor<'_, K, V, P, S, E> where P: EvictionPolicy {}

impl<K, V, P, S, E> fmt::Debug for OrderedCursor<'_, K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCursor")
            .field("position", &self.pos)
            .field("entry", &self.get())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// UnorderedCursorMut
// ---------------------------------------------------------------------------

/// Mutable cursor in store order.
pub struct UnorderedCursorMut<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    cache: &'a mut Cache<K, V, P, S, E>,
    pos: UnorderedPosition,
}

impl<'a, K, V, P, S, E> UnorderedCursorMut<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    pub(crate) fn new(cache: &'a mut Cache<K, V, P, S, E>, pos: UnorderedPosition) -> Self {
        Self { cache, pos }
    }

    #[inline]
    pub fn position(&self) -> UnorderedPosition {
        self.pos
    }

    /// Mutable access to the current value. Does not change recency.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let id = self.pos.slot()?;
        self.cache.store.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Removes the current entry and advances to the next one in store
    /// order. Returns `None` (and stays put) at the end.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let id = self.pos.slot()?;
        let next = slot_after(&*self.cache, self.pos);
        let removed = self.cache.remove_slot(id)?;
        self.pos = next;
        Some(removed)
    }

    /// Shared view at the same position.
    pub fn as_cursor(&self) -> UnorderedCursor<'_, K, V, P, S, E> {
        UnorderedCursor::new(&*self.cache, self.pos)
    }

    pub fn into_ordered(self) -> OrderedCursorMut<'a, K, V, P, S, E> {
        let pos = ordered_of(&*self.cache, self.pos);
        OrderedCursorMut::new(self.cache, pos)
    }
}

impl<K, V, P, S, E> CacheCursor for UnorderedCursorMut<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Key = K;
    type Value = V;

    fn key(&self) -> Option<&K> {
        self.cache.store.get(self.pos.slot()?).map(|entry| &entry.key)
    }

    fn value(&self) -> Option<&V> {
        self.cache.store.get(self.pos.slot()?).map(|entry| &entry.value)
    }

    fn move_next(&mut self) {
        self.pos = slot_after(&*self.cache, self.pos);
    }

    fn is_end(&self) -> bool {
        self.key().is_none()
    }
}

impl<K, V, P, S, E> PartialEq for UnorderedCursorMut<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(&*self.cache, &*other.cache) && self.pos == other.pos
    }
}

impl<K, V, P, S, E> fmt::Debug for UnorderedCursorMut<'_, K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedCursorMut")
            .field("position", &self.pos)
            .field("entry", &self.entry())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// OrderedCursorMut
// ---------------------------------------------------------------------------

/// Mutable cursor in policy order.
pub struct OrderedCursorMut<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    cache: &'a mut Cache<K, V, P, S, E>,
    pos: OrderedPosition,
}

impl<'a, K, V, P, S, E> OrderedCursorMut<'a, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    pub(crate) fn new(cache: &'a mut Cache<K, V, P, S, E>, pos: OrderedPosition) -> Self {
        Self { cache, pos }
    }

    #[inline]
    pub fn position(&self) -> OrderedPosition {
        self.pos
    }

    pub fn move_prev(&mut self) {
        self.pos = node_before(&*self.cache, self.pos);
    }

    /// Mutable access to the current value. Does not change recency.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let id = entry_slot_of(&*self.cache, self.pos)?;
        self.cache.store.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Removes the current entry and advances towards the back.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let id = entry_slot_of(&*self.cache, self.pos)?;
        let next = node_after(&*self.cache, self.pos);
        let removed = self.cache.remove_slot(id)?;
        self.pos = next;
        Some(removed)
    }

    pub fn as_cursor(&self) -> OrderedCursor<'_, K, V, P, S, E> {
        OrderedCursor::new(&*self.cache, self.pos)
    }

    pub fn into_unordered(self) -> UnorderedCursorMut<'a, K, V, P, S, E> {
        let pos = unordered_of(&*self.cache, self.pos);
        UnorderedCursorMut::new(self.cache, pos)
    }
}

impl<K, V, P, S, E> CacheCursor for OrderedCursorMut<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    type Key = K;
    type Value = V;

    fn key(&self) -> Option<&K> {
        let id = entry_slot_of(&*self.cache, self.pos)?;
        self.cache.store.get(id).map(|entry| &entry.key)
    }

    fn value(&self) -> Option<&V> {
        let id = entry_slot_of(&*self.cache, self.pos)?;
        self.cache.store.get(id).map(|entry| &entry.value)
    }

    fn move_next(&mut self) {
        self.pos = node_after(&*self.cache, self.pos);
    }

    fn is_end(&self) -> bool {
        self.key().is_none()
    }
}

impl<K, V, P, S, E> PartialEq for OrderedCursorMut<'_, K, V, P, S, E>
where
    P: EvictionPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(&*self.cache, &*other.cache) && self.pos == other.pos
    }
}

impl<K, V, P, S, E> fmt::Debug for OrderedCursorMut<'_, K, V, P, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCursorMut")
            .field("position", &self.pos)
            .field("entry", &self.entry())
            .finish()
    }
}
