//! Borrowing iterators over cache entries.
//!
//! [`Iter`]/[`IterMut`] walk store order; [`OrderedIter`]/[`OrderedIterMut`]
//! walk policy order from the next victim to the most recently promoted
//! entry, and can be reversed. None of them touch recency or statistics.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice;

use crate::ds::{SlotArena, SlotId};
use crate::policy::OrderQueue;
use crate::store::Entry;

// ---------------------------------------------------------------------------
// Store order
// ---------------------------------------------------------------------------

/// Entries in store order.
pub struct Iter<'a, K, V> {
    slots: slice::Iter<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(entries: &'a SlotArena<Entry<K, V>>) -> Self {
        Self {
            slots: entries.slots().iter(),
            remaining: entries.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(|slot| slot.as_ref())?;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

/// Entries in store order with mutable values.
pub struct IterMut<'a, K, V> {
    slots: slice::IterMut<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(entries: &'a mut SlotArena<Entry<K, V>>) -> Self {
        let remaining = entries.len();
        Self {
            slots: entries.slots_mut().iter_mut(),
            remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(|slot| slot.as_mut())?;
        self.remaining -= 1;
        Some((&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Keys in store order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Values in store order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

// ---------------------------------------------------------------------------
// Policy order
// ---------------------------------------------------------------------------

/// Entries in policy order, front (next victim) first.
pub struct OrderedIter<'a, K, V, M> {
    order: &'a OrderQueue<M>,
    entries: &'a SlotArena<Entry<K, V>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V, M> OrderedIter<'a, K, V, M> {
    pub(crate) fn new(order: &'a OrderQueue<M>, entries: &'a SlotArena<Entry<K, V>>) -> Self {
        Self {
            order,
            entries,
            front: order.front_id(),
            back: order.back_id(),
            remaining: order.len(),
        }
    }

    fn entry_at(&self, handle: SlotId) -> Option<(&'a K, &'a V)> {
        let entry = self.entries.get(self.order.get(handle)?.entry())?;
        Some((&entry.key, &entry.value))
    }
}

impl<'a, K, V, M> Iterator for OrderedIter<'a, K, V, M> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.order.next_id(handle);
        self.remaining -= 1;
        self.entry_at(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, M> DoubleEndedIterator for OrderedIter<'_, K, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.order.prev_id(handle);
        self.remaining -= 1;
        self.entry_at(handle)
    }
}

impl<K, V, M> ExactSizeIterator for OrderedIter<'_, K, V, M> {}
impl<K, V, M> FusedIterator for OrderedIter<'_, K, V, M> {}

impl<K, V, M> Clone for OrderedIter<'_, K, V, M> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Entries in policy order with mutable values.
pub struct OrderedIterMut<'a, K, V, M> {
    order: &'a OrderQueue<M>,
    slots: *mut Option<Entry<K, V>>,
    slots_len: usize,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
    _marker: PhantomData<&'a mut Entry<K, V>>,
}

impl<'a, K, V, M> OrderedIterMut<'a, K, V, M> {
    pub(crate) fn new(order: &'a OrderQueue<M>, entries: &'a mut SlotArena<Entry<K, V>>) -> Self {
        let slots = entries.slots_mut();
        Self {
            order,
            slots_len: slots.len(),
            slots: slots.as_mut_ptr(),
            front: order.front_id(),
            back: order.back_id(),
            remaining: order.len(),
            _marker: PhantomData,
        }
    }

    fn entry_at(&mut self, handle: SlotId) -> Option<(&'a K, &'a mut V)> {
        let idx = self.order.get(handle)?.entry().index();
        if idx >= self.slots_len {
            return None;
        }
        // SAFETY: `idx` is in bounds and the slot buffer is exclusively
        // borrowed for 'a. Each order node names a distinct entry slot and
        // `remaining` stops the front and back walks before they cross, so
        // every slot is handed out at most once.
        let slot = unsafe { &mut *self.slots.add(idx) };
        let entry = slot.as_mut()?;
        Some((&entry.key, &mut entry.value))
    }
}

impl<'a, K, V, M> Iterator for OrderedIterMut<'a, K, V, M> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.order.next_id(handle);
        self.remaining -= 1;
        self.entry_at(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, M> DoubleEndedIterator for OrderedIterMut<'_, K, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.order.prev_id(handle);
        self.remaining -= 1;
        self.entry_at(handle)
    }
}

impl<K, V, M> ExactSizeIterator for OrderedIterMut<'_, K, V, M> {}
impl<K, V, M> FusedIterator for OrderedIterMut<'_, K, V, M> {}
