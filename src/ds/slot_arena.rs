//! Slot arena with stable `SlotId` handles.
//!
//! Values live in a `Vec<Option<T>>`; freed slots go on a free list and are
//! reused by later inserts. A `SlotId` stays valid until its own slot is
//! removed, regardless of how many other slots are inserted or removed.
//!
//! ```text
//!   slots:     [Some(a)] [None] [Some(c)] [Some(d)]
//!   free_list: [1]
//!   insert(e) -> reuses slot 1
//! ```
//!
//! Slot order (index order, skipping empty slots) is the arena's native
//! traversal order and is what `iter`/`next_occupied` expose.

/// Stable handle to an arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of optional slots with free-list reuse.
#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value`, reusing a freed slot when one is available.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Returns the first occupied slot strictly after `after`, or the first
    /// occupied slot overall when `after` is `None`.
    pub fn next_occupied(&self, after: Option<SlotId>) -> Option<SlotId> {
        let start = after.map(|id| id.0 + 1).unwrap_or(0);
        self.slots
            .get(start..)?
            .iter()
            .position(|slot| slot.is_some())
            .map(|offset| SlotId(start + offset))
    }

    /// Iterates occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }

    /// Iterates occupied slots mutably in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_mut().map(|value| (SlotId(idx), value)))
    }

    /// Slot buffer in index order, holes included.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.remove(id1), None);

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
    }

    #[test]
    fn slot_arena_handles_survive_unrelated_removals() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..8).map(|i| arena.insert(i)).collect();
        for id in ids.iter().step_by(2) {
            arena.remove(*id);
        }
        for (i, id) in ids.iter().enumerate().skip(1).step_by(2) {
            assert_eq!(arena.get(*id), Some(&i));
        }
    }

    #[test]
    fn slot_arena_next_occupied_skips_holes() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);

        assert_eq!(arena.next_occupied(None), Some(a));
        assert_eq!(arena.next_occupied(Some(a)), Some(c));
        assert_eq!(arena.next_occupied(Some(c)), None);

        arena.remove(a);
        assert_eq!(arena.next_occupied(None), Some(c));
    }

    #[test]
    fn slot_arena_iter_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        arena.insert(1);
        let gone = arena.insert(2);
        arena.insert(3);
        arena.remove(gone);

        for (_, value) in arena.iter_mut() {
            *value *= 10;
        }
        let values: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![10, 30]);
    }

    #[test]
    fn slot_arena_clear_resets_state() {
        let mut arena = SlotArena::new();
        let id = arena.insert(5);
        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(id));
        assert_eq!(arena.next_occupied(None), None);
    }
}
