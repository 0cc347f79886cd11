//! Doubly linked list whose nodes live in a [`SlotArena`].
//!
//! Links are [`SlotId`]s rather than pointers, so a node's id doubles as a
//! stable handle: the cache keeps it in the entry store and uses it as the
//! ordered position of that entry.
//!
//! ```text
//!   nodes: SlotArena<Node<T>>
//!
//!   head                                   tail
//!    │                                       │
//!    ▼                                       ▼
//!   [id 3] ──next──► [id 0] ──next──► [id 7]
//!          ◄──prev──        ◄──prev──
//! ```
//!
//! Every structural change goes through two primitives: `unlink` takes a
//! node out of the chain and `splice` threads it back in between two
//! neighbours. Both are O(1), and neither touches the id of any other node.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Links {
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug, Clone)]
struct Node<T> {
    links: Links,
    value: T,
}

/// Arena-backed doubly linked list with stable node ids.
#[derive(Debug, Clone)]
pub struct IntrusiveList<T> {
    nodes: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a live node of this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.nodes.contains(id)
    }

    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Successor of `id`, or `None` at the back or for a dead id.
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.links(id).next
    }

    /// Predecessor of `id`, or `None` at the front or for a dead id.
    pub fn prev_id(&self, id: SlotId) -> Option<SlotId> {
        self.links(id).prev
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            ids: self.iter_ids(),
        }
    }

    /// Node ids from front to back.
    pub fn iter_ids(&self) -> IdIter<'_, T> {
        IdIter {
            list: self,
            next: self.head,
        }
    }

    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.allocate(value);
        self.splice(id, None, self.head);
        id
    }

    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.allocate(value);
        self.splice(id, self.tail, None);
        id
    }

    /// Inserts `value` right after `anchor`.
    ///
    /// When `anchor` is not a live node the value is handed back untouched.
    pub fn insert_after(&mut self, anchor: SlotId, value: T) -> Result<SlotId, T> {
        if !self.contains(anchor) {
            return Err(value);
        }
        let id = self.allocate(value);
        self.splice(id, Some(anchor), self.next_id(anchor));
        Ok(id)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(self.head?)
    }

    /// Unlinks `id` and frees its slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id);
        self.nodes.remove(id).map(|node| node.value)
    }

    /// Returns `false` when `id` is not a live node.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.unlink(id);
            self.splice(id, None, self.head);
        }
        true
    }

    /// Returns `false` when `id` is not a live node.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.tail != Some(id) {
            self.unlink(id);
            self.splice(id, self.tail, None);
        }
        true
    }

    /// Relinks `id` directly behind `anchor`.
    ///
    /// Returns `false` if either id is dead or they are the same node.
    pub fn move_after(&mut self, id: SlotId, anchor: SlotId) -> bool {
        if id == anchor || !self.contains(id) || !self.contains(anchor) {
            return false;
        }
        if self.next_id(anchor) != Some(id) {
            self.unlink(id);
            self.splice(id, Some(anchor), self.next_id(anchor));
        }
        true
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn allocate(&mut self, value: T) -> SlotId {
        self.nodes.insert(Node {
            links: Links::default(),
            value,
        })
    }

    fn links(&self, id: SlotId) -> Links {
        self.nodes.get(id).map(|node| node.links).unwrap_or_default()
    }

    fn set_next(&mut self, at: Option<SlotId>, next: Option<SlotId>) {
        match at.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.links.next = next,
            None => self.head = next,
        }
    }

    fn set_prev(&mut self, at: Option<SlotId>, prev: Option<SlotId>) {
        match at.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.links.prev = prev,
            None => self.tail = prev,
        }
    }

    /// Threads a detached node between `prev` and `next`, which must be
    /// adjacent (or the matching list end when `None`).
    fn splice(&mut self, id: SlotId, prev: Option<SlotId>, next: Option<SlotId>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.links = Links { prev, next };
        }
        self.set_next(prev, Some(id));
        self.set_prev(next, Some(id));
    }

    fn unlink(&mut self, id: SlotId) {
        let Links { prev, next } = self.links(id);
        self.set_next(prev, next);
        self.set_prev(next, prev);
        if let Some(node) = self.nodes.get_mut(id) {
            node.links = Links::default();
        }
    }

    /// Walks the chain and panics unless it is acyclic, doubly linked in
    /// both directions and covers every live node.
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        let mut expected_prev = None;
        let mut walked = 0usize;
        for id in self.iter_ids() {
            walked += 1;
            assert!(walked <= self.len(), "cycle in list");
            assert_eq!(self.prev_id(id), expected_prev);
            expected_prev = Some(id);
        }
        assert_eq!(self.tail, expected_prev);
        assert_eq!(walked, self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Values of an [`IntrusiveList`] from front to back.
pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    ids: IdIter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        self.list.get(id)
    }
}

/// Node ids of an [`IntrusiveList`] from front to back.
pub struct IdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    next: Option<SlotId>,
}

impl<T> Iterator for IdIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.list.next_id(id);
        Some(id)
    }
}
