//! Single-slot memo of the most recently resolved entry.
//!
//! Holds a slot id, never a borrow. A hit must be confirmed by the caller:
//! the slot has to be occupied and its key equal to the probe under the
//! store's `KeyEqual`. The engine invalidates the memo whenever the entry it
//! names is removed, so a reused slot cannot masquerade as the old entry.

use std::cell::Cell;

use crate::ds::SlotId;

#[derive(Debug, Clone, Default)]
pub(crate) struct LastAccessed {
    slot: Cell<Option<SlotId>>,
}

impl LastAccessed {
    #[inline]
    pub(crate) fn get(&self) -> Option<SlotId> {
        self.slot.get()
    }

    #[inline]
    pub(crate) fn set(&self, id: SlotId) {
        self.slot.set(Some(id));
    }

    #[inline]
    pub(crate) fn invalidate(&self) {
        self.slot.set(None);
    }

    /// Clears the memo if it names `id`.
    #[inline]
    pub(crate) fn invalidate_if(&self, id: SlotId) {
        if self.slot.get() == Some(id) {
            self.slot.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_invalidate() {
        let memo = LastAccessed::default();
        assert_eq!(memo.get(), None);
        memo.set(SlotId(3));
        assert_eq!(memo.get(), Some(SlotId(3)));
        memo.invalidate();
        assert_eq!(memo.get(), None);
    }

    #[test]
    fn invalidate_if_only_matches_named_slot() {
        let memo = LastAccessed::default();
        memo.set(SlotId(1));
        memo.invalidate_if(SlotId(2));
        assert_eq!(memo.get(), Some(SlotId(1)));
        memo.invalidate_if(SlotId(1));
        assert_eq!(memo.get(), None);
    }
}
