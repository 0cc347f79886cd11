//! Eviction-order policies and the shared order queue they operate on.
//!
//! Every cache keeps one [`OrderQueue`]: an [`IntrusiveList`] whose nodes
//! name an entry-store slot and carry the policy's metadata. Policies only
//! move nodes around; the engine owns all entries.
//!
//! | Module  | Policy | Front-end alias |
//! |---------|--------|-----------------|
//! | [`lru`] | [`Lru`](lru::Lru) | [`LruCache`](lru::LruCache) |
//! | [`lfu`] | [`Lfu`](lfu::Lfu) | [`LfuCache`](lfu::LfuCache) |

pub mod lfu;
pub mod lru;

use crate::ds::{IntrusiveList, SlotId};

/// Order-queue node: the owning entry's store slot plus policy metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNode<M> {
    entry: SlotId,
    /// Policy-defined ordering metadata.
    pub meta: M,
}

impl<M> OrderNode<M> {
    pub fn new(entry: SlotId, meta: M) -> Self {
        Self { entry, meta }
    }

    /// Store slot of the entry this node orders.
    #[inline]
    pub fn entry(&self) -> SlotId {
        self.entry
    }
}

/// Queue shared by the engine and its policy; front is the eviction end.
pub type OrderQueue<M> = IntrusiveList<OrderNode<M>>;

pub use lfu::{Lfu, LfuCache};
pub use lru::{Lru, LruCache};
