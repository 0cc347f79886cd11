pub use crate::builder::CacheBuilder;
pub use crate::cache::{
    Cache, CacheCursor, InsertionResult, OrderedCursor, OrderedCursorMut, OrderedPosition,
    UnorderedCursor, UnorderedCursorMut, UnorderedPosition,
};
pub use crate::error::{CacheError, InvariantError};
pub use crate::metrics::{KeyStatistics, Statistics, StatisticsSnapshot};
pub use crate::policy::lfu::{Lfu, LfuCache};
pub use crate::policy::lru::{Lru, LruCache};
pub use crate::traits::{DefaultKeyEqual, EvictionPolicy, KeyEqual};
