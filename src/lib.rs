//! lrukit: a bounded in-memory cache engine with pluggable eviction order.
//!
//! One generic engine, [`Cache`](cache::Cache), combines a hash-indexed
//! entry store with an order queue managed by an [`EvictionPolicy`]. The
//! crate ships least-recently-written ([`LruCache`]) and
//! least-frequently-written ([`LfuCache`]) front-ends.
//!
//! ```text
//!   ┌───────────┐   ┌──────────────┐   ┌─────────────┐   ┌───────────┐
//!   │  builder  │──►│    cache     │──►│   policy    │──►│    ds     │
//!   │  config   │   │ engine,      │   │ lru / lfu   │   │ arena,    │
//!   └───────────┘   │ cursors,     │   └─────────────┘   │ intrusive │
//!                   │ iterators    │──►┌─────────────┐──►│ list      │
//!                   └──────┬───────┘   │    store    │   └───────────┘
//!                          ▼           └─────────────┘
//!                   ┌──────────────┐
//!                   │   metrics    │
//!                   └──────────────┘
//! ```
//!
//! The engine is single-threaded. It keeps `Cell` and `Rc` state, so it is
//! neither `Send` nor `Sync`; embedders keep each cache on the thread that
//! owns it (for example in a `thread_local!`).
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache: LruCache<&str, u32> = LruCache::new(2);
//! assert!(cache.insert("a", 1).was_inserted());
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.lookup(&"c"), Ok(&3));
//! assert_eq!(cache.len(), 2);
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod traits;

pub use cache::Cache;
pub use error::{CacheError, Result};
pub use policy::lfu::LfuCache;
pub use policy::lru::LruCache;
pub use traits::EvictionPolicy;
