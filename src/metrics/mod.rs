//! Access statistics for monitored caches.
//!
//! A cache records hits and misses into a [`Statistics`] instance only while
//! one is attached via [`Cache::monitor`](crate::cache::Cache::monitor).
//! The instance is reference counted so the embedder can keep reading it.

pub mod cell;
pub(crate) mod monitor;
pub mod snapshot;
pub mod statistics;

pub use snapshot::{KeyStatistics, StatisticsSnapshot};
pub use statistics::Statistics;
