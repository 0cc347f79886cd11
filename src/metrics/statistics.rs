//! Hit/miss accounting shared between a cache and its embedder.
//!
//! ```text
//!   ┌──────────────┐   Rc<Statistics<K>>   ┌────────────────────┐
//!   │   embedder   │ ◄───────────────────► │ Cache (monitor)    │
//!   └──────────────┘                       └────────────────────┘
//!           │                                       │
//!           ▼                                       ▼
//!   total_hits / hit_rate / stats_for(k)   register_hit / register_miss
//! ```
//!
//! Totals count every access. Per-key counters exist only for keys that
//! were registered with [`Statistics::monitor_key`] or
//! [`Statistics::with_keys`]; accesses to other keys only touch totals.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::cell::MetricsCell;
use super::snapshot::{ratio, KeyStatistics, StatisticsSnapshot};

/// Access counters, updated through `&self` so they can be shared via `Rc`.
pub struct Statistics<K> {
    hits: MetricsCell,
    misses: MetricsCell,
    keys: RefCell<FxHashMap<K, KeyStatistics>>,
}

impl<K> Statistics<K> {
    #[inline]
    pub fn total_hits(&self) -> u64 {
        self.hits.get()
    }

    #[inline]
    pub fn total_misses(&self) -> u64 {
        self.misses.get()
    }

    #[inline]
    pub fn total_accesses(&self) -> u64 {
        self.total_hits().saturating_add(self.total_misses())
    }

    /// Fraction of all accesses that hit; `0.0` before the first access.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.total_hits(), self.total_accesses())
    }

    pub fn miss_rate(&self) -> f64 {
        ratio(self.total_misses(), self.total_accesses())
    }

    pub fn monitored_keys_len(&self) -> usize {
        self.keys.borrow().len()
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            hits: self.total_hits(),
            misses: self.total_misses(),
            monitored_keys: self.monitored_keys_len(),
        }
    }

    /// Zeroes every counter. Monitored keys stay registered.
    pub fn reset(&self) {
        self.hits.reset();
        self.misses.reset();
        for counts in self.keys.borrow_mut().values_mut() {
            *counts = KeyStatistics::default();
        }
    }
}

impl<K> Statistics<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            hits: MetricsCell::new(),
            misses: MetricsCell::new(),
            keys: RefCell::new(FxHashMap::default()),
        }
    }

    /// Creates statistics with per-key counters for each of `keys`.
    pub fn with_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let stats = Self::new();
        stats
            .keys
            .borrow_mut()
            .extend(keys.into_iter().map(|key| (key, KeyStatistics::default())));
        stats
    }

    /// Starts per-key counting for `key`. Existing counters are kept.
    pub fn monitor_key(&self, key: K) {
        self.keys.borrow_mut().entry(key).or_default();
    }

    /// Stops per-key counting for `key`; returns `false` if it was not monitored.
    pub fn unmonitor_key(&self, key: &K) -> bool {
        self.keys.borrow_mut().remove(key).is_some()
    }

    pub fn is_monitoring_key(&self, key: &K) -> bool {
        self.keys.borrow().contains_key(key)
    }

    pub fn register_hit(&self, key: &K) {
        self.hits.incr();
        if let Some(counts) = self.keys.borrow_mut().get_mut(key) {
            counts.hits = counts.hits.saturating_add(1);
        }
    }

    pub fn register_miss(&self, key: &K) {
        self.misses.incr();
        if let Some(counts) = self.keys.borrow_mut().get_mut(key) {
            counts.misses = counts.misses.saturating_add(1);
        }
    }

    /// Hits recorded for a monitored key.
    pub fn hits_for(&self, key: &K) -> Option<u64> {
        self.stats_for(key).map(|counts| counts.hits)
    }

    pub fn misses_for(&self, key: &K) -> Option<u64> {
        self.stats_for(key).map(|counts| counts.misses)
    }

    pub fn stats_for(&self, key: &K) -> Option<KeyStatistics> {
        self.keys.borrow().get(key).copied()
    }
}

impl<K> fmt::Debug for Statistics<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statistics")
            .field("hits", &self.total_hits())
            .field("misses", &self.total_misses())
            .field("monitored_keys", &self.monitored_keys_len())
            .finish()
    }
}

impl<K> Default for Statistics<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for Statistics<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::with_keys(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod totals {
        use super::*;

        #[test]
        fn counts_every_access() {
            let stats: Statistics<&str> = Statistics::new();
            stats.register_hit(&"a");
            stats.register_hit(&"b");
            stats.register_miss(&"c");

            assert_eq!(stats.total_hits(), 2);
            assert_eq!(stats.total_misses(), 1);
            assert_eq!(stats.total_accesses(), 3);
            assert!((stats.hit_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
        }

        #[test]
        fn fresh_statistics_have_zero_rates() {
            let stats: Statistics<u32> = Statistics::new();
            assert_eq!(stats.hit_rate(), 0.0);
            assert_eq!(stats.miss_rate(), 0.0);
            assert_eq!(stats.snapshot(), StatisticsSnapshot::default());
        }
    }

    mod per_key {
        use super::*;

        #[test]
        fn only_monitored_keys_get_counters() {
            let stats = Statistics::with_keys(["a"]);
            stats.register_hit(&"a");
            stats.register_miss(&"a");
            stats.register_hit(&"b");

            assert_eq!(stats.hits_for(&"a"), Some(1));
            assert_eq!(stats.misses_for(&"a"), Some(1));
            assert_eq!(stats.hits_for(&"b"), None);
            assert_eq!(stats.total_hits(), 2);
        }

        #[test]
        fn monitor_and_unmonitor() {
            let stats: Statistics<u32> = Statistics::new();
            assert!(!stats.is_monitoring_key(&1));
            stats.monitor_key(1);
            stats.register_hit(&1);
            stats.monitor_key(1);

            assert!(stats.is_monitoring_key(&1));
            assert_eq!(stats.hits_for(&1), Some(1));
            assert_eq!(stats.monitored_keys_len(), 1);

            assert!(stats.unmonitor_key(&1));
            assert!(!stats.unmonitor_key(&1));
            assert_eq!(stats.stats_for(&1), None);
        }

        #[test]
        fn reset_keeps_registrations() {
            let stats: Statistics<u32> = [1, 2].into_iter().collect();
            stats.register_hit(&1);
            stats.register_miss(&2);
            stats.reset();

            assert_eq!(stats.total_accesses(), 0);
            assert_eq!(stats.stats_for(&1), Some(KeyStatistics::default()));
            assert_eq!(stats.monitored_keys_len(), 2);
        }
    }
}
