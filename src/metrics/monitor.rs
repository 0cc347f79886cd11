use std::hash::Hash;
use std::rc::Rc;

use super::statistics::Statistics;

/// Optional attachment point for shared [`Statistics`].
///
/// Detached, every registration is a single `Option` check.
pub(crate) struct Monitor<K> {
    stats: Option<Rc<Statistics<K>>>,
}

impl<K> Monitor<K> {
    #[inline]
    pub(crate) fn detached() -> Self {
        Self { stats: None }
    }

    pub(crate) fn attach(&mut self, stats: Rc<Statistics<K>>) {
        self.stats = Some(stats);
    }

    pub(crate) fn detach(&mut self) -> Option<Rc<Statistics<K>>> {
        self.stats.take()
    }

    #[inline]
    pub(crate) fn is_attached(&self) -> bool {
        self.stats.is_some()
    }

    #[inline]
    pub(crate) fn stats(&self) -> Option<&Statistics<K>> {
        self.stats.as_deref()
    }
}

impl<K> Monitor<K>
where
    K: Eq + Hash,
{
    #[inline]
    pub(crate) fn register_hit(&self, key: &K) {
        if let Some(stats) = &self.stats {
            stats.register_hit(key);
        }
    }

    #[inline]
    pub(crate) fn register_miss(&self, key: &K) {
        if let Some(stats) = &self.stats {
            stats.register_miss(key);
        }
    }
}

impl<K> Clone for Monitor<K> {
    fn clone(&self) -> Self {
        Self {
            stats: self.stats.clone(),
        }
    }
}

impl<K> Default for Monitor<K> {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_monitor_ignores_accesses() {
        let monitor: Monitor<u32> = Monitor::detached();
        monitor.register_hit(&1);
        assert!(!monitor.is_attached());
        assert!(monitor.stats().is_none());
    }

    #[test]
    fn attached_monitor_shares_counters() {
        let stats = Rc::new(Statistics::new());
        let mut monitor = Monitor::detached();
        monitor.attach(Rc::clone(&stats));
        monitor.register_hit(&"k");
        monitor.register_miss(&"k");

        assert_eq!(stats.total_hits(), 1);
        assert_eq!(stats.total_misses(), 1);

        let detached = monitor.detach();
        assert!(detached.is_some());
        monitor.register_hit(&"k");
        assert_eq!(stats.total_hits(), 1);
    }
}
