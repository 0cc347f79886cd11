/// Point-in-time copy of a [`Statistics`](super::Statistics) instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    pub hits: u64,
    pub misses: u64,

    // gauge captured at snapshot time
    pub monitored_keys: usize,
}

impl StatisticsSnapshot {
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Fraction of accesses that hit, or `0.0` before any access.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.accesses())
    }

    pub fn miss_rate(&self) -> f64 {
        ratio(self.misses, self.accesses())
    }
}

/// Hit/miss counters for one monitored key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStatistics {
    pub hits: u64,
    pub misses: u64,
}

impl KeyStatistics {
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.accesses())
    }
}

pub(crate) fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
