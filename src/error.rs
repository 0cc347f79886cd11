//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by cache operations that cannot produce a
//!   result (absent key on `lookup`, statistics read while detached).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::CacheError;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(2);
//! cache.insert("a", 1);
//!
//! assert_eq!(cache.lookup(&"a"), Ok(&1));
//! assert_eq!(cache.lookup(&"b"), Err(CacheError::KeyNotFound));
//! assert_eq!(cache.statistics().err(), Some(CacheError::NotMonitoring));
//! ```

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by fallible cache operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheError {
    /// `lookup` (or indexed access) on a key that is not cached.
    #[error("key not found in cache")]
    KeyNotFound,
    /// Statistics were requested but no monitor is attached.
    #[error("cache is not being monitored")]
    NotMonitoring,
}

/// Result alias for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`Cache::check_invariants`](crate::cache::Cache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- CacheError -------------------------------------------------------

    #[test]
    fn cache_error_display() {
        assert_eq!(CacheError::KeyNotFound.to_string(), "key not found in cache");
        assert_eq!(
            CacheError::NotMonitoring.to_string(),
            "cache is not being monitored"
        );
    }

    #[test]
    fn cache_error_kinds_are_distinguishable() {
        assert_ne!(CacheError::KeyNotFound, CacheError::NotMonitoring);
    }

    #[test]
    fn cache_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CacheError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("queue length mismatch");
        assert_eq!(err.to_string(), "queue length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
