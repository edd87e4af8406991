//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// A stored value together with its insertion timestamp.
///
/// The entry itself carries no TTL; the owning cache applies one shared TTL
/// to every entry at read time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp in milliseconds
    pub inserted_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry inserted at `now_ms`.
    pub fn new(value: V, now_ms: u64) -> Self {
        Self {
            value,
            inserted_at: now_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms` as of `now_ms`.
    ///
    /// Boundary condition: an entry is live while the elapsed time is less
    /// than or equal to the TTL, and expired once it is strictly greater.
    /// An entry written 1800s ago with a 1800s TTL is still live; at 1801s
    /// it is gone.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at) > ttl_ms
    }

    // == Age ==
    /// Returns milliseconds elapsed since insertion as of `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }
}
