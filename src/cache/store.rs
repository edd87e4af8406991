//! Expiring Cache Module
//!
//! Main cache engine: a HashMap keyed by string with one shared TTL applied
//! lazily on read.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, Clock, SystemClock};

// == Expiring Cache ==
/// A process-local key-value store where each entry expires a fixed duration
/// after insertion.
///
/// Expiry is lazy: an entry past its TTL keeps occupying memory until the
/// next `get` of that exact key or an explicit [`clear`](Self::clear). There
/// is no background sweep and no size cap. All three operations are total;
/// the cache has no error type of its own.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Shared TTL in milliseconds, fixed at construction
    ttl_ms: u64,
    /// Time source for expiry checks
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ExpiringCache<V> {
    // == Constructor ==
    /// Creates a new ExpiringCache with the given TTL, reading wall-clock
    /// time from the system.
    ///
    /// # Arguments
    /// * `ttl` - Duration after which a stored entry is considered expired
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a new ExpiringCache with an injected time source.
    ///
    /// # Arguments
    /// * `ttl` - Duration after which a stored entry is considered expired
    /// * `clock` - Time source sampled on every write and read
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: ttl.as_millis() as u64,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key`, unconditionally.
    ///
    /// Any prior entry for the key is fully replaced, value and timestamp
    /// both, so the expiry clock restarts from this write.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves the value for `key`, if present and not expired.
    ///
    /// An entry found past its TTL is removed here and reported as absent;
    /// a miss is not an error.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now, self.ttl_ms) => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are physically stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == TTL ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    const TTL_MS: u64 = 1_800_000; // 30 minutes

    fn test_cache<V: Clone>() -> (ExpiringCache<V>, ManualClock) {
        let clock = ManualClock::new();
        let cache = ExpiringCache::with_clock(
            Duration::from_millis(TTL_MS),
            Arc::new(clock.clone()),
        );
        (cache, clock)
    }

    #[test]
    fn test_miss_before_set() {
        let (mut cache, _clock) = test_cache::<String>();

        assert_eq!(cache.get("never_written"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hit_within_ttl() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        assert_eq!(cache.get("london"), Some(15));

        clock.advance(TTL_MS - 1);
        assert_eq!(cache.get("london"), Some(15));
    }

    #[test]
    fn test_hit_at_exact_ttl() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        clock.advance(TTL_MS);

        assert_eq!(cache.get("london"), Some(15));
    }

    #[test]
    fn test_expiry_past_ttl() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        clock.advance(TTL_MS + 1);

        assert_eq!(cache.get("london"), None);
    }

    #[test]
    fn test_expired_entry_purged_on_read() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        clock.advance(TTL_MS + 1);
        assert_eq!(cache.len(), 1, "lazy expiry keeps the entry until read");

        assert_eq!(cache.get("london"), None);
        assert_eq!(cache.len(), 0, "expired entry is removed by the read");

        // Idempotent after expiry
        assert_eq!(cache.get("london"), None);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let (mut cache, _clock) = test_cache();

        cache.set("london", "v1");
        cache.set("london", "v2");

        assert_eq!(cache.get("london"), Some("v2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_restarts_expiry_clock() {
        let (mut cache, clock) = test_cache();

        cache.set("london", "v1");
        clock.advance(TTL_MS);
        cache.set("london", "v2");

        // Past the first write's deadline but within the second's
        clock.advance(TTL_MS);
        assert_eq!(cache.get("london"), Some("v2"));

        clock.advance(1);
        assert_eq!(cache.get("london"), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let (mut cache, _clock) = test_cache();

        cache.set("london", 15);
        cache.set("tokyo", 22);
        cache.set("paris", 18);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("london"), None);
        assert_eq!(cache.get("tokyo"), None);
        assert_eq!(cache.get("paris"), None);
    }

    #[test]
    fn test_entries_expire_independently() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        clock.advance(1_000_000);
        cache.set("tokyo", 22);

        // "london" crosses its deadline, "tokyo" does not
        clock.advance(TTL_MS - 1_000_000 + 1);
        assert_eq!(cache.get("london"), None);
        assert_eq!(cache.get("tokyo"), Some(22));
    }

    #[test]
    fn test_expiring_one_key_leaves_other_untouched() {
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);
        clock.advance(TTL_MS + 1);
        cache.set("tokyo", 22);

        // Reading the expired key purges it but must not disturb "tokyo"
        assert_eq!(cache.get("london"), None);
        assert_eq!(cache.get("tokyo"), Some(22));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_thirty_minute_ttl_scenario() {
        // set at t=0, live at t=1799s, absent at t=1801s, still absent after
        let (mut cache, clock) = test_cache();

        cache.set("london", 15);

        clock.set(1_799_000);
        assert_eq!(cache.get("london"), Some(15));

        clock.set(1_801_000);
        assert_eq!(cache.get("london"), None);
        assert_eq!(cache.get("london"), None);
    }

    #[test]
    fn test_system_clock_default_construction() {
        let mut cache: ExpiringCache<String> = ExpiringCache::new(Duration::from_secs(1800));

        cache.set("key", "value".to_string());
        assert_eq!(cache.get("key"), Some("value".to_string()));
        assert_eq!(cache.ttl(), Duration::from_secs(1800));
    }
}
