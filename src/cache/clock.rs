//! Clock Abstraction
//!
//! Injectable time source so expiry logic can be tested without real sleeps.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// == Clock Trait ==
/// A source of "now" in milliseconds.
///
/// Production code uses [`SystemClock`]; tests use [`ManualClock`] to advance
/// logical time deterministically.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Wall-clock time source backed by `SystemTime`.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }
}

// == Manual Clock ==
/// A logical clock that only moves when told to.
///
/// Cloning shares the underlying counter, so a test can keep a handle while
/// the cache holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a new ManualClock starting at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Sets the clock to an absolute time in milliseconds.
    pub fn set(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
