//! Cache Module
//!
//! Provides an in-memory key-value cache with lazy TTL expiration.

mod clock;
mod entry;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use store::ExpiringCache;
