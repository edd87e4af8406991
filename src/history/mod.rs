//! History Module
//!
//! In-memory search history for the weather lookup endpoints.

mod store;

pub use store::{HistoryStore, SearchRecord, HISTORY_CAPACITY};
