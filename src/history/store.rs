//! Search History Store
//!
//! Bounded in-memory log of successful weather lookups. The service keeps
//! this instead of a durable store; history is empty on every restart.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How many records the store physically retains.
pub const HISTORY_CAPACITY: usize = 100;

// == Search Record ==
/// One recorded weather lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecord {
    /// City that was looked up
    pub city: String,
    /// Temperature in °C at lookup time
    pub temperature: f64,
    /// Condition text at lookup time
    pub condition: String,
    /// When the lookup happened
    pub date: DateTime<Utc>,
}

impl SearchRecord {
    /// Creates a record stamped with the current time.
    pub fn new(city: impl Into<String>, temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            temperature,
            condition: condition.into(),
            date: Utc::now(),
        }
    }
}

// == History Store ==
/// Bounded FIFO of search records, newest at the back.
#[derive(Debug)]
pub struct HistoryStore {
    entries: VecDeque<SearchRecord>,
    capacity: usize,
}

impl HistoryStore {
    // == Constructor ==
    /// Creates an empty store retaining at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    // == Record ==
    /// Appends a record, dropping the oldest when over capacity.
    pub fn record(&mut self, record: SearchRecord) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    // == Recent ==
    /// Returns up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<SearchRecord> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    // == Clear ==
    /// Removes all records.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the number of retained records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
