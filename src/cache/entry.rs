//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with their bookkeeping
//! timestamps.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds), never changes
    pub date_added: i64,
    /// Last write timestamp (Unix milliseconds)
    pub date_modified: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            date_added: now,
            date_modified: now,
        }
    }

    // == Touch ==
    /// Replaces the value and refreshes `date_modified`.
    ///
    /// `date_modified` never moves backwards, even if the wall clock does.
    pub fn touch(&mut self, value: V) {
        self.value = value;
        self.date_modified = current_timestamp_ms().max(self.date_modified);
    }

    /// Milliseconds elapsed since the entry was created.
    pub fn age_ms(&self) -> u64 {
        u64::try_from(current_timestamp_ms() - self.date_added).unwrap_or(0)
    }

    /// Creation time as a UTC datetime.
    pub fn date_added_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_added)
    }

    /// Last write time as a UTC datetime.
    pub fn date_modified_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_modified)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
