//! Configuration Module
//!
//! Immutable cache configuration, built once and handed to the store.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default maximum number of entries
pub const DEFAULT_SIZE: i64 = 100;

/// Default time-to-live in seconds
pub const DEFAULT_TTL: i64 = 3600;

/// Cache configuration parameters.
///
/// Missing fields fall back to their defaults when deserialized, so a partial
/// options object such as `{"size": 10}` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries; any negative value means unlimited
    pub size: i64,
    /// Global time-to-live in seconds. Stored but never used to expire
    /// entries; negative means none.
    pub ttl: i64,
}

impl CacheConfig {
    /// Creates a configuration with explicit values.
    pub fn new(size: i64, ttl: i64) -> Self {
        Self { size, ttl }
    }

    /// Configuration with no entry limit.
    pub fn unlimited() -> Self {
        Self {
            size: -1,
            ..Self::default()
        }
    }

    /// Parses a JSON options object, e.g. `{"size": 2, "ttl": 60}`.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    // == Limit ==
    /// Maximum entry count, or `None` when the cache is unbounded.
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.size).ok()
    }

    // == TTL ==
    /// Configured time-to-live, or `None` when negative.
    pub fn ttl(&self) -> Option<Duration> {
        u64::try_from(self.ttl).ok().map(Duration::from_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            ttl: DEFAULT_TTL,
        }
    }
}
