//! Mini Cache - A bounded in-process key-value cache
//!
//! Stores values under string keys up to a fixed entry count, stamping each
//! entry with its creation and last-write times. Writes are rejected, never
//! evicted, once the cache is full.

pub mod cache;
pub mod config;
pub mod error;
pub mod shell;

pub use cache::{CacheEntry, CacheStore, SharedCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
