//! Cache Store Module
//!
//! Main cache engine: a bounded HashMap of timestamped entries with
//! overwrite (`set`) and insert-only (`add`) writes.

use serde_json::Value;
use tracing::{debug, info};

use crate::cache::helpers::{self, Storage};
use crate::cache::CacheEntry;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value storage that rejects new keys once full.
///
/// The store has no internal locking; wrap it in a
/// [`SharedCache`](crate::cache::SharedCache) to use it from several tasks.
#[derive(Debug)]
pub struct CacheStore<V = Value> {
    /// Immutable configuration
    config: CacheConfig,
    /// Key-value storage
    storage: Storage<V>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store governed by `config`.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            storage: Storage::new(),
        }
    }

    // == Set ==
    /// Stores a value, overwriting any existing entry for `key`.
    ///
    /// Returns `false` if the store is full and `key` is new, if the key is
    /// not cacheable, or if `value` is `None`.
    pub fn set(&mut self, key: &str, value: impl Into<Option<V>>) -> bool {
        self.try_set(key, value).is_ok()
    }

    /// Like [`set`](Self::set), reporting why a write was rejected.
    ///
    /// Overwriting keeps `date_added` and refreshes `date_modified`. Updates
    /// to an existing key never count against capacity.
    pub fn try_set(&mut self, key: &str, value: impl Into<Option<V>>) -> Result<()> {
        let value = self.admit(key, value.into())?;

        if let Some(entry) = self.storage.get_mut(key) {
            entry.touch(value);
            debug!(key, "cache entry overwritten");
        } else {
            self.storage
                .insert(key.to_string(), helpers::format_new_entry(value));
            debug!(key, total = self.storage.len(), "cache entry inserted");
        }

        Ok(())
    }

    // == Add ==
    /// Stores a value only if `key` is absent.
    pub fn add(&mut self, key: &str, value: impl Into<Option<V>>) -> bool {
        self.try_add(key, value).is_ok()
    }

    /// Like [`add`](Self::add), reporting why a write was rejected.
    pub fn try_add(&mut self, key: &str, value: impl Into<Option<V>>) -> Result<()> {
        let value = self.admit(key, value.into())?;

        if self.storage.contains_key(key) {
            return Err(Self::rejected(key, CacheError::KeyExists(key.to_string())));
        }

        self.storage
            .insert(key.to_string(), helpers::format_new_entry(value));
        debug!(key, total = self.storage.len(), "cache entry added");

        Ok(())
    }

    // == Remove ==
    /// Deletes the entry for `key`. Returns `false` if it was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        self.try_remove(key).is_ok()
    }

    /// Deletes the entry for `key` and hands it back.
    pub fn try_remove(&mut self, key: &str) -> Result<CacheEntry<V>> {
        match self.storage.remove(key) {
            Some(entry) => {
                debug!(key, total = self.storage.len(), "cache entry removed");
                Ok(entry)
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Flush ==
    /// Drops every entry. Always succeeds.
    pub fn flush(&mut self) -> bool {
        let dropped = self.storage.len();
        self.storage.clear();
        info!(dropped, "cache flushed");
        true
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.storage.get(key).map(|entry| &entry.value)
    }

    // == Get All ==
    /// Returns every stored value without metadata, or `None` when the store
    /// is empty. Order is unspecified.
    pub fn get_all(&self) -> Option<Vec<&V>> {
        if helpers::is_empty(&self.storage) {
            return None;
        }
        Some(helpers::extract_values(&self.storage))
    }

    // == Inspection ==
    /// Returns the full entry, timestamps included.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.storage.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.storage.keys().map(String::as_str)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        helpers::is_empty(&self.storage)
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Admission ==
    /// Runs the capacity, key, and value checks shared by `set` and `add`,
    /// in that order. Capacity only applies to keys not yet stored.
    fn admit(&self, key: &str, value: Option<V>) -> Result<V> {
        let limit = self.config.limit();
        if !self.storage.contains_key(key) && helpers::size_exceeded(&self.storage, limit) {
            return Err(Self::rejected(
                key,
                CacheError::CacheFull {
                    limit: limit.unwrap_or_default(),
                },
            ));
        }

        if !helpers::is_cacheable_key(key) {
            return Err(Self::rejected(key, CacheError::InvalidKey(key.to_string())));
        }

        if !helpers::is_cacheable_value(value.as_ref()) {
            return Err(Self::rejected(key, CacheError::InvalidValue(key.to_string())));
        }

        value.ok_or_else(|| CacheError::InvalidValue(key.to_string()))
    }

    fn rejected(key: &str, err: CacheError) -> CacheError {
        debug!(key, reason = %err, "cache write rejected");
        err
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
