//! Validation & Formatting Helpers
//!
//! Stateless predicates and constructors the store runs every operation
//! through.

use std::collections::HashMap;

use crate::cache::{CacheEntry, MAX_KEY_LENGTH};

/// Key to entry mapping owned by a store.
pub type Storage<V> = HashMap<String, CacheEntry<V>>;

// == Key Validation ==
/// A key is cacheable when it is non-empty and at most
/// [`MAX_KEY_LENGTH`] characters long.
pub fn is_cacheable_key(key: &str) -> bool {
    !key.is_empty() && key.chars().count() <= MAX_KEY_LENGTH
}

// == Value Validation ==
/// A value is cacheable when it is present. Null-like payloads inside
/// `Some` are fine.
pub fn is_cacheable_value<V>(value: Option<&V>) -> bool {
    value.is_some()
}

// == Size Exceeded ==
/// True when `storage` holds at least `limit` entries. An unlimited store
/// (`None`) is never exceeded.
pub fn size_exceeded<V>(storage: &Storage<V>, limit: Option<usize>) -> bool {
    match limit {
        Some(limit) => storage.len() >= limit,
        None => false,
    }
}

// == Is Empty ==
pub fn is_empty<V>(storage: &Storage<V>) -> bool {
    storage.is_empty()
}

// == Format New Entry ==
/// Wraps a value with fresh `date_added`/`date_modified` stamps.
pub fn format_new_entry<V>(value: V) -> CacheEntry<V> {
    CacheEntry::new(value)
}

// == Extract Values ==
/// Projects the storage onto its values, dropping metadata. Order follows
/// map iteration and carries no meaning.
pub fn extract_values<V>(storage: &Storage<V>) -> Vec<&V> {
    storage.values().map(|entry| &entry.value).collect()
}
