//! Shared Cache Handle
//!
//! Serializes access to one [`CacheStore`] across tasks. Each call holds the
//! lock for the whole check-then-insert sequence, so concurrent writers
//! cannot push the store past its size limit.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;

/// Cloneable, thread-safe handle to a single cache store.
#[derive(Debug)]
pub struct SharedCache<V = Value> {
    inner: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedCache<V> {
    /// Wraps an existing store.
    pub fn new(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a handle over a fresh store.
    pub fn from_config(config: CacheConfig) -> Self {
        Self::new(CacheStore::new(config))
    }

    pub async fn set(&self, key: &str, value: impl Into<Option<V>>) -> bool {
        self.inner.write().await.set(key, value)
    }

    pub async fn try_set(&self, key: &str, value: impl Into<Option<V>>) -> Result<()> {
        self.inner.write().await.try_set(key, value)
    }

    pub async fn add(&self, key: &str, value: impl Into<Option<V>>) -> bool {
        self.inner.write().await.add(key, value)
    }

    pub async fn try_add(&self, key: &str, value: impl Into<Option<V>>) -> Result<()> {
        self.inner.write().await.try_add(key, value)
    }

    pub async fn remove(&self, key: &str) -> bool {
        self.inner.write().await.remove(key)
    }

    pub async fn try_remove(&self, key: &str) -> Result<CacheEntry<V>> {
        self.inner.write().await.try_remove(key)
    }

    pub async fn flush(&self) -> bool {
        self.inner.write().await.flush()
    }

    /// Returns a clone of the stored value.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.read().await.get(key).cloned()
    }

    /// Returns clones of every stored value, or `None` when empty.
    pub async fn get_all(&self) -> Option<Vec<V>> {
        self.inner
            .read()
            .await
            .get_all()
            .map(|values| values.into_iter().cloned().collect())
    }

    pub async fn entry(&self, key: &str) -> Option<CacheEntry<V>> {
        self.inner.read().await.entry(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_set_and_get() {
        let cache: SharedCache<i32> = SharedCache::from_config(CacheConfig::new(10, 60));

        assert!(cache.set("a", 1).await);
        assert_eq!(cache.get("a").await, Some(1));
        assert_eq!(cache.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_shared_clones_see_same_store() {
        let cache: SharedCache<i32> = SharedCache::from_config(CacheConfig::default());
        let other = cache.clone();

        assert!(cache.add("a", 1).await);
        assert!(!other.add("a", 2).await);
        assert_eq!(other.get("a").await, Some(1));
        assert!(other.remove("a").await);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_shared_concurrent_writers_respect_size() {
        let cache: SharedCache<usize> = SharedCache::from_config(CacheConfig::new(16, 60));

        let mut handles = Vec::new();
        for task in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let mut admitted = 0;
                for i in 0..20 {
                    if cache.set(&format!("t{task}-{i}"), i).await {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        assert_eq!(total, 16);
        assert_eq!(cache.len().await, 16);
    }

    #[tokio::test]
    async fn test_shared_flush_and_get_all() {
        let cache: SharedCache<i32> = SharedCache::from_config(CacheConfig::default());
        assert_eq!(cache.get_all().await, None);

        cache.set("a", 1).await;
        assert_eq!(cache.get_all().await, Some(vec![1]));
        assert!(cache.entry("a").await.is_some());

        assert!(cache.flush().await);
        assert_eq!(cache.get_all().await, None);
    }
}
