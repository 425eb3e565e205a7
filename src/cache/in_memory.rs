//! In-memory implementation of CheckCache for testing and development

use crate::cache::store::CheckCache;
use crate::core::error::CacheError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory check cache implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryCheckCache {
    entries: Arc<RwLock<HashMap<String, bool>>>,
}

impl InMemoryCheckCache {
    /// Create a new in-memory check cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CheckCache for InMemoryCheckCache {
    async fn get(&self, key: &str) -> Result<Option<bool>, CacheError> {
        let entries = self.entries.read().map_err(|e| CacheError::Lock {
            message: format!("failed to acquire read lock: {}", e),
        })?;

        Ok(entries.get(key).copied())
    }

    async fn put(&self, key: &str, value: bool) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|e| CacheError::Lock {
            message: format!("failed to acquire write lock: {}", e),
        })?;

        entries.insert(key.to_string(), value);

        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|e| CacheError::Lock {
            message: format!("failed to acquire write lock: {}", e),
        })?;

        entries.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = InMemoryCheckCache::new();
        assert_eq!(cache.get("missing").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryCheckCache::new();

        cache.put("a", true).await.unwrap();
        cache.put("b", false).await.unwrap();

        assert_eq!(cache.get("a").await.unwrap(), Some(true));
        assert_eq!(cache.get("b").await.unwrap(), Some(false));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = InMemoryCheckCache::new();

        cache.put("a", true).await.unwrap();
        cache.put("a", false).await.unwrap();

        assert_eq!(cache.get("a").await.unwrap(), Some(false));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_forget_removes_entry() {
        let cache = InMemoryCheckCache::new();

        cache.put("a", true).await.unwrap();
        cache.forget("a").await.unwrap();

        assert_eq!(cache.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_forget_missing_key_is_noop() {
        let cache = InMemoryCheckCache::new();
        cache.forget("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = InMemoryCheckCache::new();
        let clone = cache.clone();

        cache.put("a", true).await.unwrap();

        assert_eq!(clone.get("a").await.unwrap(), Some(true));
    }
}
