//! In-memory implementation of RecordStore for testing and development

use crate::core::events::{MutationObserver, ObserverSet, RecordEvent};
use crate::core::field::FieldValue;
use crate::core::query::RecordSource;
use crate::core::record::Record;
use crate::storage::RecordStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory record store implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// records are keyed by the textual rendering of their key value.
#[derive(Clone)]
pub struct InMemoryRecordStore<T: Record> {
    records: Arc<RwLock<HashMap<String, T>>>,
    observers: Arc<ObserverSet<T>>,
}

impl<T: Record> InMemoryRecordStore<T> {
    /// Create a new in-memory record store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            observers: Arc::new(ObserverSet::new()),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordSource<T> for InMemoryRecordStore<T> {
    async fn scan(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn insert(&self, record: T) -> Result<T> {
        {
            let mut records = self
                .records
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;

            records.insert(record.key_value().to_string(), record.clone());
        }

        self.observers
            .notify(&RecordEvent::Created {
                record: record.clone(),
            })
            .await?;

        Ok(record)
    }

    async fn get(&self, key: &FieldValue) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {}", e))?;

        Ok(records.get(&key.to_string()).cloned())
    }

    async fn update(&self, record: T) -> Result<T> {
        {
            let mut records = self
                .records
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;

            let key = record.key_value().to_string();
            if !records.contains_key(&key) {
                return Err(anyhow!("record '{}' not found in '{}'", key, T::table()));
            }

            records.insert(key, record.clone());
        }

        self.observers
            .notify(&RecordEvent::Updated {
                record: record.clone(),
            })
            .await?;

        Ok(record)
    }

    async fn delete(&self, key: &FieldValue) -> Result<()> {
        let removed = {
            let mut records = self
                .records
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {}", e))?;

            records.remove(&key.to_string())
        };

        if let Some(record) = removed {
            self.observers
                .notify(&RecordEvent::Deleted { record })
                .await?;
        }

        Ok(())
    }

    async fn observe(&self, observer: Arc<dyn MutationObserver<T>>) {
        self.observers.register(observer).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CheckError;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Uuid,
        body: String,
    }

    crate::impl_record!(Note, "notes", id, [body]);

    struct Recorder {
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl MutationObserver<Note> for Recorder {
        async fn on_record_event(&self, event: &RecordEvent<Note>) -> Result<(), CheckError> {
            self.seen.lock().unwrap().push(event.action().to_string());
            Ok(())
        }
    }

    fn note(body: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryRecordStore::new();
        let record = note("hello");

        store.insert(record.clone()).await.unwrap();

        let found = store.get(&record.key_value()).await.unwrap();
        assert_eq!(found, Some(record));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_scan_returns_all_records() {
        let store = InMemoryRecordStore::new();
        store.insert(note("a")).await.unwrap();
        store.insert(note("b")).await.unwrap();

        assert_eq!(store.scan().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = InMemoryRecordStore::new();
        let mut record = note("before");
        store.insert(record.clone()).await.unwrap();

        record.body = "after".to_string();
        store.update(record.clone()).await.unwrap();

        let found = store.get(&record.key_value()).await.unwrap().unwrap();
        assert_eq!(found.body, "after");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = InMemoryRecordStore::new();
        let result = store.update(note("ghost")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryRecordStore::new();
        let record = note("gone");
        store.insert(record.clone()).await.unwrap();

        store.delete(&record.key_value()).await.unwrap();

        assert!(store.get(&record.key_value()).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_notify_observers_in_order() {
        let store = InMemoryRecordStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        store.observe(Arc::new(Recorder { seen: seen.clone() })).await;

        let record = note("watched");
        store.insert(record.clone()).await.unwrap();
        store.update(record.clone()).await.unwrap();
        store.delete(&record.key_value()).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["created", "updated", "deleted"]);
    }

    #[tokio::test]
    async fn test_delete_missing_record_emits_no_event() {
        let store = InMemoryRecordStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        store.observe(Arc::new(Recorder { seen: seen.clone() })).await;

        store.delete(&note("never stored").key_value()).await.unwrap();

        assert!(seen.lock().unwrap().is_empty());
    }
}
