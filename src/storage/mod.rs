//! Record store trait and storage implementations

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;

use crate::core::events::MutationObserver;
use crate::core::field::FieldValue;
use crate::core::query::RecordSource;
use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait for persisting records of one type
///
/// Extends [`RecordSource`] (which queries materialize against) with the
/// mutation surface. Implementations notify registered observers after
/// every mutation and await them before returning, so observers such as
/// the cache invalidator run before the mutating call completes.
#[async_trait]
pub trait RecordStore<T: Record>: RecordSource<T> {
    /// Insert a new record
    async fn insert(&self, record: T) -> Result<T>;

    /// Get a record by key value
    async fn get(&self, key: &FieldValue) -> Result<Option<T>>;

    /// Update an existing record
    async fn update(&self, record: T) -> Result<T>;

    /// Delete a record by key value (no-op if absent)
    async fn delete(&self, key: &FieldValue) -> Result<()>;

    /// Register a mutation observer
    async fn observe(&self, observer: Arc<dyn MutationObserver<T>>);
}
