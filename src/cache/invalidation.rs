//! Cache invalidation on record mutation
//!
//! Every registered scope yields four materialized check variants
//! (`is`/`isNot`/`has`/`hasNo` + base name), all keyed by the mutated
//! record's identity. One sweep forgets them all. In-memory variants are
//! never cached and need no sweep.

use crate::cache::key::check_cache_key;
use crate::cache::store::CheckCache;
use crate::checks::name::CheckPrefix;
use crate::checks::registry::ScopeRegistry;
use crate::core::error::CheckError;
use crate::core::events::{MutationObserver, RecordEvent};
use crate::core::record::Record;
use async_trait::async_trait;
use std::sync::Arc;

/// Mutation observer that forgets every check variant of a mutated record
///
/// Built by [`ScopeCheckDispatcher::invalidator`](crate::checks::ScopeCheckDispatcher::invalidator)
/// and registered with the record store at wiring time. Updates and deletes
/// trigger a sweep; creates do not (nothing can be cached for a record that
/// did not exist).
pub struct CheckInvalidator<T: Record> {
    registry: Arc<ScopeRegistry<T>>,
    cache: Arc<dyn CheckCache>,
}

impl<T: Record> CheckInvalidator<T> {
    /// Create an invalidator over a registry and cache
    pub fn new(registry: Arc<ScopeRegistry<T>>, cache: Arc<dyn CheckCache>) -> Self {
        Self { registry, cache }
    }

    /// Forget every check variant of every registered scope for one record
    pub async fn sweep(&self, record: &T) -> Result<(), CheckError> {
        let key_value = record.key_value().to_string();

        for base in self.registry.names() {
            for prefix in CheckPrefix::ALL {
                let method = format!("{}{}", prefix.as_str(), base);
                let key = check_cache_key(&method, T::table(), T::key_name(), &key_value);
                self.cache.forget(&key).await?;
            }
        }

        tracing::debug!(
            table = T::table(),
            key = %key_value,
            scopes = self.registry.len(),
            "swept scope check cache"
        );

        Ok(())
    }
}

#[async_trait]
impl<T: Record> MutationObserver<T> for CheckInvalidator<T> {
    async fn on_record_event(&self, event: &RecordEvent<T>) -> Result<(), CheckError> {
        match event {
            RecordEvent::Updated { record } | RecordEvent::Deleted { record } => {
                self.sweep(record).await
            }
            RecordEvent::Created { .. } => Ok(()),
        }
    }
}
