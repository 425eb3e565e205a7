//! Record mutation events and observer subscriptions
//!
//! Stores notify registered observers after every mutation, and they await
//! each observer before the mutating call returns. That ordering is what
//! lets cache invalidation happen-after the mutation and happen-before any
//! later dispatch can observe stale data.
//!
//! Observers are registered explicitly at application wiring time; there is
//! no ambient hook mechanism.

use crate::core::error::CheckError;
use crate::core::record::Record;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Events emitted by a store after a record mutation
#[derive(Debug, Clone)]
pub enum RecordEvent<T: Record> {
    /// A record was inserted
    Created { record: T },
    /// A record was updated
    Updated { record: T },
    /// A record was deleted
    Deleted { record: T },
}

impl<T: Record> RecordEvent<T> {
    /// Get the record this event relates to
    pub fn record(&self) -> &T {
        match self {
            RecordEvent::Created { record }
            | RecordEvent::Updated { record }
            | RecordEvent::Deleted { record } => record,
        }
    }

    /// Get the action name (created, updated, deleted)
    pub fn action(&self) -> &'static str {
        match self {
            RecordEvent::Created { .. } => "created",
            RecordEvent::Updated { .. } => "updated",
            RecordEvent::Deleted { .. } => "deleted",
        }
    }
}

/// Trait for components that react to record mutations
#[async_trait]
pub trait MutationObserver<T: Record>: Send + Sync {
    /// Handle a mutation event
    ///
    /// Errors propagate to the caller of the mutating store operation.
    async fn on_record_event(&self, event: &RecordEvent<T>) -> Result<(), CheckError>;
}

/// An ordered set of mutation observers for one record type
pub struct ObserverSet<T: Record> {
    observers: RwLock<Vec<Arc<dyn MutationObserver<T>>>>,
}

impl<T: Record> ObserverSet<T> {
    /// Create an empty observer set
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer
    ///
    /// Observers are notified in registration order.
    pub async fn register(&self, observer: Arc<dyn MutationObserver<T>>) {
        self.observers.write().await.push(observer);
    }

    /// Get the current number of registered observers
    pub async fn count(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Notify every observer of an event, in registration order
    ///
    /// Stops at the first observer error and surfaces it.
    pub async fn notify(&self, event: &RecordEvent<T>) -> Result<(), CheckError> {
        let observers = self.observers.read().await.clone();

        for observer in observers {
            observer.on_record_event(event).await?;
        }

        Ok(())
    }
}

impl<T: Record> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
