//! Identity-scoped, chainable query contexts over a record source

use crate::core::error::{CheckError, StorageError};
use crate::core::field::FieldValue;
use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Narrow seam between queries and whatever holds the records.
///
/// The query layer only ever needs to enumerate candidate records; filtering
/// happens client-side through the query's predicate chain. Storage backends
/// implement this alongside their CRUD surface.
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync {
    /// Enumerate all records of this type
    async fn scan(&self) -> Result<Vec<T>>;
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A chainable query context bound to a record source.
///
/// Scopes receive a `RecordQuery` already constrained to the identity of the
/// record being checked, narrow it further with [`where_field`](Self::where_field)
/// or [`filter`](Self::filter), and hand it back. The dispatcher then
/// materializes it with [`exists`](Self::exists).
pub struct RecordQuery<T: Record> {
    source: Arc<dyn RecordSource<T>>,
    predicates: Vec<Predicate<T>>,
}

impl<T: Record> Clone for RecordQuery<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicates: self.predicates.clone(),
        }
    }
}

impl<T: Record> RecordQuery<T> {
    /// Create an unconstrained query over a source
    pub fn new(source: Arc<dyn RecordSource<T>>) -> Self {
        Self {
            source,
            predicates: Vec::new(),
        }
    }

    /// Constrain the query to a single record identity
    ///
    /// Equivalent to `where_field(key_name, key_value)`; named separately
    /// because the identity constraint is what makes a check query answer
    /// "does *this* record match" rather than "does *any* record match".
    pub fn scoped_to(self, key_name: &str, key_value: FieldValue) -> Self {
        self.where_field(key_name, key_value)
    }

    /// Keep only records whose field equals the given value
    ///
    /// Records that do not expose the field are filtered out.
    pub fn where_field(self, field: impl Into<String>, value: FieldValue) -> Self {
        let field = field.into();
        self.filter(move |record: &T| record.field_value(&field).is_some_and(|v| v == value))
    }

    /// Keep only records matching an arbitrary predicate
    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Arc::new(predicate));
        self
    }

    /// Materialize the query and return the matching records
    pub async fn fetch(&self) -> Result<Vec<T>, CheckError> {
        let records = self.source.scan().await.map_err(|e| {
            CheckError::Storage(StorageError::Backend {
                message: e.to_string(),
            })
        })?;

        Ok(records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect())
    }

    /// Materialize the query and return whether any record matches
    pub async fn exists(&self) -> Result<bool, CheckError> {
        let records = self.source.scan().await.map_err(|e| {
            CheckError::Storage(StorageError::Backend {
                message: e.to_string(),
            })
        })?;

        Ok(records.iter().any(|record| self.matches(record)))
    }

    /// Materialize the query and count the matching records
    pub async fn count(&self) -> Result<usize, CheckError> {
        Ok(self.fetch().await?.len())
    }

    fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(record))
    }
}
