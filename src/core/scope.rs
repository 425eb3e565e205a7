//! Scope function types
//!
//! A scope is a named, reusable query predicate registered for a record type.
//! Scopes receive the query context already pinned to the record under
//! check, the caller-supplied arguments, and a flag telling them whether the
//! result will be materialized against storage or handed back raw.

use crate::core::error::CheckError;
use crate::core::query::RecordQuery;
use crate::core::record::Record;
use serde_json::Value;
use std::sync::Arc;

/// What a scope hands back to the dispatcher
pub enum ScopeOutcome<T: Record> {
    /// A further-constrained, chainable query context
    Query(RecordQuery<T>),

    /// An arbitrary raw value, for scopes that compute their answer eagerly
    Value(Value),
}

impl<T: Record> ScopeOutcome<T> {
    /// Whether the outcome is a chainable query
    pub fn is_query(&self) -> bool {
        matches!(self, ScopeOutcome::Query(_))
    }

    /// Unwrap the query context, if any
    pub fn into_query(self) -> Option<RecordQuery<T>> {
        match self {
            ScopeOutcome::Query(query) => Some(query),
            ScopeOutcome::Value(_) => None,
        }
    }

    /// Borrow the raw value, if any
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ScopeOutcome::Value(value) => Some(value),
            ScopeOutcome::Query(_) => None,
        }
    }
}

/// A registered scope function.
///
/// The trailing `bool` is true when the dispatcher will materialize the
/// result against storage (existence check) and false for in-memory calls,
/// so a single scope implementation can serve both shapes.
pub type ScopeFn<T> =
    Arc<dyn Fn(RecordQuery<T>, &[Value], bool) -> Result<ScopeOutcome<T>, CheckError> + Send + Sync>;
