//! Scope registry mapping base names to filter functions

use crate::core::error::CheckError;
use crate::core::query::RecordQuery;
use crate::core::record::Record;
use crate::core::scope::{ScopeFn, ScopeOutcome};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Registry of named scopes for one record type
///
/// Scopes are keyed by their PascalCase base name (the `Active` in
/// `isActive`). Registration order is preserved, so invalidation sweeps
/// and introspection enumerate scopes deterministically.
pub struct ScopeRegistry<T: Record> {
    scopes: IndexMap<String, ScopeFn<T>>,
}

impl<T: Record> ScopeRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            scopes: IndexMap::new(),
        }
    }

    /// Register a scope under a base name
    ///
    /// Registering the same base name again replaces the previous scope.
    pub fn register(
        &mut self,
        base: impl Into<String>,
        scope: impl Fn(RecordQuery<T>, &[Value], bool) -> Result<ScopeOutcome<T>, CheckError>
        + Send
        + Sync
        + 'static,
    ) {
        self.scopes.insert(base.into(), Arc::new(scope));
    }

    /// Look up a scope by base name
    pub fn get(&self, base: &str) -> Option<&ScopeFn<T>> {
        self.scopes.get(base)
    }

    /// Whether a scope is registered under the base name
    pub fn contains(&self, base: &str) -> bool {
        self.scopes.contains_key(base)
    }

    /// All registered base names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(|s| s.as_str())
    }

    /// Number of registered scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<T: Record> Default for ScopeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
