//! The scope check dispatcher
//!
//! This is the entry point replacing the dynamic method-missing interception
//! of ORMs with runtime method resolution: callers hand the dispatcher a
//! requested method name (`isActive`, `hasNoPendingInvoices`, `_isPaid`)
//! and the record to check, and the dispatcher parses, resolves, scopes,
//! evaluates, and optionally memoizes.

use crate::cache::invalidation::CheckInvalidator;
use crate::cache::key::check_cache_key;
use crate::cache::store::{CheckCache, remember_forever};
use crate::checks::name::{CheckName, EvalMode};
use crate::checks::registry::ScopeRegistry;
use crate::config::ScopeChecksConfig;
use crate::core::error::{CheckError, ScopeError};
use crate::core::query::{RecordQuery, RecordSource};
use crate::core::record::Record;
use crate::core::scope::{ScopeFn, ScopeOutcome};
use serde_json::Value;
use std::sync::Arc;

/// The result of dispatching a check method
pub enum CheckOutcome<T: Record> {
    /// A materialized existence check, polarity already applied
    Bool(bool),

    /// The raw outcome of an in-memory check, exactly as the scope produced it
    Raw(ScopeOutcome<T>),
}

impl<T: Record> std::fmt::Debug for CheckOutcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckOutcome::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            CheckOutcome::Raw(ScopeOutcome::Query(_)) => {
                f.debug_tuple("Raw").field(&"Query").finish()
            }
            CheckOutcome::Raw(ScopeOutcome::Value(value)) => {
                f.debug_tuple("Raw").field(value).finish()
            }
        }
    }
}

impl<T: Record> CheckOutcome<T> {
    /// The boolean result, if this was a materialized check
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CheckOutcome::Bool(value) => Some(*value),
            CheckOutcome::Raw(_) => None,
        }
    }

    /// Unwrap the raw scope outcome, if this was an in-memory check
    pub fn into_raw(self) -> Option<ScopeOutcome<T>> {
        match self {
            CheckOutcome::Raw(outcome) => Some(outcome),
            CheckOutcome::Bool(_) => None,
        }
    }
}

/// Dispatcher turning check method names into scope evaluations
///
/// Holds the scope registry for one record type, a handle on the record
/// source queries materialize against, the check cache, and the caching
/// flag. The flag is fixed at construction; there are no ambient
/// configuration reads at dispatch time.
pub struct ScopeCheckDispatcher<T: Record> {
    registry: Arc<ScopeRegistry<T>>,
    source: Arc<dyn RecordSource<T>>,
    cache: Arc<dyn CheckCache>,
    config: ScopeChecksConfig,
}

impl<T: Record> ScopeCheckDispatcher<T> {
    /// Create a dispatcher
    pub fn new(
        registry: ScopeRegistry<T>,
        source: Arc<dyn RecordSource<T>>,
        cache: Arc<dyn CheckCache>,
        config: ScopeChecksConfig,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            source,
            cache,
            config,
        }
    }

    /// The scope registry backing this dispatcher
    pub fn registry(&self) -> &ScopeRegistry<T> {
        &self.registry
    }

    /// Whether materialized check results are memoized
    pub fn cache_enabled(&self) -> bool {
        self.config.cache
    }

    /// Build the mutation observer that sweeps this dispatcher's cache keys
    ///
    /// Register it with the record store at wiring time so update/delete
    /// invalidate every check variant for the mutated record.
    pub fn invalidator(&self) -> Arc<CheckInvalidator<T>> {
        Arc::new(CheckInvalidator::new(
            self.registry.clone(),
            self.cache.clone(),
        ))
    }

    /// Dispatch a check method call against a record
    ///
    /// Parses the requested name, resolves the scope, runs it on a query
    /// pinned to the record's identity, and produces either an existence
    /// boolean (materialized mode, polarity applied, memoized when caching
    /// is enabled) or the scope's raw outcome (in-memory mode, never
    /// cached).
    ///
    /// Names that do not parse, or whose base name resolves to no
    /// registered scope, fail with [`CheckError::MethodNotFound`].
    pub async fn call(
        &self,
        record: &T,
        method: &str,
        args: &[Value],
    ) -> Result<CheckOutcome<T>, CheckError> {
        let Some(name) = CheckName::parse(method) else {
            return Err(self.method_not_found(method));
        };

        let Some(scope) = self.registry.get(name.base()).cloned() else {
            return Err(self.method_not_found(method));
        };

        let query =
            RecordQuery::new(self.source.clone()).scoped_to(T::key_name(), record.key_value());

        tracing::debug!(
            method = %method,
            table = T::table(),
            key = %record.key_value(),
            mode = ?name.mode(),
            "dispatching scope check"
        );

        match name.mode() {
            EvalMode::InMemory => {
                let outcome = scope.as_ref()(query, args, false)?;
                Ok(CheckOutcome::Raw(outcome))
            }
            EvalMode::Materialized => {
                let negated = name.is_negated();
                let value = if self.config.cache {
                    let key = check_cache_key(
                        method,
                        T::table(),
                        T::key_name(),
                        &record.key_value().to_string(),
                    );
                    remember_forever(self.cache.as_ref(), &key, || {
                        Self::evaluate(name.base(), &scope, query, args, negated)
                    })
                    .await?
                } else {
                    Self::evaluate(name.base(), &scope, query, args, negated).await?
                };
                Ok(CheckOutcome::Bool(value))
            }
        }
    }

    /// Dispatch a check and require a boolean result
    pub async fn check(
        &self,
        record: &T,
        method: &str,
        args: &[Value],
    ) -> Result<bool, CheckError> {
        match self.call(record, method, args).await? {
            CheckOutcome::Bool(value) => Ok(value),
            CheckOutcome::Raw(_) => Err(CheckError::Scope(ScopeError::NotBoolean {
                method: method.to_string(),
            })),
        }
    }

    async fn evaluate(
        base: &str,
        scope: &ScopeFn<T>,
        query: RecordQuery<T>,
        args: &[Value],
        negated: bool,
    ) -> Result<bool, CheckError> {
        let outcome = scope.as_ref()(query, args, true)?;

        let query = outcome.into_query().ok_or_else(|| {
            CheckError::Scope(ScopeError::NotChainable {
                scope: base.to_string(),
            })
        })?;

        let exists = query.exists().await?;
        Ok(if negated { !exists } else { exists })
    }

    fn method_not_found(&self, method: &str) -> CheckError {
        CheckError::MethodNotFound {
            record_type: T::table().to_string(),
            method: method.to_string(),
        }
    }
}
