//! Check cache service trait and remember-forever semantics

use crate::core::error::{CacheError, CheckError};
use async_trait::async_trait;
use std::future::Future;

/// Service trait for the boolean check cache
///
/// Implementations are key-value stores with unbounded entry lifetime:
/// entries live until [`forget`](Self::forget) removes them. Failures are
/// surfaced verbatim; the dispatcher neither retries nor falls back to
/// recomputation on cache errors.
#[async_trait]
pub trait CheckCache: Send + Sync {
    /// Look up a cached check result
    async fn get(&self, key: &str) -> Result<Option<bool>, CacheError>;

    /// Store a check result
    async fn put(&self, key: &str, value: bool) -> Result<(), CacheError>;

    /// Remove a cached check result (no-op if absent)
    async fn forget(&self, key: &str) -> Result<(), CacheError>;
}

/// Return the cached value for `key`, or compute, store, and return it
///
/// Concurrent callers for the same key may both compute; the cached value
/// is a pure function of current storage state, so the race is harmless
/// and the last writer wins.
pub async fn remember_forever<F, Fut>(
    cache: &dyn CheckCache,
    key: &str,
    compute: F,
) -> Result<bool, CheckError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, CheckError>>,
{
    if let Some(cached) = cache.get(key).await? {
        tracing::debug!(key = %key, "scope check cache hit");
        return Ok(cached);
    }

    let value = compute().await?;
    cache.put(key, value).await?;
    Ok(value)
}
