//! Typed error handling for scope check dispatch
//!
//! This module provides the error hierarchy surfaced by the dispatcher so
//! clients can handle failures specifically rather than dealing with generic
//! `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`CheckError::MethodNotFound`]: the requested name is not a dispatchable
//!   check method — either it does not parse, or no scope with the matching
//!   base name is registered. This is the standard missing-method failure,
//!   not a dispatcher-specific error class.
//! - [`ScopeError`]: a registered scope misbehaved or failed.
//! - [`CacheError`]: the cache service failed; surfaced verbatim, never
//!   retried.
//! - [`StorageError`]: the record source failed while materializing a query.

use std::fmt;

/// The main error type for scope check dispatch
#[derive(Debug)]
pub enum CheckError {
    /// The requested method does not exist on the record type
    MethodNotFound { record_type: String, method: String },

    /// A registered scope failed or produced an unusable result
    Scope(ScopeError),

    /// Cache service errors
    Cache(CacheError),

    /// Record storage errors
    Storage(StorageError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::MethodNotFound {
                record_type,
                method,
            } => {
                write!(
                    f,
                    "call to undefined method '{}' on '{}'",
                    method, record_type
                )
            }
            CheckError::Scope(e) => write!(f, "{}", e),
            CheckError::Cache(e) => write!(f, "{}", e),
            CheckError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::MethodNotFound { .. } => None,
            CheckError::Scope(e) => Some(e),
            CheckError::Cache(e) => Some(e),
            CheckError::Storage(e) => Some(e),
        }
    }
}

impl CheckError {
    /// Whether this error is the standard missing-method failure
    pub fn is_method_not_found(&self) -> bool {
        matches!(self, CheckError::MethodNotFound { .. })
    }
}

// =============================================================================
// Scope Errors
// =============================================================================

/// Errors raised by or about a registered scope
#[derive(Debug)]
pub enum ScopeError {
    /// A materialized check requires the scope to return a chainable query,
    /// but it returned a raw value instead
    NotChainable { scope: String },

    /// A boolean result was requested for a check that produced a raw value
    NotBoolean { method: String },

    /// The scope rejected its arguments
    InvalidArguments { scope: String, message: String },

    /// The scope itself failed with a domain error
    Failed { scope: String, message: String },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::NotChainable { scope } => {
                write!(
                    f,
                    "scope '{}' returned a raw value where a chainable query was required",
                    scope
                )
            }
            ScopeError::NotBoolean { method } => {
                write!(f, "check '{}' did not produce a boolean result", method)
            }
            ScopeError::InvalidArguments { scope, message } => {
                write!(f, "invalid arguments for scope '{}': {}", scope, message)
            }
            ScopeError::Failed { scope, message } => {
                write!(f, "scope '{}' failed: {}", scope, message)
            }
        }
    }
}

impl std::error::Error for ScopeError {}

impl From<ScopeError> for CheckError {
    fn from(err: ScopeError) -> Self {
        CheckError::Scope(err)
    }
}

// =============================================================================
// Cache Errors
// =============================================================================

/// Errors from the check cache service
#[derive(Debug)]
pub enum CacheError {
    /// Failed to acquire a lock on the cache backing
    Lock { message: String },

    /// The cache backend failed
    Backend { key: String, message: String },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Lock { message } => {
                write!(f, "cache lock error: {}", message)
            }
            CacheError::Backend { key, message } => {
                write!(f, "cache backend error for key '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for CacheError {}

impl From<CacheError> for CheckError {
    fn from(err: CacheError) -> Self {
        CheckError::Cache(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the record source backing a query
#[derive(Debug)]
pub enum StorageError {
    /// Failed to acquire a lock on the store backing
    Lock { message: String },

    /// The storage backend failed
    Backend { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Lock { message } => {
                write!(f, "storage lock error: {}", message)
            }
            StorageError::Backend { message } => {
                write!(f, "storage backend error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for CheckError {
    fn from(err: StorageError) -> Self {
        CheckError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<anyhow::Error> for CheckError {
    fn from(err: anyhow::Error) -> Self {
        CheckError::Storage(StorageError::Backend {
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for scope check operations
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_found_display() {
        let err = CheckError::MethodNotFound {
            record_type: "orders".to_string(),
            method: "isRandom".to_string(),
        };
        assert!(err.to_string().contains("isRandom"));
        assert!(err.to_string().contains("orders"));
        assert!(err.is_method_not_found());
    }

    #[test]
    fn test_scope_error_display() {
        let err = ScopeError::NotChainable {
            scope: "Active".to_string(),
        };
        assert!(err.to_string().contains("Active"));
        assert!(err.to_string().contains("chainable"));
    }

    #[test]
    fn test_cache_error_conversion() {
        let cache_err = CacheError::Backend {
            key: "scope-check.abc".to_string(),
            message: "connection refused".to_string(),
        };
        let err: CheckError = cache_err.into();
        assert!(matches!(err, CheckError::Cache(_)));
        assert!(!err.is_method_not_found());
    }

    #[test]
    fn test_from_anyhow_error() {
        let err: CheckError = anyhow::anyhow!("scan failed").into();
        assert!(matches!(
            err,
            CheckError::Storage(StorageError::Backend { .. })
        ));
        assert!(err.to_string().contains("scan failed"));
    }
}
