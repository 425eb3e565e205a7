//! # Scope Checks
//!
//! Boolean "check" accessors synthesized from named query scopes, for
//! record types with a stable identity.
//!
//! A scope is a reusable query filter registered under a PascalCase base
//! name (`Active`, `PendingInvoices`). For every scope, four virtual check
//! methods exist — `isActive`, `isNotActive`, `hasActive`, `hasNoActive` —
//! each answering whether the scope matches (or does not match) one
//! specific record, by running the scope on a query pinned to that record's
//! identity and testing existence. A leading `_` switches a call to
//! in-memory mode: the scope's raw result is returned instead of a boolean
//! and the cache is bypassed.
//!
//! ## Features
//!
//! - **Name-driven dispatch**: one entry point parses the requested method
//!   name into base name, polarity, and evaluation mode, then resolves it
//!   against the scope registry — unresolvable names fail with the standard
//!   missing-method error
//! - **Identity-scoped queries**: scopes receive a query already pinned to
//!   the record under check and narrow it further
//! - **Remember-forever memoization**: with caching enabled, materialized
//!   results are stored under a key derived from the check name and the
//!   record identity, until a mutation invalidates them
//! - **Explicit invalidation wiring**: a mutation observer sweeps all four
//!   check variants of every registered scope when a record is updated or
//!   deleted, before the mutating call returns
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scope_checks::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Order {
//!     id: Uuid,
//!     status: String,
//! }
//!
//! impl_record!(Order, "orders", id, [status]);
//!
//! let mut registry = ScopeRegistry::new();
//! registry.register("Active", |query, _args, _materialized| {
//!     Ok(ScopeOutcome::Query(query.where_field("status", "active".into())))
//! });
//!
//! let store = Arc::new(InMemoryRecordStore::new());
//! let cache = Arc::new(InMemoryCheckCache::new());
//! let dispatcher = ScopeCheckDispatcher::new(
//!     registry,
//!     store.clone(),
//!     cache,
//!     ScopeChecksConfig::cached(),
//! );
//! store.observe(dispatcher.invalidator()).await;
//!
//! let order = store.insert(order).await?;
//! assert!(dispatcher.check(&order, "isActive", &[]).await?);
//! assert!(!dispatcher.check(&order, "isNotActive", &[]).await?);
//! ```

pub mod cache;
pub mod checks;
pub mod config;
pub mod core;
pub mod records;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits & Types ===
    pub use crate::core::{
        error::{CacheError, CheckError, CheckResult, ScopeError, StorageError},
        events::{MutationObserver, ObserverSet, RecordEvent},
        field::FieldValue,
        query::{RecordQuery, RecordSource},
        record::Record,
        scope::{ScopeFn, ScopeOutcome},
    };

    // === Dispatch ===
    pub use crate::checks::{
        CheckName, CheckOutcome, CheckPrefix, EvalMode, Polarity, ScopeCheckDispatcher,
        ScopeRegistry,
    };

    // === Caching ===
    pub use crate::cache::{
        CheckCache, CheckInvalidator, InMemoryCheckCache, check_cache_key, remember_forever,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRecordStore, RecordStore};

    // === Config ===
    pub use crate::config::ScopeChecksConfig;

    // === Macros ===
    pub use crate::impl_record;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
    pub use uuid::Uuid;
}
