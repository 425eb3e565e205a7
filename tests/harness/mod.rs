//! Shared test harness for scope check dispatch testing
//!
//! Provides `TestOrder` implementing `Record`, a scope registry covering
//! the chainable / raw-value / argument-taking scope shapes, and a wiring
//! helper that assembles store, cache, dispatcher, and invalidator the way
//! an application would.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use scope_checks::prelude::*;

// ---------------------------------------------------------------------------
// TestOrder — a record with fields covering the common FieldValue variants
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct TestOrder {
    pub id: Uuid,
    pub status: String,
    pub total: f64,
    pub paid: bool,
    pub placed_at: DateTime<Utc>,
}

impl_record!(TestOrder, "orders", id, [status, total, paid, placed_at]);

pub fn order(status: &str, total: f64, paid: bool) -> TestOrder {
    TestOrder {
        id: Uuid::new_v4(),
        status: status.to_string(),
        total,
        paid,
        placed_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Scope registry
// ---------------------------------------------------------------------------

/// Registered scopes:
/// - `Active`: status == "active" (chainable; increments `evaluations`)
/// - `Paid`: paid == true (chainable)
/// - `CheaperThan`: total < args[0] (chainable, argument-taking)
/// - `Receipt`: chainable when materialized, raw JSON value when in-memory
pub fn order_registry(evaluations: Arc<AtomicUsize>) -> ScopeRegistry<TestOrder> {
    let mut registry = ScopeRegistry::new();

    registry.register("Active", move |query, _args: &[Value], _materialized| {
        evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(ScopeOutcome::Query(
            query.where_field("status", "active".into()),
        ))
    });

    registry.register("Paid", |query, _args: &[Value], _materialized| {
        Ok(ScopeOutcome::Query(query.where_field("paid", true.into())))
    });

    registry.register("CheaperThan", |query, args: &[Value], _materialized| {
        let limit = args.first().and_then(|v| v.as_f64()).ok_or_else(|| {
            CheckError::Scope(ScopeError::InvalidArguments {
                scope: "CheaperThan".to_string(),
                message: "expected a numeric limit".to_string(),
            })
        })?;
        Ok(ScopeOutcome::Query(
            query.filter(move |order: &TestOrder| order.total < limit),
        ))
    });

    registry.register("Receipt", |query, _args: &[Value], materialized| {
        if materialized {
            Ok(ScopeOutcome::Query(query.where_field("paid", true.into())))
        } else {
            Ok(ScopeOutcome::Value(json!({"kind": "receipt"})))
        }
    });

    registry
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

pub struct TestRig {
    pub store: Arc<InMemoryRecordStore<TestOrder>>,
    pub cache: Arc<InMemoryCheckCache>,
    pub dispatcher: ScopeCheckDispatcher<TestOrder>,
    pub evaluations: Arc<AtomicUsize>,
}

impl TestRig {
    pub fn scope_evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

/// Assemble store, cache, dispatcher, and invalidator wiring
pub async fn rig(config: ScopeChecksConfig) -> TestRig {
    init_tracing();

    let store = Arc::new(InMemoryRecordStore::new());
    let cache = Arc::new(InMemoryCheckCache::new());
    let evaluations = Arc::new(AtomicUsize::new(0));

    let dispatcher = ScopeCheckDispatcher::new(
        order_registry(evaluations.clone()),
        store.clone(),
        cache.clone(),
        config,
    );

    store.observe(dispatcher.invalidator()).await;

    TestRig {
        store,
        cache,
        dispatcher,
        evaluations,
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
