//! Core module containing fundamental traits and types for scope checks

pub mod error;
pub mod events;
pub mod field;
pub mod query;
pub mod record;
pub mod scope;

pub use error::{CacheError, CheckError, CheckResult, ScopeError, StorageError};
pub use events::{MutationObserver, ObserverSet, RecordEvent};
pub use field::FieldValue;
pub use query::{RecordQuery, RecordSource};
pub use record::Record;
pub use scope::{ScopeFn, ScopeOutcome};
