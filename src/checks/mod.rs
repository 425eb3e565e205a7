//! Check-name parsing, scope registration, and dispatch

pub mod dispatcher;
pub mod name;
pub mod registry;

pub use dispatcher::{CheckOutcome, ScopeCheckDispatcher};
pub use name::{CheckName, CheckPrefix, EvalMode, IN_MEMORY_MARKER, Polarity};
pub use registry::ScopeRegistry;
