//! Record trait defining the capability surface scope checks dispatch against

use crate::core::field::FieldValue;

/// Base trait for records that scope checks can be dispatched against.
///
/// A record exposes the identity triple the dispatcher and the cache key
/// need:
/// - table: the table/collection identifier for the record's type
/// - key_name: the name of the primary key column/field
/// - key_value: the primary key value of this instance
///
/// plus dynamic field access so query scopes can filter on arbitrary
/// fields without knowing the concrete struct.
///
/// Most implementations come from the [`impl_record!`](crate::impl_record)
/// macro rather than being written by hand.
pub trait Record: Clone + Send + Sync + 'static {
    /// The table/collection identifier (e.g., "orders")
    fn table() -> &'static str;

    /// The name of the primary key field (e.g., "id")
    fn key_name() -> &'static str;

    /// Get the primary key value of this instance
    fn key_value(&self) -> FieldValue;

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for fields the record does not expose.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
