//! Macros for reducing boilerplate when defining records
//!
//! `impl_record!` generates the `Record` implementation for a plain struct:
//! the table identifier, the key field, and the listed fields become
//! reachable through `field_value`. Field types must convert into
//! `FieldValue` (strings, integers, floats, booleans, UUIDs, datetimes).

/// Implement `Record` for a struct
///
/// # Example
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct Order {
///     id: Uuid,
///     status: String,
///     total: f64,
/// }
///
/// impl_record!(Order, "orders", id, [status, total]);
/// ```
///
/// The key field is exposed through `field_value` automatically and does
/// not need to be repeated in the field list. Unlisted fields return `None`.
#[macro_export]
macro_rules! impl_record {
    ($type:ty, $table:literal, $key:ident, [ $( $field:ident ),* $(,)? ]) => {
        impl $crate::core::record::Record for $type {
            fn table() -> &'static str {
                $table
            }

            fn key_name() -> &'static str {
                stringify!($key)
            }

            fn key_value(&self) -> $crate::core::field::FieldValue {
                $crate::core::field::FieldValue::from(&self.$key)
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    stringify!($key) => Some($crate::core::field::FieldValue::from(&self.$key)),
                    $(
                        stringify!($field) => {
                            Some($crate::core::field::FieldValue::from(&self.$field))
                        }
                    )*
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Clone, Debug)]
    struct Invoice {
        id: Uuid,
        number: i64,
        amount: f64,
        paid: bool,
        issued_at: DateTime<Utc>,
    }

    crate::impl_record!(Invoice, "invoices", id, [number, amount, paid, issued_at]);

    fn invoice() -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            number: 1042,
            amount: 99.5,
            paid: false,
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn test_generated_metadata() {
        assert_eq!(Invoice::table(), "invoices");
        assert_eq!(Invoice::key_name(), "id");
    }

    #[test]
    fn test_generated_key_value() {
        let record = invoice();
        assert_eq!(record.key_value(), FieldValue::Uuid(record.id));
    }

    #[test]
    fn test_generated_field_access() {
        let record = invoice();

        assert_eq!(record.field_value("number"), Some(FieldValue::Integer(1042)));
        assert_eq!(record.field_value("amount"), Some(FieldValue::Float(99.5)));
        assert_eq!(record.field_value("paid"), Some(FieldValue::Boolean(false)));
        assert_eq!(
            record.field_value("issued_at"),
            Some(FieldValue::DateTime(record.issued_at))
        );
        // Key field is reachable without being listed
        assert_eq!(record.field_value("id"), Some(FieldValue::Uuid(record.id)));
        assert_eq!(record.field_value("missing"), None);
    }
}
