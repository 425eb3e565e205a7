//! Cache key derivation for check results
//!
//! Keys are a BLAKE3 hash over the check method name and the record's
//! identity triple (table, key name, key value). Components are separated
//! by a NUL byte before hashing so no two distinct input tuples can
//! concatenate to the same byte stream.

use blake3::Hasher;

/// Prefix shared by every check cache key
pub const CACHE_KEY_PREFIX: &str = "scope-check.";

/// Derive the cache key for one check method on one record identity
///
/// Deterministic: the same inputs always produce the same key, and any
/// single differing component produces a different key.
pub fn check_cache_key(method: &str, table: &str, key_name: &str, key_value: &str) -> String {
    let mut hasher = Hasher::new();
    for part in [method, table, key_name, key_value] {
        hasher.update(part.as_bytes());
        hasher.update(&[0]);
    }
    format!("{}{}", CACHE_KEY_PREFIX, hasher.finalize().to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let a = check_cache_key("isActive", "orders", "id", "42");
        let b = check_cache_key("isActive", "orders", "id", "42");
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_is_prefixed_hex() {
        let key = check_cache_key("isActive", "orders", "id", "42");
        let digest = key.strip_prefix(CACHE_KEY_PREFIX).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_any_component_changes_the_key() {
        let base = check_cache_key("isActive", "orders", "id", "42");
        assert_ne!(base, check_cache_key("isNotActive", "orders", "id", "42"));
        assert_ne!(base, check_cache_key("isActive", "invoices", "id", "42"));
        assert_ne!(base, check_cache_key("isActive", "orders", "uuid", "42"));
        assert_ne!(base, check_cache_key("isActive", "orders", "id", "43"));
    }

    #[test]
    fn test_component_boundaries_are_unambiguous() {
        // Shifting a character across a component boundary must not collide
        let a = check_cache_key("isActive", "orders", "id", "42");
        let b = check_cache_key("isActiveo", "rders", "id", "42");
        assert_ne!(a, b);
    }
}
