//! Check result caching: service trait, key derivation, invalidation

pub mod in_memory;
pub mod invalidation;
pub mod key;
pub mod store;

pub use in_memory::InMemoryCheckCache;
pub use invalidation::CheckInvalidator;
pub use key::{CACHE_KEY_PREFIX, check_cache_key};
pub use store::{CheckCache, remember_forever};
