//! Request fingerprinting and the in-memory TTL result cache.

pub mod key;
pub mod store;

pub use key::{CacheKey, Fingerprinter};
pub use store::{CacheStats, ContentCache};
