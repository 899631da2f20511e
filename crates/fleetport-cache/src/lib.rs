//! Advisory key-value caching for the Fleetport portal.
//!
//! The cache is never authoritative: every read has a fallback path to the
//! record store, and every backend failure degrades to a cache miss. The
//! [`CacheLayer`] owns that policy; backends only move strings.

pub mod backend;
pub mod layer;
pub mod memory;
pub mod rest;

pub use backend::{CacheBackend, CacheError};
pub use layer::{CacheLayer, DEFAULT_TTL};
pub use memory::MemoryCacheBackend;
pub use rest::RestCacheBackend;
