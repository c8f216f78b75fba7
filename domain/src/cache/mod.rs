//! Response cache
//!
//! Maps `(persona, proposal)` to a previously obtained verdict. Time is
//! passed in explicitly so expiry is deterministic under test.

pub mod response_cache;

pub use response_cache::{CacheKey, DEFAULT_CACHE_TTL, ResponseCache, make_key};
