//! In-memory verdict cache with lazy TTL expiry

use crate::persona::PersonaId;
use crate::verdict::Verdict;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default time-to-live for cached verdicts (5 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Cache key: persona identity plus a fingerprint of the literal proposal
///
/// The identity is part of the key, so the same text evaluated by two
/// personas never shares an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    persona: PersonaId,
    fingerprint: String,
}

impl CacheKey {
    pub fn persona(&self) -> PersonaId {
        self.persona
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.persona, &self.fingerprint[..12])
    }
}

/// Build the cache key for a proposal and persona.
///
/// No normalization is applied: whitespace and case differences
/// produce different keys.
pub fn make_key(proposal: &str, persona: PersonaId) -> CacheKey {
    let digest = Sha256::digest(proposal.as_bytes());
    CacheKey {
        persona,
        fingerprint: hex::encode(digest),
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    verdict: Verdict,
    captured_at: Instant,
}

/// Verdict cache keyed by (persona, proposal fingerprint)
///
/// Entries older than the TTL are ignored on read but never removed;
/// the map grows for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a cached verdict if it was captured less than `ttl` before `now`
    pub fn get(&self, key: &CacheKey, now: Instant) -> Option<&Verdict> {
        let entry = self.entries.get(key)?;
        if now.saturating_duration_since(entry.captured_at) < self.ttl {
            Some(&entry.verdict)
        } else {
            None
        }
    }

    /// Store a verdict, replacing any previous entry for the key
    pub fn put(&mut self, key: CacheKey, verdict: Verdict, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                verdict,
                captured_at: now,
            },
        );
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries still valid at `now`
    pub fn live_entries(&self, now: Instant) -> usize {
        self.entries
            .values()
            .filter(|e| now.saturating_duration_since(e.captured_at) < self.ttl)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
