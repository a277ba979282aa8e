//! In-memory TTL store for generated content.

use super::key::CacheKey;
use crate::types::GeneratedContent;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct Entry {
    content: GeneratedContent,
    stored_at: Instant,
}

impl Entry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }
}

/// Read-only cache snapshot for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Process-lifetime cache keyed by request fingerprint.
///
/// One TTL for all entries. Expiry is lazy: an expired entry is removed by
/// the lookup that finds it; there is no background sweep. Lookups take the
/// write lock so the expiry check and the removal are one atomic step.
pub struct ContentCache {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ContentCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached content for `key`, evicting it first if stale.
    pub fn get(&self, key: &CacheKey) -> Option<GeneratedContent> {
        let mut entries = self.entries.write().unwrap();
        if let Some(entry) = entries.get(&key.hash) {
            if entry.is_expired(self.ttl) {
                entries.remove(&key.hash);
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(entry.content.clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub fn insert(&self, key: &CacheKey, content: GeneratedContent) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            key.hash.clone(),
            Entry {
                content,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drops every entry. Idempotent; counters are kept.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read().unwrap();
        let mut keys: Vec<String> = entries
            .iter()
            .filter(|(_, e)| !e.is_expired(self.ttl))
            .map(|(k, _)| k.clone())
            .collect();
        keys.sort();
        CacheStats {
            size: keys.len(),
            keys,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
