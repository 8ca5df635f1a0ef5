//! Cache configuration and statistics models.

use serde::{Deserialize, Serialize};

/// Configuration for the answer cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seconds a stored answer stays fresh. Stale entries behave as absent
    /// and are overwritten by the next successful answer for the same key.
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
    /// Maximum number of answers to keep; the least recently used entry is
    /// evicted once the cache is full.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    /// Provides default values for cache configuration.
    ///
    /// - `enabled`: true
    /// - `ttl_seconds`: 900 (15 minutes)
    /// - `max_entries`: 256
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_ttl_seconds() -> u64 {
    900
}

fn default_max_entries() -> usize {
    256
}

/// Counters for cache operations.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CacheStats {
    /// Number of fresh lookups served from memory.
    pub hits: u64,
    /// Number of lookups that found nothing fresh.
    pub misses: u64,
    /// Number of answers written to the cache.
    pub stores: u64,
}
