// Answer cache - TTL-checked storage keyed by exact subject:question pairs

use crate::cache::models::{CacheConfig, CacheStats};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    answer_text: String,
    created_at_ms: i64,
}

/// In-memory cache of successful answers.
///
/// Freshness is checked lazily at lookup time against the entry's creation
/// timestamp; stale entries are not purged, they are simply ignored and
/// overwritten by the next store for the same key. The map itself is bounded
/// by LRU eviction so the process cannot grow without limit.
///
/// The clock is an explicit `now_ms` argument (milliseconds since epoch) so
/// expiry can be exercised in tests without waiting.
pub struct AnswerCache {
    enabled: bool,
    ttl_ms: i64,
    entries: Mutex<LruCache<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
    stores: AtomicU64,
}

/// Cache key for a question about a subject: exact concatenation, no
/// normalization of case or whitespace.
pub fn cache_key(subject: &str, question: &str) -> String {
    format!("{subject}:{question}")
}

impl AnswerCache {
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            enabled: config.enabled,
            ttl_ms: config.ttl_seconds as i64 * 1000,
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            stores: AtomicU64::new(0),
        }
    }

    /// Return the stored answer if one exists and is still fresh, i.e.
    /// `now_ms - created_at_ms < ttl_ms`. A stale entry behaves as absent.
    pub fn lookup(&self, key: &str, now_ms: i64) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let mut entries = self.entries.lock();
        // Peek first so a stale entry does not gain LRU recency; only a
        // confirmed-fresh hit counts as a use.
        if let Some(entry) = entries.peek(key) {
            if now_ms - entry.created_at_ms < self.ttl_ms {
                let answer = entry.answer_text.clone();
                entries.promote(key);
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {key}");
                return Some(answer);
            }
            debug!("Cache entry expired for key: {key}");
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Insert or overwrite the answer for a key unconditionally.
    pub fn store(&self, key: String, answer_text: String, now_ms: i64) {
        if !self.enabled {
            return;
        }

        self.entries.lock().put(
            key,
            CacheEntry {
                answer_text,
                created_at_ms: now_ms,
            },
        );
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of entries currently held, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of the hit/miss/store counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
        }
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
        debug!("Cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL_MS: i64 = 900_000;

    fn cache() -> AnswerCache {
        AnswerCache::new(&CacheConfig::default())
    }

    #[test]
    fn test_key_is_exact_concatenation() {
        assert_eq!(cache_key("Button", "How wide?"), "Button:How wide?");
        // No normalization: case and whitespace are significant.
        assert_ne!(cache_key("button", "q"), cache_key("Button", "q"));
        assert_ne!(cache_key("Button", " q"), cache_key("Button", "q"));
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let cache = cache();
        cache.store("Button:q".to_string(), "answer".to_string(), 1_000);

        assert_eq!(cache.lookup("Button:q", 2_000), Some("answer".to_string()));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_entry_stale_at_exact_ttl() {
        let cache = cache();
        cache.store("k".to_string(), "a".to_string(), 0);

        // Fresh strictly below the TTL, stale at and beyond it.
        assert!(cache.lookup("k", TTL_MS - 1).is_some());
        assert!(cache.lookup("k", TTL_MS).is_none());
        assert!(cache.lookup("k", TTL_MS + 1).is_none());
    }

    #[test]
    fn test_stale_entry_is_not_purged_until_overwritten() {
        let cache = cache();
        cache.store("k".to_string(), "old".to_string(), 0);

        assert!(cache.lookup("k", TTL_MS).is_none());
        assert_eq!(cache.len(), 1);

        cache.store("k".to_string(), "new".to_string(), TTL_MS);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup("k", TTL_MS + 1), Some("new".to_string()));
    }

    #[test]
    fn test_disabled_cache_never_stores() {
        let cache = AnswerCache::new(&CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        });
        cache.store("k".to_string(), "a".to_string(), 0);

        assert!(cache.lookup("k", 1).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let cache = AnswerCache::new(&CacheConfig {
            max_entries: 2,
            ..CacheConfig::default()
        });
        cache.store("a".to_string(), "1".to_string(), 0);
        cache.store("b".to_string(), "2".to_string(), 0);
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.lookup("a", 1).is_some());
        cache.store("c".to_string(), "3".to_string(), 0);

        assert_eq!(cache.len(), 2);
        assert!(cache.lookup("b", 1).is_none());
        assert!(cache.lookup("a", 1).is_some());
        assert!(cache.lookup("c", 1).is_some());
    }

    #[test]
    fn test_stale_lookup_does_not_gain_recency() {
        let cache = AnswerCache::new(&CacheConfig {
            max_entries: 2,
            ..CacheConfig::default()
        });
        cache.store("old".to_string(), "1".to_string(), 0);
        cache.store("fresh".to_string(), "2".to_string(), TTL_MS);

        // Stale miss on "old" must leave it as the eviction candidate.
        assert!(cache.lookup("old", TTL_MS).is_none());
        cache.store("newer".to_string(), "3".to_string(), TTL_MS);

        assert_eq!(cache.len(), 2);
        assert!(cache.lookup("old", TTL_MS).is_none());
        assert!(cache.lookup("fresh", TTL_MS + 1).is_some());
        assert!(cache.lookup("newer", TTL_MS + 1).is_some());
    }

    #[test]
    fn test_stats_count_misses() {
        let cache = cache();
        assert!(cache.lookup("missing", 0).is_none());
        assert!(cache.lookup("missing", 0).is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.stores, 0);
    }
}
