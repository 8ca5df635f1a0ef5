// Answer cache tests - testing only public APIs

use gatordocs::cache::{cache_key, AnswerCache, CacheConfig};

#[test]
fn test_cache_config_defaults() {
    let config = CacheConfig::default();

    assert!(config.enabled); // Should be enabled by default
    assert_eq!(config.ttl_seconds, 900); // 15 minutes
    assert_eq!(config.max_entries, 256);
}

#[test]
fn test_cache_stats_initialization() {
    let cache = AnswerCache::new(&CacheConfig::default());
    let stats = cache.stats();

    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.stores, 0);
    assert!(cache.is_empty());
}

#[test]
fn test_store_then_lookup_roundtrip() {
    let cache = AnswerCache::new(&CacheConfig::default());
    let key = cache_key("Button", "How do I disable it?");

    cache.store(key.clone(), "Use the disabled prop.".to_string(), 1_000);
    assert_eq!(
        cache.lookup(&key, 2_000),
        Some("Use the disabled prop.".to_string())
    );
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_entry_expires_after_ttl() {
    let cache = AnswerCache::new(&CacheConfig::default());
    let key = cache_key("Button", "q");
    let ttl_ms = 900_000;

    cache.store(key.clone(), "answer".to_string(), 0);

    assert!(cache.lookup(&key, ttl_ms - 1).is_some());
    assert!(cache.lookup(&key, ttl_ms).is_none());
}

#[test]
fn test_clear_drops_everything() {
    let cache = AnswerCache::new(&CacheConfig::default());
    cache.store("a".to_string(), "1".to_string(), 0);
    cache.store("b".to_string(), "2".to_string(), 0);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.lookup("a", 1).is_none());
}
