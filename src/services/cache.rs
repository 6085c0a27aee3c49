// src/services/cache.rs
// DOCUMENTATION: Simple in-memory cache for content API responses
// PURPOSE: Reduce API calls by caching normalized payloads per upstream path

use crate::services::FormRateLimiter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Simple in-memory cache with TTL
/// DOCUMENTATION: Thread-safe cache of already-unwrapped JSON payloads
pub struct ContentCache {
    store: Arc<RwLock<HashMap<String, CacheEntry<Value>>>>,
    default_ttl: Duration,
}

impl ContentCache {
    /// Create new cache with default TTL
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Generate cache key from an upstream path
    pub fn generate_key(path: &str) -> String {
        format!("content:{}", path.trim_end_matches('/').to_ascii_lowercase())
    }

    /// Get cached value
    pub async fn get(&self, key: &str) -> Option<Value> {
        let store = self.store.read().await;

        if let Some(entry) = store.get(key) {
            if !entry.is_expired() {
                log::debug!("Cache HIT for key: {}", key);
                return Some(entry.data.clone());
            } else {
                log::debug!("Cache EXPIRED for key: {}", key);
            }
        } else {
            log::debug!("Cache MISS for key: {}", key);
        }

        None
    }

    /// Set cached value with default TTL
    pub async fn set(&self, key: String, value: Value) {
        self.set_with_ttl(key, value, self.default_ttl).await;
    }

    /// Set cached value with custom TTL
    pub async fn set_with_ttl(&self, key: String, value: Value, ttl: Duration) {
        let mut store = self.store.write().await;
        log::debug!("Cache SET for key: {} (TTL: {}s)", key, ttl.as_secs());
        store.insert(key, CacheEntry::new(value, ttl));
    }

    /// Remove one entry
    pub async fn remove(&self, key: &str) -> bool {
        let mut store = self.store.write().await;
        let removed = store.remove(key).is_some();
        if removed {
            log::debug!("Cache REMOVE for key: {}", key);
        }
        removed
    }

    /// Clear expired entries
    pub async fn cleanup(&self) {
        let mut store = self.store.write().await;
        let before_count = store.len();
        store.retain(|_, entry| !entry.is_expired());
        let after_count = store.len();

        if before_count > after_count {
            log::info!(
                "Cache cleanup: removed {} expired entries ({} remaining)",
                before_count - after_count,
                after_count
            );
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let total = store.len();
        let expired = store.values().filter(|e| e.is_expired()).count();

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }

    /// Clear all cache entries
    pub async fn clear(&self) -> usize {
        let mut store = self.store.write().await;
        let count = store.len();
        store.clear();
        log::info!("Cache cleared: {} entries removed", count);
        count
    }
}

/// Cache statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically removes expired cache entries and idle rate limit buckets
pub fn start_cleanup_task(
    cache: Arc<ContentCache>,
    limiter: Arc<FormRateLimiter>,
    interval_seconds: u64,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds.max(1)));

        loop {
            interval.tick().await;
            cache.cleanup().await;
            limiter.prune();
        }
    });
}
