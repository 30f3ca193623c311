//! In-process cache with per-entry expiry.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Cache backed by a `HashMap` behind an async `RwLock`.
///
/// Suitable for single-instance deployments without Redis. Expired entries
/// are dropped lazily on read and on the next write.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
    default_ttl: u64,
}

impl MemoryCache {
    pub fn new(default_ttl_seconds: u64) -> Self {
        debug!("Using MemoryCache (TTL: {}s)", default_ttl_seconds);
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: default_ttl_seconds,
        }
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => {
                    debug!("Cache HIT: {}", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => {
                    debug!("Cache MISS: {}", key);
                    return Ok(None);
                }
            }
        }

        // Expired: drop it unless a writer refreshed it in the meantime.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.expires_at <= now) {
            entries.remove(key);
        }
        debug!("Cache EXPIRED: {}", key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> CacheResult<()> {
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + Duration::from_secs(ttl_seconds),
            },
        );
        debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        if self.entries.write().await.remove(key).is_some() {
            debug!("Cache INVALIDATE: {}", key);
        }
        Ok(())
    }

    async fn invalidate_prefix(&self, prefix: &str) -> CacheResult<u64> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|k, _| !k.starts_with(prefix));
        let removed = (before - entries.len()) as u64;
        debug!("Cache INVALIDATE {}*: {} keys", prefix, removed);
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(60);
        cache.set("listing:rex", "{}", None).await.unwrap();

        assert_eq!(cache.get("listing:rex").await.unwrap().as_deref(), Some("{}"));
        assert!(cache.get("listing:other").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire() {
        let cache = MemoryCache::new(60);
        cache.set("listing:rex", "{}", Some(5)).await.unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;
        assert!(cache.get("listing:rex").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get("listing:rex").await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = MemoryCache::new(60);
        cache.set("listing:rex", "{}", None).await.unwrap();
        cache.invalidate("listing:rex").await.unwrap();

        assert!(cache.get("listing:rex").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_prefix() {
        let cache = MemoryCache::new(60);
        cache.set("listing:rex", "{}", None).await.unwrap();
        cache.set("listing:bella", "{}", None).await.unwrap();
        cache.set("organization:paws", "{}", None).await.unwrap();

        let removed = cache.invalidate_prefix("listing:").await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("organization:paws").await.unwrap().is_some());
    }
}
