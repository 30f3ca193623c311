//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

const KEY_PREFIX: &str = "seo:";
/// `COUNT` hint for each `SCAN` page during prefix invalidation.
const SCAN_BATCH_SIZE: usize = 500;

/// Redis cache for entity payloads.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// All operations are fail-open: errors are logged but don't propagate to callers.
/// Keys are namespaced under `seo:` so prefix invalidation never touches
/// foreign data in a shared Redis.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: KEY_PREFIX.to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(Some(value)) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(value))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&full_key, value, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&full_key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", key);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    /// Deletes matching keys batch by batch with `SCAN`, so a large
    /// namespace never blocks the server the way `KEYS` would.
    async fn invalidate_prefix(&self, prefix: &str) -> CacheResult<u64> {
        let pattern = format!("{}*", self.build_key(prefix));
        let mut conn = self.client.clone();
        let mut cursor: u64 = 0;
        let mut deleted: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = match redis::cmd("SCAN")
                .cursor_arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!("Redis SCAN error for {}: {}", pattern, e);
                    return Ok(deleted);
                }
            };

            if !keys.is_empty() {
                match conn.del::<_, u64>(&keys).await {
                    Ok(count) => deleted += count,
                    Err(e) => {
                        warn!("Redis DEL error for {}*: {}", prefix, e);
                        return Ok(deleted);
                    }
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!("Cache INVALIDATE {}*: {} keys", prefix, deleted);
        Ok(deleted)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires REDIS_URL and a running Redis"]
    async fn test_invalidate_prefix_removes_every_batch() {
        let Ok(url) = std::env::var("REDIS_URL") else {
            eprintln!("skipping: REDIS_URL not set");
            return;
        };
        let cache = RedisCache::connect(&url, 60).await.unwrap();

        let total = SCAN_BATCH_SIZE * 2 + 7;
        for i in 0..total {
            cache
                .set(&format!("test-prefix:{i}"), "{}", None)
                .await
                .unwrap();
        }
        cache.set("test-other:keep", "{}", None).await.unwrap();

        let removed = cache.invalidate_prefix("test-prefix:").await.unwrap();

        assert_eq!(removed, total as u64);
        assert!(cache.get("test-prefix:0").await.unwrap().is_none());
        assert!(cache.get("test-other:keep").await.unwrap().is_some());

        cache.invalidate("test-other:keep").await.unwrap();
    }
}
