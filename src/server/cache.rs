//! Redis read-through cache for single-entity lookups.
//!
//! Values are stored as JSON under `<entity>:<uuid>` keys with a fixed TTL. The cache
//! never fails a request: Redis or (de)serialization errors are logged at `warn` and
//! the caller falls back to the database.

use redis::{aio::ConnectionManager, Client};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

#[derive(Clone)]
pub struct Cache {
    /// `None` when caching is disabled.
    conn: Option<ConnectionManager>,
    ttl_seconds: u64,
}

impl Cache {
    /// Creates a cache on which every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            conn: None,
            ttl_seconds: 0,
        }
    }

    /// Connects to Redis at `url`.
    ///
    /// # Arguments
    /// - `url` - Redis connection URL such as `redis://localhost:6379`
    /// - `ttl_seconds` - Expiry applied to every stored entry
    ///
    /// # Returns
    /// - `Ok(Cache)` - Connected cache
    /// - `Err(RedisError)` - Invalid URL or Redis unreachable
    pub async fn connect(url: &str, ttl_seconds: u64) -> Result<Self, redis::RedisError> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn: Some(conn),
            ttl_seconds,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.conn.is_some()
    }

    /// Builds the key an entity is cached under.
    pub fn key(entity: &str, id: Uuid) -> String {
        format!("{}:{}", entity, id)
    }

    /// Looks up a cached value, returning `None` on a miss or any failure.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut conn = self.conn.clone()?;

        let raw = match redis::cmd("GET")
            .arg(key)
            .query_async::<Option<String>>(&mut conn)
            .await
        {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Cache read for {} failed: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                self.invalidate(key).await;
                None
            }
        }
    }

    /// Stores a value with the configured TTL.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let Some(mut conn) = self.conn.clone() else {
            return;
        };

        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to encode cache entry {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = redis::cmd("SETEX")
            .arg(key)
            .arg(self.ttl_seconds)
            .arg(raw)
            .query_async::<()>(&mut conn)
            .await
        {
            tracing::warn!("Cache write for {} failed: {}", key, e);
        }
    }

    /// Removes a key after the underlying row changed.
    pub async fn invalidate(&self, key: &str) {
        let Some(mut conn) = self.conn.clone() else {
            return;
        };

        if let Err(e) = redis::cmd("DEL").arg(key).query_async::<()>(&mut conn).await {
            tracing::warn!("Cache invalidation for {} failed: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_entity_scoped_keys() {
        let id = Uuid::nil();

        assert_eq!(
            Cache::key("patient", id),
            "patient:00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn disabled_cache_is_a_no_op() {
        let cache = Cache::disabled();
        let key = Cache::key("role", Uuid::new_v4());

        cache.set(&key, &"value").await;

        assert!(!cache.is_enabled());
        assert_eq!(cache.get::<String>(&key).await, None);
    }
}
