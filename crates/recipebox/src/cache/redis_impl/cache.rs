//! Redis cache implementation.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use recipebox_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Shared cache for deployments running several recipebox instances.
///
/// Values are stored as plain Redis strings without expiry.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to `url` (e.g. `redis://localhost:6379`).
    ///
    /// The connection manager establishes the first connection eagerly, so an
    /// unreachable server fails here instead of on the first request.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        tracing::info!(url, "Connected to Redis cache");
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(map_redis_error)?;
        tracing::trace!(key, removed, "Deleted cache key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::cache::{deserialize_recipes, serialize_recipes};
    use recipebox_core::recipe::Recipe;
    use uuid::Uuid;

    /// Connects to `REDIS_URL`, or `None` when no server is reachable.
    async fn connect() -> Option<RedisCache> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        RedisCache::new(&url).await.ok()
    }

    /// A key no other test run will touch.
    fn scratch_key(label: &str) -> String {
        format!("recipebox-test:{label}:{}", Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_redis_recipe_listing_roundtrip() {
        let Some(cache) = connect().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };
        let key = scratch_key("listing");
        let recipes = vec![Recipe::new("Tea").with_tags(["drink"]), Recipe::new("Toast")];

        let bytes = serialize_recipes(&recipes).unwrap();
        cache.set(&key, &bytes).await.unwrap();

        let cached = cache.get(&key).await.unwrap().unwrap();
        assert_eq!(deserialize_recipes(&cached).unwrap(), recipes);

        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_missing_key() {
        let Some(cache) = connect().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        assert_eq!(cache.get(&scratch_key("missing")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_invalidate() {
        let Some(cache) = connect().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };
        let key = scratch_key("invalidate");

        cache.set(&key, b"[]").await.unwrap();
        cache.delete(&key).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_none());

        // A second invalidation finds nothing and still succeeds
        cache.delete(&key).await.unwrap();
    }
}
