//! Cached recipe repository decorator.
//!
//! Wraps a `RecipeRepository` implementation with the cache-aside pattern.
//! Only the full listing is cached, under a single key with no expiry, so
//! every successful write must drop that key.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use recipebox_core::cache::{deserialize_recipes, recipes_key, serialize_recipes, Cache};
use recipebox_core::recipe::{Recipe, RecipeChanges};
use recipebox_core::storage::{RecipeRepository, RepositoryError, Result, TagMatch};

/// Upper bounds for a single cache or store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    pub cache: Duration,
    pub store: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            cache: Duration::from_millis(500),
            store: Duration::from_millis(5000),
        }
    }
}

/// Awaits `future`, failing with `RepositoryError::Timeout` once `limit` elapses.
async fn bounded<T, F>(operation: &'static str, limit: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => {
            let after_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            tracing::error!(operation, after_ms, "Deadline exceeded");
            Err(RepositoryError::Timeout {
                operation,
                after_ms,
            })
        }
    }
}

/// Cached recipe repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: `list_recipes` checks the cache first, on miss fetches from the
///   repository and populates the cache. Searches always go to the repository.
/// - **Writes**: Persist to repository, then delete the cached list.
///
/// A cache read failure fails the listing without touching the repository.
/// A cached value that does not decode is treated as a miss and overwritten.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedRecipeRepository<R, C>
where
    R: RecipeRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    deadlines: Deadlines,
}

impl<R, C> CachedRecipeRepository<R, C>
where
    R: RecipeRepository,
    C: Cache,
{
    /// Creates a new cached recipe repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `deadlines` - Per-call time limits for cache and repository calls
    pub fn new(repository: Arc<R>, cache: Arc<C>, deadlines: Deadlines) -> Self {
        Self {
            repository,
            cache,
            deadlines,
        }
    }

    /// Drops the cached listing after a successful write.
    ///
    /// The write to `recipe_id` is already committed when this fails, so the
    /// error log carries the id for reconciliation.
    async fn invalidate(&self, write: &'static str, recipe_id: Uuid) -> Result<()> {
        let key = recipes_key();
        bounded("cache delete", self.deadlines.cache, async {
            self.cache.delete(key).await.map_err(RepositoryError::from)
        })
        .await
        .inspect_err(|err| {
            tracing::error!(
                key,
                write,
                recipe_id = %recipe_id,
                error = %err,
                "Failed to invalidate recipes cache after committed write"
            );
        })
    }
}

#[async_trait]
impl<R, C> RecipeRepository for CachedRecipeRepository<R, C>
where
    R: RecipeRepository + 'static,
    C: Cache + 'static,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let key = recipes_key();

        // Check cache first
        let cached = bounded("cache get", self.deadlines.cache, async {
            self.cache.get(key).await.map_err(RepositoryError::from)
        })
        .await
        .inspect_err(|err| {
            tracing::error!(key, error = %err, "Cache read failed");
        })?;

        if let Some(bytes) = cached {
            match deserialize_recipes(&bytes) {
                Ok(recipes) => {
                    tracing::trace!(key, count = recipes.len(), "Cache hit for recipes");
                    return Ok(recipes);
                }
                // Deserialization failed - treat as cache miss
                Err(err) => tracing::warn!(key, error = %err, "Cached recipes failed to decode"),
            }
        }

        // Cache miss - fetch from repository
        tracing::trace!(key, "Cache miss for recipes");
        let recipes = bounded(
            "store list",
            self.deadlines.store,
            self.repository.list_recipes(),
        )
        .await?;

        // Populate cache
        match serialize_recipes(&recipes) {
            Ok(bytes) => {
                let stored = bounded("cache set", self.deadlines.cache, async {
                    self.cache
                        .set(key, &bytes)
                        .await
                        .map_err(RepositoryError::from)
                })
                .await;
                if let Err(err) = stored {
                    tracing::warn!(key, error = %err, "Failed to cache recipes");
                }
            }
            Err(err) => tracing::warn!(key, error = %err, "Failed to serialize recipes"),
        }

        Ok(recipes)
    }

    async fn search_recipes(&self, tag: &str, mode: TagMatch) -> Result<Vec<Recipe>> {
        bounded(
            "store search",
            self.deadlines.store,
            self.repository.search_recipes(tag, mode),
        )
        .await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        // 1. Persist to storage
        bounded(
            "store create",
            self.deadlines.store,
            self.repository.create_recipe(recipe),
        )
        .await?;

        // 2. Invalidate the cached listing
        self.invalidate("create", recipe.id).await?;

        tracing::debug!(recipe_id = %recipe.id, "Recipe created");
        Ok(())
    }

    async fn update_recipe(&self, id: Uuid, changes: &RecipeChanges) -> Result<()> {
        bounded(
            "store update",
            self.deadlines.store,
            self.repository.update_recipe(id, changes),
        )
        .await?;

        self.invalidate("update", id).await?;

        tracing::debug!(recipe_id = %id, "Recipe updated");
        Ok(())
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<()> {
        bounded(
            "store delete",
            self.deadlines.store,
            self.repository.delete_recipe(id),
        )
        .await?;

        self.invalidate("delete", id).await?;

        tracing::debug!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }
}
