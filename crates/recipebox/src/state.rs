//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage and cache backends are chosen at compile
//! time via feature flags and combined behind the cached repository.

use std::sync::Arc;

use recipebox_auth::AuthState;
use recipebox_core::storage::{RecipeRepository, TagMatch};

use crate::config::Config;
use crate::storage::cached::CachedRecipeRepository;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Recipe repository (cached, wraps underlying storage).
    pub recipes: Arc<dyn RecipeRepository>,
    /// Authorization for write routes.
    pub auth: AuthState,
    /// Tag comparison used by search.
    pub tag_match: TagMatch,
}

impl AppState {
    /// Creates AppState with the compiled-in storage and cache backends.
    pub async fn new(config: &Config, auth: AuthState) -> Result<Self, anyhow::Error> {
        let repository = backends::open_storage(config).await?;
        let cache = backends::open_cache(config).await?;

        let recipes = Arc::new(CachedRecipeRepository::new(
            repository,
            cache,
            config.deadlines(),
        ));

        tracing::info!(
            storage = crate::storage::BACKEND,
            cache = crate::cache::BACKEND,
            "Backends ready"
        );

        Ok(Self::build(recipes, auth, config.tag_match()))
    }

    pub fn build(
        recipes: Arc<dyn RecipeRepository>,
        auth: AuthState,
        tag_match: TagMatch,
    ) -> Self {
        Self {
            recipes,
            auth,
            tag_match,
        }
    }
}

// ============================================================================
// Backend constructors, one per feature
// ============================================================================

mod backends {
    use std::sync::Arc;

    use crate::config::Config;

    #[cfg(feature = "inmemory")]
    pub async fn open_storage(
        _config: &Config,
    ) -> Result<Arc<crate::storage::InMemoryRepository>, anyhow::Error> {
        Ok(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    #[cfg(feature = "sqlite")]
    pub async fn open_storage(
        config: &Config,
    ) -> Result<Arc<crate::storage::SqliteRepository>, anyhow::Error> {
        Ok(Arc::new(
            crate::storage::SqliteRepository::new(&config.sqlite_path).await?,
        ))
    }

    #[cfg(feature = "memory")]
    pub async fn open_cache(
        config: &Config,
    ) -> Result<Arc<crate::cache::MemoryCache>, anyhow::Error> {
        Ok(Arc::new(crate::cache::MemoryCache::new(
            config.cache_max_entries,
        )))
    }

    #[cfg(feature = "redis")]
    pub async fn open_cache(
        config: &Config,
    ) -> Result<Arc<crate::cache::RedisCache>, anyhow::Error> {
        Ok(Arc::new(
            crate::cache::RedisCache::new(&config.redis_url).await?,
        ))
    }
}

// ============================================================================
// Test support
// ============================================================================
