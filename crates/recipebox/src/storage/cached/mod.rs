//! Cached repository decorator.
//!
//! This module provides a decorator that wraps a `RecipeRepository` with
//! caching behavior. It implements the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then invalidate the cached list
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("recipebox.db").await?);
//! let cache = Arc::new(MemoryCache::new(NonZeroUsize::new(1000).unwrap()));
//!
//! let cached_repo = CachedRecipeRepository::new(repo, cache, Deadlines::default());
//! ```

mod recipe;

pub use recipe::{CachedRecipeRepository, Deadlines};
