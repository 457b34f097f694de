use std::{env, num::NonZeroUsize, path::PathBuf, time::Duration};

use recipebox_core::storage::TagMatch;

use crate::storage::cached::Deadlines;

const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(1_000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of in-memory cache entries (default: 1,000)
    #[cfg_attr(not(feature = "memory"), allow(dead_code))]
    pub cache_max_entries: NonZeroUsize,
    /// Deadline for a single cache call in milliseconds (default: 500)
    pub cache_timeout_ms: u64,
    /// Deadline for a single storage call in milliseconds (default: 5,000)
    pub store_timeout_ms: u64,
    /// Whether tag search ignores case (default: false)
    pub tag_search_case_insensitive: bool,
    /// Path to SQLite database file (default: "recipebox.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// JSON file of recipes inserted at startup (default: none)
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 1,000)
    /// - `CACHE_TIMEOUT_MS` - Cache call deadline (default: 500)
    /// - `STORE_TIMEOUT_MS` - Storage call deadline (default: 5,000)
    /// - `TAG_SEARCH_CASE_INSENSITIVE` - `true` or `1` to ignore case (default: false)
    /// - `SQLITE_PATH` - SQLite database path (default: "recipebox.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `SEED_FILE` - Recipes to insert at startup (default: unset)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            cache_timeout_ms: env::var("CACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            store_timeout_ms: env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5_000),
            tag_search_case_insensitive: env::var("TAG_SEARCH_CASE_INSENSITIVE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "recipebox.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            seed_file: env::var("SEED_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Per-call deadlines for the cached repository.
    pub fn deadlines(&self) -> Deadlines {
        Deadlines {
            cache: Duration::from_millis(self.cache_timeout_ms),
            store: Duration::from_millis(self.store_timeout_ms),
        }
    }

    /// Tag comparison used by search.
    pub fn tag_match(&self) -> TagMatch {
        TagMatch::from_case_insensitive(self.tag_search_case_insensitive)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
