//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `RecipeRepository`
//! trait defined in `recipebox_core::storage`. The backend is selected at
//! compile time via feature flags, and is always wrapped in the cache-aside
//! decorator from [`cached`].
//!
//! # Feature Flags
//!
//! - `inmemory` (default): Process-local storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite and Redis:
//! ```bash
//! cargo build -p recipebox --no-default-features --features sqlite,redis
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p recipebox --features sqlite"
);

pub mod cached;

// Tests always run against the in-memory backend
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

/// Name of the compiled-in storage backend.
#[cfg(feature = "inmemory")]
pub const BACKEND: &str = "inmemory";

/// Name of the compiled-in storage backend.
#[cfg(feature = "sqlite")]
pub const BACKEND: &str = "sqlite";
