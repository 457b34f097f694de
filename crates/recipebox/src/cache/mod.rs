//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `Cache` trait
//! defined in `recipebox_core::cache`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-process LRU cache
//! - `redis`: Redis cache using the redis crate
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p recipebox --features memory"
);

// Tests always run against the in-memory backend
#[cfg(any(feature = "memory", test))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;

/// Name of the compiled-in cache backend.
#[cfg(feature = "memory")]
pub const BACKEND: &str = "memory";

/// Name of the compiled-in cache backend.
#[cfg(feature = "redis")]
pub const BACKEND: &str = "redis";
