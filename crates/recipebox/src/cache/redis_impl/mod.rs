//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! Connections go through a `ConnectionManager`, which reconnects on failure.

mod cache;
mod error;

pub use cache::RedisCache;
