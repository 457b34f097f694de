use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. A missing key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores a value until it is deleted (or evicted by the backend).
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> Result<()>;
}
