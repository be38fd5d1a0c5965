//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching hash-to-URL lookups on the redirect path.
///
/// Implementations must be thread-safe and fail open: a cache error degrades
/// to a database lookup, it never fails the request. Mappings are immutable,
/// so cached entries can only go stale by expiring, and no invalidation
/// operation is needed.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short hash from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_url(&self, short_hash: &str) -> CacheResult<Option<String>>;

    /// Stores a hash-to-URL mapping in cache with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `short_hash` - The short hash key
    /// - `original_url` - The full URL to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations log errors and
    /// return `Ok(())` to avoid disrupting the request flow.
    async fn set_url(
        &self,
        short_hash: &str,
        original_url: &str,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health check endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
