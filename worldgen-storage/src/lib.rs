//! World Gen Storage - Store Traits and Backends
//!
//! Two independent collaborators back the service:
//!
//! - [`CacheStore`]: key-value store with counters, lists and expiry
//!   (Redis in production).
//! - [`DurableStore`]: relational store for persisted worlds
//!   (PostgreSQL in production).
//!
//! Both have full in-memory implementations used by tests and by the
//! service's in-process mode.

pub mod filter;
pub mod memory;
pub mod postgres;
pub mod redis_cache;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use worldgen_core::World;

pub use filter::WorldFilter;
pub use memory::{InMemoryCacheStore, InMemoryDurableStore};
pub use postgres::{PostgresDurableStore, PostgresSettings};
pub use redis_cache::RedisCacheStore;

// ============================================================================
// ERRORS
// ============================================================================

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{store} error: {reason}")]
    Backend { store: &'static str, reason: String },

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn backend(store: &'static str, reason: impl ToString) -> Self {
        StoreError::Backend {
            store,
            reason: reason.to_string(),
        }
    }
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        StoreError::backend("postgres", err)
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::backend("postgres", err)
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::backend("redis", err)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// CACHE STORE
// ============================================================================

/// Key-value store with atomic counters, lists and key expiry.
///
/// Every operation is a single round trip. Atomicity of `incr` is the
/// store's responsibility; callers never emulate it with get-then-set.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a value. `None` on a miss.
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Store a value, optionally expiring after `ttl`. `None` never expires.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> StoreResult<()>;

    /// Atomically increment a counter, creating it at zero first if absent.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Arm an expiry on an existing key.
    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()>;

    /// Insert at the head of a list.
    async fn list_push_head(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Keep only the inclusive `[start, stop]` range of a list.
    ///
    /// Negative indexes count from the tail, as in Redis.
    async fn list_trim(&self, key: &str, start: isize, stop: isize) -> StoreResult<()>;

    /// Read the inclusive `[start, stop]` range of a list.
    async fn list_range(&self, key: &str, start: isize, stop: isize) -> StoreResult<Vec<Vec<u8>>>;

    /// Liveness probe.
    async fn ping(&self) -> StoreResult<()>;
}

// ============================================================================
// DURABLE STORE
// ============================================================================

/// Relational store of persisted worlds.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Persist a world's fields and return the assigned id.
    async fn insert(&self, world: &World) -> StoreResult<i64>;

    /// Fetch a persisted world. `None` when no row has this id.
    async fn query_by_id(&self, id: i64) -> StoreResult<Option<World>>;

    /// Number of rows matching the filter.
    async fn count(&self, filter: &WorldFilter) -> StoreResult<i64>;

    /// Matching rows, newest first.
    async fn query_page(&self, filter: &WorldFilter, limit: i64, offset: i64) -> StoreResult<Vec<World>>;

    /// Liveness probe.
    async fn ping(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::backend("redis", "connection refused");
        assert_eq!(err.to_string(), "redis error: connection refused");
    }
}
