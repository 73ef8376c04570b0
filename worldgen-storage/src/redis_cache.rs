//! Redis cache store.
//!
//! A single multiplexed `ConnectionManager` is shared by all requests.
//! Handles are cloned per call; the manager reconnects on its own, but this
//! layer never retries a failed command.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};

use crate::{CacheStore, StoreResult};

/// [`CacheStore`] backed by Redis.
#[derive(Clone)]
pub struct RedisCacheStore {
    connection: ConnectionManager,
}

impl RedisCacheStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }

    /// Open a managed connection to `redis_url`.
    pub async fn connect(redis_url: &str, timeout: Duration) -> StoreResult<Self> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(timeout);

        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager_with_config(config).await?;
        Ok(Self::new(connection))
    }

    fn conn(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = self.conn().get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> StoreResult<()> {
        let mut conn = self.conn();
        match ttl {
            Some(ttl) => {
                let _: () = conn.set_ex(key, value, ttl.as_secs().max(1)).await?;
            }
            None => {
                let _: () = conn.set(key, value).await?;
            }
        }
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let count: i64 = self.conn().incr(key, 1i64).await?;
        Ok(count)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()> {
        let seconds = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX).max(1);
        let _: bool = self.conn().expire(key, seconds).await?;
        Ok(())
    }

    async fn list_push_head(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let _: i64 = self.conn().lpush(key, value).await?;
        Ok(())
    }

    async fn list_trim(&self, key: &str, start: isize, stop: isize) -> StoreResult<()> {
        let _: () = self.conn().ltrim(key, start, stop).await?;
        Ok(())
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> StoreResult<Vec<Vec<u8>>> {
        let items: Vec<Vec<u8>> = self.conn().lrange(key, start, stop).await?;
        Ok(items)
    }

    async fn ping(&self) -> StoreResult<()> {
        let _: String = redis::cmd("PING").query_async(&mut self.conn()).await?;
        Ok(())
    }
}
