//! Store bootstrap.
//!
//! Each store is probed once at startup. A store that cannot be reached is
//! logged and left out; the repository never consults it afterwards.

use std::sync::Arc;
use std::time::Duration;

use worldgen_core::{ContentTables, Generator};
use worldgen_storage::{
    CacheStore, DurableStore, InMemoryCacheStore, InMemoryDurableStore, PostgresDurableStore,
    PostgresSettings, RedisCacheStore, StoreResult,
};

use crate::config::{StoreConfig, StoreMode};
use crate::error::ApiResult;

const REDIS_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The stores that answered at startup.
#[derive(Clone, Default)]
pub struct Stores {
    pub cache: Option<Arc<dyn CacheStore>>,
    pub durable: Option<Arc<dyn DurableStore>>,
}

impl Stores {
    /// In-process stores for both roles.
    pub fn in_memory() -> Self {
        Self {
            cache: Some(Arc::new(InMemoryCacheStore::new())),
            durable: Some(Arc::new(InMemoryDurableStore::new())),
        }
    }

    /// Connect the stores named by `config`.
    pub async fn connect(config: &StoreConfig) -> Self {
        if config.mode == StoreMode::Memory {
            tracing::info!("Running against in-process stores");
            return Self::in_memory();
        }

        let durable = match &config.database_url {
            Some(url) => match connect_postgres(url, config).await {
                Ok(store) => {
                    tracing::info!("Connected to PostgreSQL");
                    Some(Arc::new(store) as Arc<dyn DurableStore>)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "PostgreSQL unavailable, running without durable store");
                    None
                }
            },
            None => {
                tracing::warn!("WORLDGEN_DATABASE_URL not set, running without durable store");
                None
            }
        };

        let cache = match connect_redis(&config.redis_url).await {
            Ok(store) => {
                tracing::info!(url = %config.redis_url, "Connected to Redis");
                Some(Arc::new(store) as Arc<dyn CacheStore>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Redis unavailable, running without cache");
                None
            }
        };

        Self { cache, durable }
    }
}

async fn connect_postgres(url: &str, config: &StoreConfig) -> StoreResult<PostgresDurableStore> {
    let mut settings = PostgresSettings::new(url);
    settings.max_size = config.db_pool_size;
    settings.timeout = config.db_timeout;

    let store = PostgresDurableStore::from_settings(&settings)?;
    store.migrate().await?;
    store.ping().await?;
    Ok(store)
}

async fn connect_redis(url: &str) -> StoreResult<RedisCacheStore> {
    let store = RedisCacheStore::connect(url, REDIS_CONNECT_TIMEOUT).await?;
    store.ping().await?;
    Ok(store)
}

/// Build the generator from the configured content tables.
pub fn load_generator(config: &StoreConfig) -> ApiResult<Generator> {
    let tables = match &config.content_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading content tables");
            ContentTables::from_json_file(path)?
        }
        None => ContentTables::builtin(),
    };
    Ok(Generator::new(Arc::new(tables))?)
}
