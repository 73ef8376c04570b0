//! Cache-aside world repository.
//!
//! Coordinates the generator with an optional durable store and an optional
//! cache store. Store liveness is decided once at startup: a `None` store is
//! never consulted. Writes are best-effort dual writes with no transaction
//! spanning the two stores; point lookups read-repair the cache.
//!
//! | Operation   | Durable store        | Cache store                      |
//! |-------------|----------------------|----------------------------------|
//! | `create`    | insert (best-effort) | history push/trim, point write   |
//! | `get_by_id` | fallback on miss     | first; repaired after fallback   |
//! | `search`    | required             | never consulted                  |
//! | `history`   | never consulted      | required, empty when absent      |

use std::sync::Arc;

use thiserror::Error;
use worldgen_core::{Generator, World};
use worldgen_storage::{CacheStore, DurableStore, StoreError, WorldFilter};

/// Cache key of the recent-history list.
pub const HISTORY_KEY: &str = "world-history";

/// Cache key of a single persisted world.
pub fn world_key(id: i64) -> String {
    format!("world:{}", id)
}

/// Failures that exhausted every fallback.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("world with ID {id} not found")]
    NotFound { id: i64 },

    #[error("no store available")]
    StoreUnavailable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates generation, persistence, caching and history.
#[derive(Clone)]
pub struct WorldRepository {
    generator: Arc<Generator>,
    cache: Option<Arc<dyn CacheStore>>,
    durable: Option<Arc<dyn DurableStore>>,
    history_limit: usize,
}

impl WorldRepository {
    pub fn new(
        generator: Arc<Generator>,
        cache: Option<Arc<dyn CacheStore>>,
        durable: Option<Arc<dyn DurableStore>>,
        history_limit: usize,
    ) -> Self {
        Self {
            generator,
            cache,
            durable,
            history_limit: history_limit.max(1),
        }
    }

    pub fn cache(&self) -> Option<&Arc<dyn CacheStore>> {
        self.cache.as_ref()
    }

    pub fn durable(&self) -> Option<&Arc<dyn DurableStore>> {
        self.durable.as_ref()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    // ========================================================================
    // CREATE
    // ========================================================================

    /// Generate a world and record it in whichever stores are live.
    ///
    /// Store failures are logged and absorbed; the generated world is always
    /// returned. The durable insert completes before the cache write so a
    /// cached snapshot carries the assigned id when there is one.
    pub async fn create(&self, theme: &str) -> World {
        let mut world = self.generator.generate(theme);

        if let Some(durable) = &self.durable {
            match durable.insert(&world).await {
                Ok(id) => world.id = Some(id),
                Err(e) => tracing::warn!(error = %e, "Failed to persist world"),
            }
        }

        if let Some(cache) = &self.cache {
            self.record(cache.as_ref(), &world).await;
        }

        tracing::debug!(id = ?world.id, theme = %world.theme, climate = %world.climate, "World created");
        world
    }

    async fn record(&self, cache: &dyn CacheStore, world: &World) {
        let snapshot = match serde_json::to_vec(world) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize world");
                return;
            }
        };

        if let Err(e) = cache.list_push_head(HISTORY_KEY, &snapshot).await {
            tracing::warn!(error = %e, "Failed to push world onto history");
        }
        let stop = isize::try_from(self.history_limit).unwrap_or(isize::MAX) - 1;
        if let Err(e) = cache.list_trim(HISTORY_KEY, 0, stop).await {
            tracing::warn!(error = %e, "Failed to trim history");
        }

        if let Some(id) = world.id.filter(|id| *id > 0) {
            if let Err(e) = cache.set(&world_key(id), &snapshot, None).await {
                tracing::warn!(id, error = %e, "Failed to cache world");
            }
        }
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Fetch a world: cache first, then the durable store with read-repair.
    pub async fn get_by_id(&self, id: i64) -> Result<World, RepositoryError> {
        let key = world_key(id);

        if let Some(cache) = &self.cache {
            match cache.get(&key).await {
                Ok(Some(bytes)) => match serde_json::from_slice::<World>(&bytes) {
                    Ok(world) => return Ok(world),
                    Err(e) => tracing::warn!(id, error = %e, "Discarding undecodable cached world"),
                },
                Ok(None) => {}
                Err(e) => tracing::warn!(id, error = %e, "Cache lookup failed, falling back"),
            }
        }

        let Some(durable) = &self.durable else {
            return Err(RepositoryError::StoreUnavailable);
        };

        let world = durable
            .query_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound { id })?;

        if let Some(cache) = &self.cache {
            match serde_json::to_vec(&world) {
                Ok(bytes) => {
                    if let Err(e) = cache.set(&key, &bytes, None).await {
                        tracing::warn!(id, error = %e, "Cache read-repair failed");
                    }
                }
                Err(e) => tracing::warn!(id, error = %e, "Failed to serialize world"),
            }
        }

        Ok(world)
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    /// Filtered, paginated search against the durable store.
    ///
    /// Returns the page and the total number of matching rows. The count and
    /// the page are separate queries and may disagree under concurrent writes.
    pub async fn search(
        &self,
        filter: &WorldFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<World>, i64), RepositoryError> {
        let durable = self.durable.as_ref().ok_or(RepositoryError::StoreUnavailable)?;

        let total = durable.count(filter).await?;
        let worlds = durable.query_page(filter, limit, offset).await?;
        Ok((worlds, total))
    }

    // ========================================================================
    // HISTORY
    // ========================================================================

    /// Recently created worlds, most recent first.
    ///
    /// Empty when the cache is absent. Entries that fail to decode are
    /// skipped.
    pub async fn history(&self) -> Result<Vec<World>, RepositoryError> {
        let Some(cache) = &self.cache else {
            return Ok(Vec::new());
        };

        let entries = cache.list_range(HISTORY_KEY, 0, -1).await?;
        Ok(entries
            .iter()
            .filter_map(|bytes| match serde_json::from_slice::<World>(bytes) {
                Ok(world) => Some(world),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable history entry");
                    None
                }
            })
            .collect())
    }
}
