//! In-process store implementations.
//!
//! Both stores are cheap to clone; clones share state, so a test can keep a
//! handle for inspection and fault injection after handing one to the
//! service. The cache tracks expiry against a simulated clock that only moves
//! when [`InMemoryCacheStore::advance`] is called.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use worldgen_core::World;

use crate::{CacheStore, DurableStore, StoreError, StoreResult, WorldFilter};

fn injected(store: &'static str) -> StoreError {
    StoreError::backend(store, "injected failure")
}

/// Resolve a Redis-style inclusive range against a list length.
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}

// ============================================================================
// CACHE
// ============================================================================

#[derive(Debug, Clone)]
enum Value {
    Bytes(Vec<u8>),
    List(VecDeque<Vec<u8>>),
}

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Option<Duration>,
}

#[derive(Debug, Default)]
struct CacheState {
    now: Duration,
    entries: HashMap<String, Entry>,
}

impl CacheState {
    /// Drop the key if its expiry has passed, then return it.
    fn live(&mut self, key: &str) -> Option<&mut Entry> {
        let now = self.now;
        if self
            .entries
            .get(key)
            .is_some_and(|entry| entry.expires_at.is_some_and(|at| at <= now))
        {
            self.entries.remove(key);
        }
        self.entries.get_mut(key)
    }
}

fn wrong_type(key: &str) -> StoreError {
    StoreError::backend(
        "memory-cache",
        format!("WRONGTYPE operation against key {} holding the wrong kind of value", key),
    )
}

/// In-memory [`CacheStore`] with a simulated clock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCacheStore {
    state: Arc<RwLock<CacheState>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the simulated clock forward, expiring keys whose TTL elapses.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut state) = self.state.write() {
            state.now += by;
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Whether a live (unexpired) key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.state
            .write()
            .map(|mut state| state.live(key).is_some())
            .unwrap_or(false)
    }

    /// Remaining time to live of a key, if it has one.
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let mut state = self.state.write().ok()?;
        let now = state.now;
        let expires_at = state.live(key)?.expires_at?;
        Some(expires_at.saturating_sub(now))
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) {
        if let Ok(mut state) = self.state.write() {
            state.entries.remove(key);
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(injected("memory-cache"));
        }
        Ok(())
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, CacheState>> {
        self.check()?;
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let mut state = self.write()?;
        match state.live(key) {
            None => Ok(None),
            Some(Entry {
                value: Value::Bytes(bytes),
                ..
            }) => Ok(Some(bytes.clone())),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> StoreResult<()> {
        let mut state = self.write()?;
        let expires_at = ttl.map(|ttl| state.now + ttl);
        state.entries.insert(
            key.to_string(),
            Entry {
                value: Value::Bytes(value.to_vec()),
                expires_at,
            },
        );
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut state = self.write()?;
        if state.live(key).is_none() {
            state.entries.insert(
                key.to_string(),
                Entry {
                    value: Value::Bytes(b"0".to_vec()),
                    expires_at: None,
                },
            );
        }

        let Some(Entry {
            value: Value::Bytes(bytes),
            ..
        }) = state.live(key)
        else {
            return Err(wrong_type(key));
        };
        let current: i64 = std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| {
                StoreError::backend("memory-cache", "value is not an integer or out of range")
            })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StoreError::backend("memory-cache", "increment would overflow"))?;
        *bytes = next.to_string().into_bytes();
        Ok(next)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()> {
        let mut state = self.write()?;
        let now = state.now;
        if let Some(entry) = state.live(key) {
            entry.expires_at = Some(now + ttl);
        }
        Ok(())
    }

    async fn list_push_head(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut state = self.write()?;
        if state.live(key).is_none() {
            state.entries.insert(
                key.to_string(),
                Entry {
                    value: Value::List(VecDeque::new()),
                    expires_at: None,
                },
            );
        }
        match state.live(key) {
            Some(Entry {
                value: Value::List(list),
                ..
            }) => {
                list.push_front(value.to_vec());
                Ok(())
            }
            _ => Err(wrong_type(key)),
        }
    }

    async fn list_trim(&self, key: &str, start: isize, stop: isize) -> StoreResult<()> {
        let mut state = self.write()?;
        let keep = match state.live(key) {
            None => return Ok(()),
            Some(Entry {
                value: Value::List(list),
                ..
            }) => match resolve_range(list.len(), start, stop) {
                Some((from, to)) => {
                    list.truncate(to + 1);
                    list.drain(..from);
                    true
                }
                None => false,
            },
            Some(_) => return Err(wrong_type(key)),
        };
        if !keep {
            state.entries.remove(key);
        }
        Ok(())
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> StoreResult<Vec<Vec<u8>>> {
        let mut state = self.write()?;
        match state.live(key) {
            None => Ok(Vec::new()),
            Some(Entry {
                value: Value::List(list),
                ..
            }) => Ok(match resolve_range(list.len(), start, stop) {
                Some((from, to)) => list.range(from..=to).cloned().collect(),
                None => Vec::new(),
            }),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}

// ============================================================================
// DURABLE
// ============================================================================

#[derive(Debug, Default)]
struct DurableState {
    next_id: i64,
    rows: Vec<World>,
}

/// In-memory [`DurableStore`].
///
/// Rows keep only the columns the relational schema has: the categories other
/// than features are dropped on insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDurableStore {
    state: Arc<RwLock<DurableState>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryDurableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.state.read().map(|state| state.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(injected("memory-durable"));
        }
        Ok(())
    }

    fn matching(&self, filter: &WorldFilter) -> StoreResult<Vec<World>> {
        self.check()?;
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state
            .rows
            .iter()
            .filter(|world| filter.matches(world))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DurableStore for InMemoryDurableStore {
    async fn insert(&self, world: &World) -> StoreResult<i64> {
        self.check()?;
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.next_id += 1;
        let id = state.next_id;

        state.rows.push(World {
            id: Some(id),
            name: world.name.clone(),
            description: world.description.clone(),
            population: world.population,
            climate: world.climate,
            features: world.features.clone(),
            theme: world.theme,
            created_at: Some(Utc::now()),
            fauna: Vec::new(),
            flora: Vec::new(),
            cultures: Vec::new(),
            dangers: Vec::new(),
            languages: Vec::new(),
        });
        Ok(id)
    }

    async fn query_by_id(&self, id: i64) -> StoreResult<Option<World>> {
        self.check()?;
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.rows.iter().find(|world| world.id == Some(id)).cloned())
    }

    async fn count(&self, filter: &WorldFilter) -> StoreResult<i64> {
        Ok(self.matching(filter)?.len() as i64)
    }

    async fn query_page(&self, filter: &WorldFilter, limit: i64, offset: i64) -> StoreResult<Vec<World>> {
        let mut rows = self.matching(filter)?;
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgen_core::{Climate, Theme};

    fn sample(name: &str) -> World {
        World {
            id: None,
            name: name.to_string(),
            description: "A quiet world".to_string(),
            population: 7,
            climate: Climate::Temperate,
            features: vec!["Rivers".to_string(), "Lakes".to_string()],
            theme: Theme::Fantasy,
            created_at: None,
            fauna: vec!["Deer".to_string(), "Foxes".to_string()],
            flora: vec![],
            cultures: vec![],
            dangers: vec![],
            languages: vec![],
        }
    }

    #[test]
    fn test_resolve_range() {
        assert_eq!(resolve_range(5, 0, -1), Some((0, 4)));
        assert_eq!(resolve_range(5, 0, 9), Some((0, 4)));
        assert_eq!(resolve_range(5, -2, -1), Some((3, 4)));
        assert_eq!(resolve_range(5, 3, 1), None);
        assert_eq!(resolve_range(0, 0, -1), None);
    }

    #[tokio::test]
    async fn test_set_get_and_ttl_expiry() {
        let cache = InMemoryCacheStore::new();
        cache.set("k", b"v", Some(Duration::from_secs(10))).await.unwrap();
        cache.set("forever", b"v", None).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some(b"v".to_vec()));
        assert_eq!(cache.ttl("k"), Some(Duration::from_secs(10)));
        assert_eq!(cache.ttl("forever"), None);

        cache.advance(Duration::from_secs(10));
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.contains_key("forever"));
    }

    #[tokio::test]
    async fn test_incr_creates_and_counts() {
        let cache = InMemoryCacheStore::new();
        assert_eq!(cache.incr("c").await.unwrap(), 1);
        assert_eq!(cache.incr("c").await.unwrap(), 2);

        cache.expire("c", Duration::from_secs(5)).await.unwrap();
        cache.advance(Duration::from_secs(5));
        assert_eq!(cache.incr("c").await.unwrap(), 1);
        assert_eq!(cache.ttl("c"), None);
    }

    #[tokio::test]
    async fn test_incr_overflow_is_an_error() {
        let cache = InMemoryCacheStore::new();
        cache
            .set("counter", i64::MAX.to_string().as_bytes(), None)
            .await
            .expect("set");

        assert!(cache.incr("counter").await.is_err());
        assert_eq!(
            cache.get("counter").await.expect("get"),
            Some(i64::MAX.to_string().into_bytes())
        );
    }

    #[tokio::test]
    async fn test_incr_rejects_non_integer() {
        let cache = InMemoryCacheStore::new();
        cache.set("c", b"abc", None).await.unwrap();
        assert!(cache.incr("c").await.is_err());
    }

    #[tokio::test]
    async fn test_list_push_trim_range() {
        let cache = InMemoryCacheStore::new();
        for i in 0..5u8 {
            cache.list_push_head("l", &[i]).await.unwrap();
        }
        cache.list_trim("l", 0, 2).await.unwrap();

        let items = cache.list_range("l", 0, -1).await.unwrap();
        assert_eq!(items, vec![vec![4], vec![3], vec![2]]);

        cache.list_trim("l", 5, 9).await.unwrap();
        assert!(!cache.contains_key("l"));
    }

    #[tokio::test]
    async fn test_wrong_type_is_an_error() {
        let cache = InMemoryCacheStore::new();
        cache.set("s", b"1", None).await.unwrap();
        assert!(cache.list_push_head("s", b"x").await.is_err());
    }

    #[tokio::test]
    async fn test_cache_fault_injection() {
        let cache = InMemoryCacheStore::new();
        cache.set_failing(true);
        assert!(cache.ping().await.is_err());
        assert!(cache.incr("c").await.is_err());
        cache.set_failing(false);
        assert!(cache.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_durable_insert_assigns_ids_and_drops_extra_categories() {
        let store = InMemoryDurableStore::new();
        let first = store.insert(&sample("Eldvale")).await.unwrap();
        let second = store.insert(&sample("Brightmoor")).await.unwrap();
        assert_eq!((first, second), (1, 2));

        let row = store.query_by_id(first).await.unwrap().expect("row");
        assert_eq!(row.id, Some(1));
        assert!(row.created_at.is_some());
        assert!(row.fauna.is_empty());
        assert_eq!(store.query_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_durable_page_newest_first() {
        let store = InMemoryDurableStore::new();
        for i in 0..5 {
            store.insert(&sample(&format!("World {}", i))).await.unwrap();
        }

        let filter = WorldFilter::default();
        assert_eq!(store.count(&filter).await.unwrap(), 5);

        let page = store.query_page(&filter, 2, 1).await.unwrap();
        let ids: Vec<_> = page.iter().filter_map(|w| w.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }
}
