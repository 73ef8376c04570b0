//! Fixed-window request limiter backed by the cache store's counters.
//!
//! The window is anchored to the first request: the counter's expiration is
//! armed only when an increment creates the key, and later increments never
//! extend it. A client can therefore burst up to twice the limit across a
//! window boundary.

use std::sync::Arc;
use std::time::Duration;

use worldgen_storage::CacheStore;

/// Paths admitted without touching the counter.
pub const EXEMPT_PATHS: &[&str] = &["/health"];

/// Cache key of a client's counter.
pub fn rate_key(client_key: &str) -> String {
    format!("rate-limit:{}", client_key)
}

/// Request-admission gate keyed by client identity.
#[derive(Clone)]
pub struct RateLimiter {
    cache: Option<Arc<dyn CacheStore>>,
    limit: i64,
    window: Duration,
}

impl RateLimiter {
    pub fn new(cache: Option<Arc<dyn CacheStore>>, limit: i64, window: Duration) -> Self {
        Self {
            cache,
            limit,
            window,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether `path` bypasses the limiter.
    pub fn is_exempt(path: &str) -> bool {
        EXEMPT_PATHS.iter().any(|exempt| {
            path == *exempt
                || path
                    .strip_prefix(exempt)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Count one request for `client_key` and decide whether to admit it.
    ///
    /// Fails open: an absent cache or a failed increment admits the request.
    pub async fn admit(&self, client_key: &str) -> bool {
        let Some(cache) = &self.cache else {
            return true;
        };

        let key = rate_key(client_key);
        let count = match cache.incr(&key).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(client = client_key, error = %e, "Rate counter unavailable, admitting");
                return true;
            }
        };

        if count == 1 {
            // A failed expire leaves the counter without a window; it is not retried.
            if let Err(e) = cache.expire(&key, self.window).await {
                tracing::warn!(client = client_key, error = %e, "Failed to arm rate window");
            }
        }

        if count > self.limit {
            tracing::debug!(client = client_key, count, limit = self.limit, "Rate limit exceeded");
            return false;
        }
        true
    }
}
