//! API Configuration Module
//!
//! Configuration for CORS, rate limiting, history and the backing stores.
//! Everything is loaded from environment variables with defaults suitable
//! for development.

use std::path::PathBuf;
use std::time::Duration;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// HTTP-facing configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // ========================================================================
    // CORS Configuration
    // ========================================================================
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins.
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,

    // ========================================================================
    // Rate Limiting Configuration
    // ========================================================================
    /// Whether rate limiting is enabled.
    pub rate_limit_enabled: bool,

    /// Requests admitted per client per window.
    pub rate_limit: i64,

    /// Window size for rate limiting.
    pub rate_limit_window: Duration,

    // ========================================================================
    // History
    // ========================================================================
    /// Capacity of the recent-history list.
    pub history_limit: usize,

    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            cors_max_age_secs: 86400,
            rate_limit_enabled: true,
            rate_limit: 100,
            rate_limit_window: Duration::from_secs(60),
            history_limit: 10,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `WORLDGEN_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `WORLDGEN_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    /// - `WORLDGEN_RATE_LIMIT_ENABLED`: "true" or "false" (default: true)
    /// - `WORLDGEN_RATE_LIMIT`: Requests per window per client (default: 100)
    /// - `WORLDGEN_RATE_WINDOW_SECS`: Window length (default: 60)
    /// - `WORLDGEN_HISTORY_LIMIT`: History capacity (default: 10)
    /// - `WORLDGEN_LOG_FORMAT`: "pretty" or "json" (default: pretty)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cors_origins = std::env::var("WORLDGEN_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit_enabled = std::env::var("WORLDGEN_RATE_LIMIT_ENABLED")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);

        let rate_limit_window = env_parse::<u64>("WORLDGEN_RATE_WINDOW_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.rate_limit_window);

        let log_format = std::env::var("WORLDGEN_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        Self {
            cors_origins,
            cors_max_age_secs: env_parse("WORLDGEN_CORS_MAX_AGE_SECS").unwrap_or(defaults.cors_max_age_secs),
            rate_limit_enabled,
            rate_limit: env_parse("WORLDGEN_RATE_LIMIT").unwrap_or(defaults.rate_limit),
            rate_limit_window,
            history_limit: env_parse::<usize>("WORLDGEN_HISTORY_LIMIT")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.history_limit),
            log_format,
        }
    }
}

// ============================================================================
// STORE CONFIGURATION
// ============================================================================

/// Which store backends the process runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// PostgreSQL and Redis, each optional.
    #[default]
    External,
    /// In-process stores; nothing leaves the process.
    Memory,
}

/// Backing store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub mode: StoreMode,

    /// PostgreSQL URL. Unset disables the durable store.
    pub database_url: Option<String>,
    pub db_pool_size: usize,
    pub db_timeout: Duration,

    pub redis_url: String,

    /// Substitute content tables (JSON). Unset uses the built-in tables.
    pub content_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::External,
            database_url: None,
            db_pool_size: 16,
            db_timeout: Duration::from_secs(30),
            redis_url: "redis://redis:6379".to_string(),
            content_path: None,
        }
    }
}

impl StoreConfig {
    /// Create StoreConfig from environment variables.
    ///
    /// Environment variables:
    /// - `WORLDGEN_STORE_MODE`: "external" or "memory" (default: external)
    /// - `WORLDGEN_DATABASE_URL`: PostgreSQL URL (unset = no durable store)
    /// - `WORLDGEN_DB_POOL_SIZE`: Pool size (default: 16)
    /// - `WORLDGEN_DB_TIMEOUT`: Pool wait timeout in seconds (default: 30)
    /// - `WORLDGEN_REDIS_URL`: Redis URL (default: redis://redis:6379)
    /// - `WORLDGEN_CONTENT_PATH`: JSON content tables (unset = built-in)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mode = match std::env::var("WORLDGEN_STORE_MODE") {
            Ok(value) if value.trim().eq_ignore_ascii_case("memory") => StoreMode::Memory,
            _ => StoreMode::External,
        };

        let non_empty = |key: &str| std::env::var(key).ok().filter(|s| !s.trim().is_empty());

        Self {
            mode,
            database_url: non_empty("WORLDGEN_DATABASE_URL"),
            db_pool_size: env_parse::<usize>("WORLDGEN_DB_POOL_SIZE")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.db_pool_size),
            db_timeout: env_parse::<u64>("WORLDGEN_DB_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.db_timeout),
            redis_url: non_empty("WORLDGEN_REDIS_URL").unwrap_or(defaults.redis_url),
            content_path: non_empty("WORLDGEN_CONTENT_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.cors_max_age_secs, 86400);
        assert!(config.rate_limit_enabled);
        assert_eq!(config.rate_limit, 100);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_default_store_config() {
        let config = StoreConfig::default();
        assert_eq!(config.mode, StoreMode::External);
        assert!(config.database_url.is_none());
        assert_eq!(config.db_pool_size, 16);
        assert_eq!(config.redis_url, "redis://redis:6379");
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }
}
