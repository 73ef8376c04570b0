//! Tracing subscriber initialization.
//!
//! The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
//! Output is human-readable by default and JSON when configured.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::error::{ApiError, ApiResult};

pub const DEFAULT_FILTER: &str = "worldgen_api=debug,worldgen_storage=info,tower_http=info,info";

/// Install the global tracing subscriber. Fails if one is already set.
pub fn init_tracing(format: LogFormat) -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    result.map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(format = ?format, "Tracing initialized");
    Ok(())
}
