//! World Gen API Server Entry Point
//!
//! Bootstraps configuration, connects whichever stores answer, and starts
//! the Axum HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use worldgen_api::{
    create_api_router, load_generator, telemetry::init_tracing, ApiConfig, ApiError, ApiResult,
    AppState, RateLimitState, RateLimiter, StoreConfig, Stores, WorldRepository,
};

#[tokio::main]
async fn main() -> ApiResult<()> {
    let api_config = ApiConfig::from_env();
    init_tracing(api_config.log_format)?;

    let store_config = StoreConfig::from_env();
    let generator = Arc::new(load_generator(&store_config)?);
    let stores = Stores::connect(&store_config).await;

    let repository = WorldRepository::new(
        generator,
        stores.cache.clone(),
        stores.durable.clone(),
        api_config.history_limit,
    );
    let limiter = RateLimiter::new(
        stores.cache.clone(),
        api_config.rate_limit,
        api_config.rate_limit_window,
    );
    let state = AppState::new(
        repository,
        RateLimitState::new(limiter, api_config.rate_limit_enabled),
    );

    let app = create_api_router(state, &api_config);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, "Starting World Gen API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("WORLDGEN_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("WORLDGEN_API_PORT").ok())
        .unwrap_or_else(|| "8080".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}
