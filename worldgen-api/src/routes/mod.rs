//! REST API Routes Module
//!
//! - `/v1/*` world routes
//! - `/health*` health checks (not rate limited)
//! - `/`, `/api`, `/v1` discovery documents
//! - `/openapi.json` and Swagger UI
//!
//! The whole router sits behind CORS, request tracing and rate limiting.

pub mod health;
pub mod world;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::middleware::rate_limit_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::types::{ApiVersionsResponse, WelcomeResponse};

pub use health::create_router as health_router;
pub use world::create_router as world_router;

// ============================================================================
// DISCOVERY ENDPOINTS
// ============================================================================

/// GET / - Permanent redirect to the current version
async fn root_redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/v1")])
}

/// GET /api - Available API versions
#[utoipa::path(
    get,
    path = "/api",
    tag = "Discovery",
    responses(
        (status = 200, description = "Available API versions", body = ApiVersionsResponse),
    ),
)]
pub async fn api_versions() -> impl IntoResponse {
    Json(ApiVersionsResponse::current())
}

/// GET /v1 - Welcome document
#[utoipa::path(
    get,
    path = "/v1",
    tag = "Discovery",
    responses(
        (status = 200, description = "Endpoints of this version", body = WelcomeResponse),
    ),
)]
pub async fn welcome() -> impl IntoResponse {
    Json(WelcomeResponse::v1())
}

/// Handler for /openapi.json endpoint when Swagger UI does not serve it.
#[cfg(not(feature = "swagger-ui"))]
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// Empty origins allow any origin; otherwise only the configured ones.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", config.cors_origins);
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the complete API router.
///
/// # Middleware Order (outer to inner)
/// 1. CORS - handles preflight requests
/// 2. Request tracing
/// 3. Rate limiting - rejects floods before any handler runs
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(root_redirect))
        .route("/api", get(api_versions))
        .route("/v1", get(welcome))
        .nest("/v1", world::create_router())
        .merge(health::create_router());

    // Swagger UI serves the document itself at /openapi.json.
    #[cfg(feature = "swagger-ui")]
    {
        use utoipa_swagger_ui::SwaggerUi;
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()));
    }
    #[cfg(not(feature = "swagger-ui"))]
    {
        router = router.route("/openapi.json", get(openapi_json));
    }

    let rate_limit = state.rate_limit.clone();
    let cors = build_cors_layer(config);

    router
        .with_state(state)
        .layer(from_fn_with_state(rate_limit, rate_limit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
