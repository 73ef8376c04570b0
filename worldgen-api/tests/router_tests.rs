//! HTTP surface tests driven through the router with `oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`
use worldgen_api::{
    create_api_router, ApiConfig, AppState, RateLimitState, RateLimiter, WorldRepository,
};
use worldgen_storage::{CacheStore, DurableStore};
use worldgen_test_utils::fixtures::{seeded_durable_store, seeded_generator};
use worldgen_test_utils::{InMemoryCacheStore, InMemoryDurableStore, Theme};

fn app_with(
    cache: Option<InMemoryCacheStore>,
    durable: Option<InMemoryDurableStore>,
    rate_limit: i64,
) -> Router {
    let cache = cache.map(|c| Arc::new(c) as Arc<dyn CacheStore>);
    let durable = durable.map(|d| Arc::new(d) as Arc<dyn DurableStore>);

    let config = ApiConfig {
        rate_limit,
        ..ApiConfig::default()
    };
    let repository = WorldRepository::new(seeded_generator(3), cache.clone(), durable, config.history_limit);
    let limiter = RateLimiter::new(cache, config.rate_limit, Duration::from_secs(60));
    let state = AppState::new(repository, RateLimitState::new(limiter, true));
    create_api_router(state, &config)
}

fn app() -> Router {
    app_with(Some(InMemoryCacheStore::new()), Some(InMemoryDurableStore::new()), 100)
}

async fn get(app: &Router, uri: &str) -> Result<Response, String> {
    get_from(app, uri, "203.0.113.1").await
}

async fn get_from(app: &Router, uri: &str, client: &str) -> Result<Response, String> {
    let request = Request::builder()
        .uri(uri)
        .header("x-forwarded-for", client)
        .body(Body::empty())
        .map_err(|e| e.to_string())?;
    app.clone()
        .oneshot(request)
        .await
        .map_err(|e| format!("Request failed: {:?}", e))
}

async fn json_body(response: Response) -> Result<Value, String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}

// ============================================================================
// WORLDS
// ============================================================================

#[tokio::test]
async fn generate_then_lookup() -> Result<(), String> {
    let app = app();

    let response = get(&app, "/v1/world?theme=sci-fi").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let world = json_body(response).await?;
    assert_eq!(world["theme"], "sci-fi");
    let id = world["id"].as_i64().ok_or("missing id")?;

    let response = get(&app, &format!("/v1/world/{}", id)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await?;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], world["name"]);
    Ok(())
}

#[tokio::test]
async fn unknown_theme_defaults_to_fantasy() -> Result<(), String> {
    let app = app();
    for uri in ["/v1/world", "/v1/world?theme=", "/v1/world?theme=steampunk"] {
        let world = json_body(get(&app, uri).await?).await?;
        assert_eq!(world["theme"], "fantasy", "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn invalid_ids_are_bad_requests() -> Result<(), String> {
    let app = app();
    for uri in ["/v1/world/abc", "/v1/world/0", "/v1/world/-2"] {
        let response = get(&app, uri).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = json_body(response).await?;
        assert_eq!(body["message"], "Invalid world ID");
    }
    Ok(())
}

#[tokio::test]
async fn missing_world_is_not_found() -> Result<(), String> {
    let response = get(&app(), "/v1/world/999").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await?;
    assert_eq!(body["code"], "WORLD_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn search_normalizes_pagination() -> Result<(), String> {
    let durable = seeded_durable_store(23, Theme::SciFi).await;
    let app = app_with(Some(InMemoryCacheStore::new()), Some(durable), 100);

    let body = json_body(get(&app, "/v1/worlds?theme=sci-fi&limit=10&offset=20").await?).await?;
    assert_eq!(body["total"], 23);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));

    let body = json_body(get(&app, "/v1/worlds?limit=1000").await?).await?;
    assert_eq!(body["limit"], 100);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(23));

    let body = json_body(get(&app, "/v1/worlds?limit=abc&offset=-5").await?).await?;
    assert_eq!(body["limit"], 10);
    assert_eq!(body["offset"], 0);
    Ok(())
}

#[tokio::test]
async fn search_without_durable_store_is_internal_error() -> Result<(), String> {
    let app = app_with(Some(InMemoryCacheStore::new()), None, 100);
    let response = get(&app, "/v1/worlds").await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await?;
    assert_eq!(body["message"], "Failed to search worlds");
    Ok(())
}

#[tokio::test]
async fn history_lists_recent_worlds() -> Result<(), String> {
    let app = app();
    get(&app, "/v1/world?theme=fantasy").await?;
    get(&app, "/v1/world?theme=sci-fi").await?;

    let body = json_body(get(&app, "/v1/history").await?).await?;
    let history = body.as_array().ok_or("history is not an array")?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["theme"], "sci-fi");
    Ok(())
}

#[tokio::test]
async fn history_without_cache_is_empty_list() -> Result<(), String> {
    let app = app_with(None, Some(InMemoryDurableStore::new()), 100);
    let response = get(&app, "/v1/history").await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await?, serde_json::json!([]));
    Ok(())
}

// ============================================================================
// RATE LIMITING
// ============================================================================

#[tokio::test]
async fn requests_over_limit_get_429() -> Result<(), String> {
    let app = app_with(Some(InMemoryCacheStore::new()), Some(InMemoryDurableStore::new()), 2);

    for _ in 0..2 {
        let response = get_from(&app, "/v1/world", "192.0.2.10").await?;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = get_from(&app, "/v1/world", "192.0.2.10").await?;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = json_body(response).await?;
    assert_eq!(body["message"], "Request limit exceeded. Try again later.");

    // Another client has its own window.
    let response = get_from(&app, "/v1/world", "192.0.2.11").await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn health_is_exempt_from_rate_limit() -> Result<(), String> {
    let app = app_with(Some(InMemoryCacheStore::new()), Some(InMemoryDurableStore::new()), 1);

    for _ in 0..5 {
        let response = get(&app, "/health").await?;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| e.to_string())?;
        assert_eq!(&bytes[..], b"OK");
    }
    let response = get(&app, "/health/ready").await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn limiter_fails_open_without_cache() -> Result<(), String> {
    let app = app_with(None, Some(InMemoryDurableStore::new()), 1);
    for _ in 0..5 {
        assert_eq!(get(&app, "/v1/world").await?.status(), StatusCode::OK);
    }
    Ok(())
}

// ============================================================================
// DISCOVERY & HEALTH
// ============================================================================

#[tokio::test]
async fn root_redirects_to_v1() -> Result<(), String> {
    let response = get(&app(), "/").await?;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/v1")
    );
    Ok(())
}

#[tokio::test]
async fn discovery_documents() -> Result<(), String> {
    let app = app();

    let body = json_body(get(&app, "/api").await?).await?;
    assert_eq!(body["current_version"], "v1");
    assert_eq!(body["versions"][0]["status"], "stable");

    let body = json_body(get(&app, "/v1").await?).await?;
    assert_eq!(body["api"], "World Generator API");
    assert_eq!(body["endpoints"].as_array().map(Vec::len), Some(4));

    assert_eq!(get(&app, "/openapi.json").await?.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn readiness_reports_store_status() -> Result<(), String> {
    let body = json_body(get(&app(), "/health/ready").await?).await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["cache"]["status"], "healthy");

    let app = app_with(None, Some(InMemoryDurableStore::new()), 100);
    let body = json_body(get(&app, "/health/ready").await?).await?;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["details"]["cache"]["status"], "unhealthy");

    let response = get(&app_with(None, None, 100), "/health/ready").await?;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn readiness_does_not_expose_store_errors() -> Result<(), String> {
    let durable = InMemoryDurableStore::new();
    durable.set_failing(true);
    let app = app_with(Some(InMemoryCacheStore::new()), Some(durable), 100);

    let response = get(&app, "/health/ready").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["details"]["database"]["status"], "unhealthy");
    assert_eq!(body["details"]["database"]["error"], "unreachable");
    assert!(!body.to_string().contains("injected"));
    Ok(())
}
