//! World REST API Routes
//!
//! Generation, lookup, search and history. Handlers delegate to the
//! [`WorldRepository`]; query parameters are normalized here.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use worldgen_core::World;
use worldgen_storage::WorldFilter;

use crate::{
    error::{ApiError, ApiResult},
    repository::WorldRepository,
    state::AppState,
    types::{parse_id, parse_limit, parse_offset, GenerateParams, PaginatedWorldsResponse, SearchParams},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /v1/world - Generate a new world
#[utoipa::path(
    get,
    path = "/v1/world",
    tag = "Worlds",
    params(GenerateParams),
    responses(
        (status = 200, description = "Generated world", body = World),
        (status = 429, description = "Rate limit exceeded", body = ApiError),
    ),
)]
pub async fn generate_world(
    State(repository): State<WorldRepository>,
    Query(params): Query<GenerateParams>,
) -> ApiResult<impl IntoResponse> {
    let world = repository.create(params.theme.as_deref().unwrap_or_default()).await;
    Ok(Json(world))
}

/// GET /v1/world/{id} - Get a world by ID
#[utoipa::path(
    get,
    path = "/v1/world/{id}",
    tag = "Worlds",
    params(
        ("id" = i64, Path, description = "World ID"),
    ),
    responses(
        (status = 200, description = "World details", body = World),
        (status = 400, description = "Invalid world ID", body = ApiError),
        (status = 404, description = "World not found", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn get_world(
    State(repository): State<WorldRepository>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let world = repository
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to retrieve world"))?;
    Ok(Json(world))
}

/// GET /v1/worlds - Search worlds
#[utoipa::path(
    get,
    path = "/v1/worlds",
    tag = "Worlds",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of matching worlds", body = PaginatedWorldsResponse),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn search_worlds(
    State(repository): State<WorldRepository>,
    Query(params): Query<SearchParams>,
) -> ApiResult<impl IntoResponse> {
    let limit = parse_limit(params.limit.as_deref());
    let offset = parse_offset(params.offset.as_deref());
    let filter = WorldFilter::new(
        params.query.unwrap_or_default(),
        params.theme.unwrap_or_default(),
        params.climate.unwrap_or_default(),
    );

    let (data, total) = repository
        .search(&filter, limit, offset)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to search worlds"))?;

    Ok(Json(PaginatedWorldsResponse {
        data,
        total,
        limit,
        offset,
    }))
}

/// GET /v1/history - Recently generated worlds
#[utoipa::path(
    get,
    path = "/v1/history",
    tag = "Worlds",
    responses(
        (status = 200, description = "Most recent worlds first", body = Vec<World>),
        (status = 500, description = "Store failure", body = ApiError),
    ),
)]
pub async fn get_history(State(repository): State<WorldRepository>) -> ApiResult<impl IntoResponse> {
    let worlds = repository
        .history()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to retrieve history"))?;
    Ok(Json(worlds))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the v1 world router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/world", get(generate_world))
        .route("/world/:id", get(get_world))
        .route("/worlds", get(search_worlds))
        .route("/history", get(get_history))
}
