//! OpenAPI Specification for the World Gen API
//!
//! Generated by utoipa from the route annotations and schema derives.

use utoipa::OpenApi;
use worldgen_core::{Climate, Theme, World};

use crate::error::{ApiError, ErrorCode};
use crate::routes::health::{ComponentHealth, HealthDetails, HealthResponse, HealthStatus};
use crate::routes::{self, health, world};
use crate::types::{
    ApiVersionInfo, ApiVersionsResponse, EndpointInfo, PaginatedWorldsResponse, WelcomeResponse,
};

/// OpenAPI document for the World Gen API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "World Generator API",
        version = "1.0.0",
        description = "Generates, stores and searches procedurally built worlds"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local Development")
    ),
    tags(
        (name = "Worlds", description = "World generation, lookup, search and history"),
        (name = "Discovery", description = "API versions and endpoint listings"),
        (name = "Health", description = "Liveness and store readiness")
    ),
    paths(
        // === World Routes ===
        world::generate_world,
        world::get_world,
        world::search_worlds,
        world::get_history,

        // === Discovery ===
        routes::api_versions,
        routes::welcome,

        // === Health ===
        health::health,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        World,
        Theme,
        Climate,
        PaginatedWorldsResponse,
        ApiVersionInfo,
        ApiVersionsResponse,
        EndpointInfo,
        WelcomeResponse,
        HealthResponse,
        HealthStatus,
        HealthDetails,
        ComponentHealth,
        ApiError,
        ErrorCode,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate OpenAPI spec as JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.info.title, "World Generator API");

        let tags = openapi.tags.as_ref().expect("tags");
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_openapi_paths_exist() {
        let openapi = ApiDoc::openapi();
        for path in [
            "/v1/world",
            "/v1/world/{id}",
            "/v1/worlds",
            "/v1/history",
            "/api",
            "/v1",
            "/health",
            "/health/ready",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_openapi_json_serialization() -> Result<(), String> {
        let json = ApiDoc::to_json().map_err(|e| format!("Failed to serialize OpenAPI: {}", e))?;
        serde_json::from_str::<serde_json::Value>(&json)
            .map_err(|e| format!("Generated JSON invalid: {}", e))?;
        assert!(json.contains("World Generator API"));
        assert!(json.contains("PaginatedWorldsResponse"));
        Ok(())
    }
}
