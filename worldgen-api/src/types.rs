//! Request and response types for the REST surface.
//!
//! Query parameters arrive as raw strings so malformed numbers can be
//! normalized instead of rejected by the extractor.

use serde::{Deserialize, Serialize};
use worldgen_core::World;

use crate::error::{ApiError, ApiResult};

// ============================================================================
// PAGINATION
// ============================================================================

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Normalize a page size: missing, malformed or non-positive values become
/// [`DEFAULT_LIMIT`]; values above [`MAX_LIMIT`] are capped.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(limit) if limit > MAX_LIMIT => MAX_LIMIT,
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_LIMIT,
    }
}

/// Normalize an offset: missing, malformed or negative values become 0.
pub fn parse_offset(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|offset| *offset >= 0)
        .unwrap_or(0)
}

/// Parse a world id path segment. Only positive integers are accepted.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::invalid_input("Invalid world ID"))
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Query parameters for world generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct GenerateParams {
    /// fantasy, sci-fi or post-apocalyptic; anything else becomes fantasy
    pub theme: Option<String>,
}

/// Query parameters for world search.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SearchParams {
    /// Case-insensitive substring of name or description
    pub query: Option<String>,
    /// Exact theme
    pub theme: Option<String>,
    /// Exact climate
    pub climate: Option<String>,
    /// Page size, 1-100 (default 10)
    pub limit: Option<String>,
    /// Rows to skip (default 0)
    pub offset: Option<String>,
}

// ============================================================================
// RESPONSES
// ============================================================================

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedWorldsResponse {
    pub data: Vec<World>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiVersionInfo {
    pub version: String,
    pub status: String,
    pub docs: String,
    pub released: String,
}

/// Available API versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiVersionsResponse {
    pub versions: Vec<ApiVersionInfo>,
    pub current_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Welcome document for a version root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WelcomeResponse {
    pub api: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
    pub documentation: String,
}

pub const DOCS_PATH: &str = "/swagger-ui";

impl ApiVersionsResponse {
    pub fn current() -> Self {
        Self {
            versions: vec![ApiVersionInfo {
                version: "v1".to_string(),
                status: "stable".to_string(),
                docs: DOCS_PATH.to_string(),
                released: "2025-05-04".to_string(),
            }],
            current_version: "v1".to_string(),
        }
    }
}

impl WelcomeResponse {
    pub fn v1() -> Self {
        let endpoint = |path: &str, description: &str| EndpointInfo {
            path: path.to_string(),
            method: "GET".to_string(),
            description: description.to_string(),
        };

        Self {
            api: "World Generator API".to_string(),
            version: "v1".to_string(),
            endpoints: vec![
                endpoint("/v1/world", "Generate a new random world"),
                endpoint("/v1/world/{id}", "Get a specific world by ID"),
                endpoint("/v1/worlds", "Search and filter worlds"),
                endpoint("/v1/history", "Get recently generated worlds"),
            ],
            documentation: DOCS_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), 10);
        assert_eq!(parse_limit(Some("25")), 25);
        assert_eq!(parse_limit(Some("0")), 10);
        assert_eq!(parse_limit(Some("-4")), 10);
        assert_eq!(parse_limit(Some("abc")), 10);
        assert_eq!(parse_limit(Some("100")), 100);
        assert_eq!(parse_limit(Some("1000")), 100);
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset(None), 0);
        assert_eq!(parse_offset(Some("20")), 20);
        assert_eq!(parse_offset(Some("-1")), 0);
        assert_eq!(parse_offset(Some("x")), 0);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").ok(), Some(42));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert_eq!(
            parse_id("nope").map_err(|e| e.message).err().as_deref(),
            Some("Invalid world ID")
        );
    }

    #[test]
    fn test_welcome_lists_endpoints() {
        let welcome = WelcomeResponse::v1();
        assert_eq!(welcome.endpoints.len(), 4);
        assert!(welcome.endpoints.iter().all(|e| e.method == "GET"));
        assert_eq!(ApiVersionsResponse::current().current_version, "v1");
    }
}
