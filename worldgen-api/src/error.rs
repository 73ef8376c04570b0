//! Error Types for the World Gen API
//!
//! This module defines error handling for the API layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! Internal failures never leak store details; they are logged and replaced
//! with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use worldgen_core::CoreError;

use crate::repository::RepositoryError;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request contains invalid input data
    InvalidInput,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested world does not exist
    WorldNotFound,

    // ========================================================================
    // Rate Limiting (429)
    // ========================================================================
    /// Request rate limit exceeded
    TooManyRequests,

    // ========================================================================
    // Server Errors (500)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Store operation failed
    StoreError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,

            ErrorCode::WorldNotFound => StatusCode::NOT_FOUND,

            ErrorCode::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,

            ErrorCode::InternalError | ErrorCode::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::WorldNotFound => "World not found",
            ErrorCode::TooManyRequests => "Request limit exceeded. Try again later.",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreError => "Store operation failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error with a custom message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an API error with the code's default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience Constructors
    // ========================================================================

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub fn world_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::WorldNotFound,
            format!("World with ID {} not found", id),
        )
    }

    pub fn too_many_requests() -> Self {
        Self::from_code(ErrorCode::TooManyRequests)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn store_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl ApiError {
    /// Map a repository failure, replacing store details with `message`.
    pub fn from_repository(err: RepositoryError, message: &str) -> Self {
        match err {
            RepositoryError::NotFound { id } => ApiError::world_not_found(id),
            RepositoryError::StoreUnavailable => {
                tracing::error!("No store available to serve request");
                ApiError::store_error(message)
            }
            RepositoryError::Store(source) => {
                tracing::error!(error = %source, "Store failure with no fallback");
                ApiError::store_error(message)
            }
        }
    }
}

/// Convert repository failures, hiding store details from the client.
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::from_repository(err, "Failed to process request")
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::internal_error(format!("Invalid content tables: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use worldgen_storage::StoreError;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::WorldNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::TooManyRequests.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ErrorCode::InternalError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::StoreError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::world_not_found(42);
        assert_eq!(err.code, ErrorCode::WorldNotFound);
        assert!(err.message.contains("42"));

        let err = ApiError::invalid_input("Invalid world ID");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::too_many_requests();
        assert_eq!(err.message, "Request limit exceeded. Try again later.");
    }

    #[test]
    fn test_repository_errors_do_not_leak_details() {
        let err: ApiError = RepositoryError::Store(StoreError::Backend {
            store: "postgres",
            reason: "password authentication failed for user admin".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("password"));

        let err: ApiError = RepositoryError::StoreUnavailable.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = RepositoryError::NotFound { id: 9 }.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::world_not_found(7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "WORLD_NOT_FOUND");
        assert_eq!(json["message"], "World with ID 7 not found");
        assert_eq!(json.as_object().map(|o| o.len()), Some(2));
    }
}
