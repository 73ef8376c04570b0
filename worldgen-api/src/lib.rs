//! World Gen API - REST Layer for the World Generator
//!
//! Serves procedurally generated worlds over HTTP. Generation, persistence
//! and caching are coordinated by [`WorldRepository`]; every request passes
//! a fixed-window [`RateLimiter`] first.

pub mod config;
pub mod error;
pub mod limiter;
pub mod macros;
pub mod middleware;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;
pub mod stores;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, LogFormat, StoreConfig, StoreMode};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use limiter::RateLimiter;
pub use middleware::{rate_limit_middleware, RateLimitState};
pub use openapi::ApiDoc;
pub use repository::{RepositoryError, WorldRepository};
pub use routes::create_api_router;
pub use state::AppState;
pub use stores::{load_generator, Stores};
pub use types::*;
