//! Middleware modules for the World Gen API
//!
//! - `rate_limit`: fixed-window per-client admission
//!
//! # Middleware Order
//!
//! ```ignore
//! Router::new()
//!     .route("/v1/world", get(handler))
//!     // Rejects floods before any handler runs
//!     .layer(middleware::from_fn_with_state(rate_limit_state, rate_limit_middleware))
//!     .layer(TraceLayer::new_for_http())
//!     // Outermost
//!     .layer(cors)
//! ```

pub mod rate_limit;

pub use rate_limit::{extract_client_ip, rate_limit_middleware, RateLimitError, RateLimitState};
