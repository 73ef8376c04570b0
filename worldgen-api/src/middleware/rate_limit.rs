// ============================================================================
// RATE LIMITING MIDDLEWARE
// ============================================================================

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::limiter::RateLimiter;

/// Key used when a request carries no client address at all.
const UNKNOWN_CLIENT: &str = "unknown";

/// State for rate limiting middleware.
#[derive(Clone)]
pub struct RateLimitState {
    limiter: RateLimiter,
    enabled: bool,
}

impl RateLimitState {
    pub fn new(limiter: RateLimiter, enabled: bool) -> Self {
        Self { limiter, enabled }
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

/// Error type for rate limit middleware.
#[derive(Debug)]
pub struct RateLimitError {
    /// Window length in seconds
    pub retry_after: u64,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(ApiError::too_many_requests())).into_response();
        response.headers_mut().insert(
            HeaderName::from_static("retry-after"),
            HeaderValue::from_str(&self.retry_after.to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("60")),
        );
        response
    }
}

/// Extract the client identity from a request, considering proxy headers.
///
/// Order: first `X-Forwarded-For` entry, then `X-Real-IP`, then the socket
/// address. Header values are used verbatim after trimming.
pub fn extract_client_ip(request: &Request, fallback: Option<SocketAddr>) -> String {
    if let Some(first) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return real_ip.to_string();
    }

    fallback
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Rate limiting middleware.
///
/// Exempt paths and disabled limiting pass straight through. Rejected
/// requests get 429 with a fixed message and a `Retry-After` header.
pub async fn rate_limit_middleware(
    State(state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    if !state.enabled || RateLimiter::is_exempt(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = extract_client_ip(&request, addr);

    if !state.limiter.admit(&client).await {
        return Err(RateLimitError {
            retry_after: state.limiter.window().as_secs().max(1),
        });
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderValue::from_str(&state.limiter.limit().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("100")),
    );
    Ok(response)
}
