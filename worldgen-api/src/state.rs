//! Shared application state for Axum routers.

use std::time::Instant;

use crate::middleware::RateLimitState;
use crate::repository::WorldRepository;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub repository: WorldRepository,
    pub rate_limit: RateLimitState,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(repository: WorldRepository, rate_limit: RateLimitState) -> Self {
        Self {
            repository,
            rate_limit,
            start_time: Instant::now(),
        }
    }
}

crate::impl_from_ref!(WorldRepository, repository);
crate::impl_from_ref!(RateLimitState, rate_limit);
