//! Application state for dependency injection.

use std::sync::Arc;

use crate::middleware::RouteGuard;
use crate::service::AuthService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub guard: RouteGuard,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth_service: Arc<dyn AuthService>, guard: RouteGuard) -> Self {
        Self {
            auth_service,
            guard,
        }
    }
}
