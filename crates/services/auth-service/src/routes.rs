//! Route configuration.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::health::health_routes;

use crate::config::SERVICE_NAME;
use crate::handlers::{auth_routes, user_routes};
use crate::middleware::active_user_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes(SERVICE_NAME))
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Token issuance (no auth)
        .merge(auth_routes())
        // User routes (active user required)
        .nest(
            "/users",
            user_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                active_user_middleware,
            )),
        )
        .with_state(state)
}
