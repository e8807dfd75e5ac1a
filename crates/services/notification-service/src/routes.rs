//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::health::health_routes;

use crate::config::SERVICE_NAME;
use crate::handlers::notification_routes;
use crate::openapi::ApiDoc;

/// Create the main router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .nest("/health", health_routes(SERVICE_NAME))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(notification_routes())
}
