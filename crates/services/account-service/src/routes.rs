//! Route configuration.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::auth::bearer_auth;
use common::health::health_routes;

use crate::config::SERVICE_NAME;
use crate::handlers::account_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes(SERVICE_NAME))
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Account routes (bearer token required)
        .merge(account_routes().route_layer(middleware::from_fn_with_state(
            state.guard.clone(),
            bearer_auth,
        )))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::auth::{parse_algorithm, SubjectGuard, TokenVerifier};
    use tower::ServiceExt;

    use super::*;
    use crate::store::MockAccountStore;

    #[tokio::test]
    async fn test_rejected_request_never_reaches_store() {
        let mut store = MockAccountStore::new();
        store.expect_list().times(0);

        let verifier = TokenVerifier::new("secret", parse_algorithm("HS256").unwrap()).unwrap();
        let state = AppState::new(Arc::new(store), SubjectGuard::new(Arc::new(verifier)));

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/accounts")
                    .header("Authorization", "Bearer forged")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
