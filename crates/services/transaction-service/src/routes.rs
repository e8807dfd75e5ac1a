//! Route configuration.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::auth::bearer_auth;
use common::health::health_routes;

use crate::config::SERVICE_NAME;
use crate::handlers::transaction_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes(SERVICE_NAME))
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Transaction routes (bearer token required)
        .merge(transaction_routes().route_layer(middleware::from_fn_with_state(
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
        http::{header, Request, StatusCode},
    };
    use common::auth::{parse_algorithm, SubjectGuard, TokenVerifier};
    use tower::ServiceExt;

    use super::*;
    use crate::store::MockTransactionStore;

    #[tokio::test]
    async fn test_unauthenticated_post_is_not_recorded() {
        let mut store = MockTransactionStore::new();
        store.expect_append().times(0);

        let verifier = TokenVerifier::new("secret", parse_algorithm("HS256").unwrap()).unwrap();
        let state = AppState::new(Arc::new(store), SubjectGuard::new(Arc::new(verifier)));

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/transactions")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"transaction_id":"TX-1","account_id":"ACC-1001","amount":5.0,"currency":"USD"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
