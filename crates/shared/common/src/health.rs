//! Liveness endpoint shared by every service.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy(service_name: &str) -> Self {
        Self {
            status: format!("{} healthy", service_name),
        }
    }
}

/// Create `GET /` reporting `"<service_name> healthy"`; nest it under `/health`.
pub fn health_routes<S>(service_name: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/",
        get(move || async move { Json(HealthResponse::healthy(service_name)) }),
    )
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let app: Router = Router::new().nest("/health", health_routes("demo-service"));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "demo-service healthy");
    }
}
