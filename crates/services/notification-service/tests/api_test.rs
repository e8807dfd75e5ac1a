//! HTTP-level tests for the notification service.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use notification_service_lib::routes::create_router;

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn notify(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_notification_is_reported_sent() {
    let response = create_router()
        .oneshot(notify(
            "/notify",
            &json!({
                "channel": "email",
                "recipient": "johndoe@example.com",
                "message": "Your transfer has completed"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "status": "SENT",
            "channel": "email",
            "recipient": "johndoe@example.com",
            "message": "Your transfer has completed"
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_route() {
    let response = create_router()
        .oneshot(notify(
            "/notify/",
            &json!({"channel": "sms", "recipient": "+15550100", "message": "hi"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let response = create_router()
        .oneshot(notify("/notify", &json!({"channel": "sms", "message": "hi"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let response = create_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"status": "notification-service healthy"})
    );
}
