//! Notification handlers.

use axum::{response::Json, routing::post, Router};

use domain::{Notification, NotificationReceipt};

/// Create notification routes (no auth)
pub fn notification_routes() -> Router {
    Router::new()
        .route("/notify", post(send_notification))
        .route("/notify/", post(send_notification))
}

/// Accept a notification for delivery
///
/// Delivery is simulated: the notification is logged and reported as sent.
#[utoipa::path(
    post,
    path = "/notify",
    tag = "Notifications",
    request_body = Notification,
    responses(
        (status = 200, description = "Notification sent", body = NotificationReceipt)
    )
)]
pub async fn send_notification(
    Json(notification): Json<Notification>,
) -> Json<NotificationReceipt> {
    tracing::info!(
        channel = %notification.channel,
        recipient = %notification.recipient,
        "Sending notification"
    );
    Json(NotificationReceipt::sent(notification))
}
