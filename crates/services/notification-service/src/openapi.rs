//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{Notification, NotificationReceipt};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "SecureBank Notification Service"),
    paths(crate::handlers::notification_handler::send_notification),
    components(schemas(Notification, NotificationReceipt)),
    tags((name = "Notifications", description = "Notification delivery"))
)]
pub struct ApiDoc;
