//! Notification Service Library
//!
//! Accepts notifications and reports them as sent. No authentication.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::NotificationServiceConfig;
use crate::routes::create_router;

/// Run the notification service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = NotificationServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run(config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    config: NotificationServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router().layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Notification service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
