//! Notification service configuration.

use common::ServiceConfig;

/// Environment prefix for host/port variables.
pub const ENV_PREFIX: &str = "NOTIFICATION_SERVICE";

/// Service name used in logs and health reports.
pub const SERVICE_NAME: &str = "notification-service";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8003;

/// Notification service configuration. No signing secret is needed.
#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    pub service: ServiceConfig,
}

impl NotificationServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT),
        }
    }
}
