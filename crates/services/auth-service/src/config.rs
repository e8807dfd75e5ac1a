//! Auth service configuration.

use common::{ConfigError, JwtConfig, ServiceConfig};

/// Environment prefix for host/port variables.
pub const ENV_PREFIX: &str = "AUTH_SERVICE";

/// Service name used in logs and health reports.
pub const SERVICE_NAME: &str = "auth-service";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub service: ServiceConfig,
    /// Signing secret, algorithm and token lifetime
    pub jwt: JwtConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `JWT_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service: ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT),
            jwt: JwtConfig::from_env()?,
        })
    }
}
