//! Account service configuration.

use common::{ConfigError, JwtConfig, ServiceConfig};

/// Environment prefix for host/port variables.
pub const ENV_PREFIX: &str = "ACCOUNT_SERVICE";

/// Service name used in logs and health reports.
pub const SERVICE_NAME: &str = "account-service";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8001;

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    pub service: ServiceConfig,
    /// Only the secret and algorithm are used; this service never issues tokens
    pub jwt: JwtConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service: ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT),
            jwt: JwtConfig::from_env()?,
        })
    }
}
