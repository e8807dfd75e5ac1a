//! Transaction service configuration.

use common::{ConfigError, JwtConfig, ServiceConfig};

/// Environment prefix for host/port variables.
pub const ENV_PREFIX: &str = "TRANSACTION_SERVICE";

/// Service name used in logs and health reports.
pub const SERVICE_NAME: &str = "transaction-service";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8002;

/// Transaction service configuration.
#[derive(Debug, Clone)]
pub struct TransactionServiceConfig {
    pub service: ServiceConfig,
    pub jwt: JwtConfig,
}

impl TransactionServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service: ServiceConfig::from_env(ENV_PREFIX, SERVICE_NAME, DEFAULT_PORT),
            jwt: JwtConfig::from_env()?,
        })
    }
}
