//! Shared configuration structures.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binaries). Loaders take a lookup function so they can be fed
//! from a map in tests.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::{
    DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES, DEFAULT_JWT_ALGORITHM, MAX_ACCESS_TOKEN_EXPIRE_MINUTES,
};

/// Startup-time configuration errors. These are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
}

/// Read a variable from the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and health reports
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Load `<PREFIX>_HOST` / `<PREFIX>_PORT` from the environment.
    pub fn from_env(prefix: &str, service_name: &str, default_port: u16) -> Self {
        Self::from_source(prefix, service_name, default_port, env_lookup)
    }

    /// Load from an arbitrary key lookup. Unparseable ports fall back to the default.
    pub fn from_source<F>(prefix: &str, service_name: &str, default_port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: service_name.to_string(),
            host: lookup(&format!("{}_HOST", prefix)).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup(&format!("{}_PORT", prefix))
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
        }
    }

    /// Socket address string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// JWT configuration shared by the issuing and verifying services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    /// Signing algorithm name, e.g. `HS256`
    pub algorithm: String,
    /// Lifetime of issued access tokens
    pub access_token_expire_minutes: i64,
}

impl JwtConfig {
    /// Load `JWT_SECRET`, `JWT_ALGORITHM` and `ACCESS_TOKEN_EXPIRE_MINUTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(env_lookup)
    }

    /// Load from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        let access_token_expire_minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(minutes) if (1..=MAX_ACCESS_TOKEN_EXPIRE_MINUTES).contains(&minutes) => {
                    minutes
                }
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        };

        Ok(Self {
            secret,
            algorithm: lookup("JWT_ALGORITHM").unwrap_or_else(|| DEFAULT_JWT_ALGORITHM.to_string()),
            access_token_expire_minutes,
        })
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            algorithm: DEFAULT_JWT_ALGORITHM.to_string(),
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        }
    }
}
