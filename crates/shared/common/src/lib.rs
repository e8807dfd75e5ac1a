//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Configuration structures loaded from the environment
//! - Health routes and the OpenAPI bearer security scheme
//! - Bearer token issuance, verification and the request guard built on them

#[cfg(feature = "jwt")]
pub mod auth;
pub mod config;
pub mod error;
pub mod health;
pub mod openapi;

pub use config::*;
pub use error::{AppError, AppResult, AuthError, AuthResult, InvalidTokenKind};
