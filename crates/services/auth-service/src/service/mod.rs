//! Authentication business logic.

mod auth_service;
mod resolver;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use resolver::UserResolver;
