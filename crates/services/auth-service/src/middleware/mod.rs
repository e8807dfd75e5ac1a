//! Request guards.

mod auth;

pub use auth::{active_user_middleware, CurrentUser, RouteGuard};
