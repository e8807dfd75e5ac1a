//! HTTP handlers.

pub mod notification_handler;

pub use notification_handler::notification_routes;
