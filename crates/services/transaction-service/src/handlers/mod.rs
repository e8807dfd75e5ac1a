//! HTTP handlers.

pub mod transaction_handler;

pub use transaction_handler::transaction_routes;
