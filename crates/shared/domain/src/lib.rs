//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared across the services.

pub mod account;
pub mod constants;
pub mod error;
pub mod notification;
pub mod password;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use notification::{Notification, NotificationReceipt};
pub use password::Password;
pub use transaction::Transaction;
pub use user::{User, UserResponse};
