//! Credential storage.
//!
//! Handlers and services only see the [`CredentialStore`] trait; the sample
//! data lives in an in-memory implementation built once at startup.

mod memory;
mod sample;

use async_trait::async_trait;

use domain::User;

pub use memory::InMemoryCredentialStore;
pub use sample::sample_users;

/// Read-only lookup of stored credential records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Option<User>;
}
