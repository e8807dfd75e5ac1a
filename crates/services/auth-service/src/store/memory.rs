use std::collections::HashMap;

use async_trait::async_trait;

use domain::User;

use super::CredentialStore;

/// Immutable in-memory credential store keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, User>,
}

impl InMemoryCredentialStore {
    /// Build a store from a list of users. Later duplicates replace earlier ones.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}
