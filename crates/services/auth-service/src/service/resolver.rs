use std::sync::Arc;

use common::{AuthError, AuthResult};
use domain::User;

use crate::store::CredentialStore;

/// Maps a verified subject claim back to its stored user.
///
/// Disabled users resolve successfully; rejecting them is the guard's job.
#[derive(Clone)]
pub struct UserResolver {
    store: Arc<dyn CredentialStore>,
}

impl UserResolver {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, subject: &str) -> AuthResult<User> {
        self.store
            .find_by_username(subject)
            .await
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::store::MockCredentialStore;

    #[tokio::test]
    async fn test_resolve_known_subject() {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_username()
            .with(eq("johndoe"))
            .times(1)
            .returning(|_| Some(User::new("johndoe", "hash")));

        let user = UserResolver::new(Arc::new(store))
            .resolve("johndoe")
            .await
            .unwrap();
        assert_eq!(user.username, "johndoe");
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject() {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_username().returning(|_| None);

        let err = UserResolver::new(Arc::new(store))
            .resolve("ghost")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    #[tokio::test]
    async fn test_resolve_disabled_user_succeeds() {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_username()
            .returning(|_| Some(User::new("alice", "hash").disabled()));

        let user = UserResolver::new(Arc::new(store))
            .resolve("alice")
            .await
            .unwrap();
        assert!(user.disabled);
    }
}
