//! Login: password verification and token issuance.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::auth::TokenIssuer;
use common::{AppError, AppResult, AuthError};
use domain::{Password, User, SECONDS_PER_MINUTE, TOKEN_TYPE_BEARER};

use crate::store::CredentialStore;

/// Token response returned after successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT access token
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 1800)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a username/password pair and issue an access token
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse>;
}

/// AuthService backed by a credential store and a token issuer.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    issuer: TokenIssuer,
    ttl: Duration,
    // Verified against when the username is unknown so both paths do the same work.
    dummy_password: Password,
}

impl Authenticator {
    /// Create a new authenticator issuing tokens valid for `ttl_minutes`.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        issuer: TokenIssuer,
        ttl_minutes: i64,
    ) -> AppResult<Self> {
        let ttl = Duration::try_minutes(ttl_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                AppError::internal(format!("invalid token ttl: {} minutes", ttl_minutes))
            })?;

        Ok(Self {
            store,
            issuer,
            ttl,
            dummy_password: Password::new("dummy-password-never-matches")?,
        })
    }

    /// Return the user only if it exists and the password matches.
    async fn authenticate_user(&self, username: &str, password: &str) -> Option<User> {
        let user = self.store.find_by_username(username).await;

        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => self.dummy_password.clone(),
        };
        let password_valid = stored.verify(password);

        user.filter(|_| password_valid)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let user = self
            .authenticate_user(username, password)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let access_token = self.issuer.issue(&user.username, self.ttl)?;
        tracing::info!(username = %user.username, "Issued access token");

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.ttl.num_minutes() * SECONDS_PER_MINUTE,
        })
    }
}

#[cfg(test)]
mod tests {
    use common::auth::{parse_algorithm, TokenVerifier};

    use super::*;
    use crate::store::MockCredentialStore;

    const SECRET: &str = "auth-service-test-secret";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, parse_algorithm("HS256").unwrap()).unwrap()
    }

    fn store_with(user: User) -> MockCredentialStore {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_username().returning(move |name| {
            if name == user.username {
                Some(user.clone())
            } else {
                None
            }
        });
        store
    }

    fn johndoe() -> User {
        User::new("johndoe", Password::new("secret").unwrap().into_string())
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let auth = Authenticator::new(Arc::new(store_with(johndoe())), issuer(), 30).unwrap();

        let token = auth.login("johndoe", "secret").await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 1800);

        let verifier = TokenVerifier::new(SECRET, parse_algorithm("HS256").unwrap()).unwrap();
        let claims = verifier.verify(&token.access_token).unwrap();
        assert_eq!(claims.subject(), Some("johndoe"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let auth = Authenticator::new(Arc::new(store_with(johndoe())), issuer(), 30).unwrap();

        let err = auth.login("johndoe", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let auth = Authenticator::new(Arc::new(store_with(johndoe())), issuer(), 30).unwrap();

        let err = auth.login("mallory", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn test_out_of_range_ttl_is_rejected_at_construction() {
        for minutes in [0, -5, i64::MAX] {
            let store = Arc::new(MockCredentialStore::new());
            let result = Authenticator::new(store, issuer(), minutes);
            assert!(matches!(result, Err(AppError::Internal(_))));
        }
    }

    #[tokio::test]
    async fn test_disabled_user_can_still_log_in() {
        let alice = User::new("alice", Password::new("secret2").unwrap().into_string()).disabled();
        let auth = Authenticator::new(Arc::new(store_with(alice)), issuer(), 30).unwrap();

        assert!(auth.login("alice", "secret2").await.is_ok());
    }
}
