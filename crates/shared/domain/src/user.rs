//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// Stored credential record for a user.
///
/// Records are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique username, also used as the token subject
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Disabled users can still authenticate but are rejected by protected routes
    pub disabled: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new enabled user without profile attributes
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            full_name: None,
            disabled: false,
            password_hash: password_hash.into(),
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Mark the user as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Check if the user may access protected routes
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique username
    pub username: String,
    /// Email address
    pub email: Option<String>,
    /// Display name
    pub full_name: Option<String>,
    /// Whether the account is disabled
    pub disabled: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            disabled: user.disabled,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            disabled: user.disabled,
        }
    }
}
