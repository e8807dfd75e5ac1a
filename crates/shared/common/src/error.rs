//! Unified error handling.
//!
//! `AuthError` carries authentication and authorization decisions.
//! `AppError` is the single error type handlers return; it is converted to an
//! Axum HTTP response exactly once, at the boundary.

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Reason a token was rejected. Only used for logging; callers see a single
/// unauthorized outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenKind {
    Malformed,
    BadSignature,
    Expired,
}

impl std::fmt::Display for InvalidTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTokenKind::Malformed => write!(f, "malformed"),
            InvalidTokenKind::BadSignature => write!(f, "bad signature"),
            InvalidTokenKind::Expired => write!(f, "expired"),
        }
    }
}

/// Authentication and authorization failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header on a protected request
    #[error("Not authenticated")]
    MissingCredentials,

    /// Token failed to decode, had a bad signature, or is expired
    #[error("Invalid or expired token")]
    InvalidToken(InvalidTokenKind),

    /// Token decoded but carries no subject
    #[error("Invalid token payload")]
    MissingSubject,

    /// Subject does not name a known user
    #[error("User not found")]
    UserNotFound,

    /// User exists but is disabled
    #[error("Inactive user")]
    InactiveUser,

    /// Username/password pair did not match
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Token could not be produced
    #[error("Token issuance failed: {0}")]
    Issuance(String),
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Incorrect username or password")]
    InvalidCredentials,

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(kind) => {
                tracing::debug!("Rejected token: {}", kind);
                AppError::Unauthorized(err.to_string())
            }
            AuthError::MissingCredentials
            | AuthError::MissingSubject
            | AuthError::UserNotFound => AppError::Unauthorized(err.to_string()),
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::InactiveUser => AppError::Forbidden(err.to_string()),
            AuthError::Issuance(msg) => AppError::Internal(msg),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_collapse_to_unauthorized() {
        for kind in [
            InvalidTokenKind::Malformed,
            InvalidTokenKind::BadSignature,
            InvalidTokenKind::Expired,
        ] {
            let err = AppError::from(AuthError::InvalidToken(kind));
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.user_message(), "Invalid or expired token");
        }
    }

    #[test]
    fn test_auth_error_status_mapping() {
        assert_eq!(
            AppError::from(AuthError::UserNotFound).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::MissingSubject).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::MissingCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::InactiveUser).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(AuthError::Issuance("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let response = AppError::from(AuthError::UserNotFound).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), "Bearer");
    }

    #[test]
    fn test_forbidden_response_has_no_challenge() {
        let response = AppError::from(AuthError::InactiveUser).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("signing key corrupted");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::from(AuthError::InactiveUser).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "FORBIDDEN");
        assert_eq!(body["error"]["message"], "Inactive user");
    }
}
