//! Bearer token guard for protected routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use domain::BEARER_TOKEN_PREFIX;

use super::token::{Claims, TokenVerifier};
use crate::error::{AppError, AuthError, AuthResult};

/// Strip a literal `Bearer ` prefix. Values without the prefix are returned unchanged.
pub fn bearer_token(header_value: &str) -> &str {
    header_value
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .unwrap_or(header_value)
}

/// Raw `Authorization` header value, if present and valid UTF-8.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok())
}

/// Subject of a verified token, inserted into request extensions by [`bearer_auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

impl AuthenticatedSubject {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Verifies a bearer credential and requires a subject claim.
///
/// Services without a credential store stop here; the auth service layers
/// user resolution on top.
#[derive(Clone)]
pub struct SubjectGuard {
    verifier: Arc<TokenVerifier>,
}

impl SubjectGuard {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Verify the raw header value and return the full claims.
    pub fn claims(&self, authorization: Option<&str>) -> AuthResult<Claims> {
        let header = authorization.ok_or(AuthError::MissingCredentials)?;
        self.verifier.verify(bearer_token(header))
    }

    /// Verify the raw header value and return the subject claim.
    pub fn authorize(&self, authorization: Option<&str>) -> AuthResult<AuthenticatedSubject> {
        let claims = self.claims(authorization)?;
        let subject = claims.subject().ok_or(AuthError::MissingSubject)?;
        Ok(AuthenticatedSubject(subject.to_string()))
    }
}

/// Middleware that rejects requests without a valid bearer token.
pub async fn bearer_auth(
    State(guard): State<SubjectGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let subject = guard.authorize(authorization_header(request.headers()))?;
    tracing::debug!(subject = subject.as_str(), "Authenticated request");

    request.extensions_mut().insert(subject);

    Ok(next.run(request).await)
}
