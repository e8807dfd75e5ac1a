//! Authentication middleware for routes that need an active user.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use common::auth::{authorization_header, SubjectGuard};
use common::{AppError, AuthError, AuthResult};
use domain::User;

use crate::service::UserResolver;
use crate::state::AppState;

/// Active user resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Token verification followed by user resolution and the disabled check.
///
/// Steps, in order: strip the `Bearer ` prefix, verify the token, require a
/// subject, resolve the user, reject disabled users. The first four fail as
/// unauthorized; the last fails as forbidden.
#[derive(Clone)]
pub struct RouteGuard {
    subjects: SubjectGuard,
    resolver: UserResolver,
}

impl RouteGuard {
    pub fn new(subjects: SubjectGuard, resolver: UserResolver) -> Self {
        Self { subjects, resolver }
    }

    /// Authorize a request from its raw `Authorization` header value.
    pub async fn authorize(&self, authorization: Option<&str>) -> AuthResult<User> {
        let subject = self.subjects.authorize(authorization)?;
        let user = self.resolver.resolve(subject.as_str()).await?;

        if !user.is_active() {
            return Err(AuthError::InactiveUser);
        }

        Ok(user)
    }
}

/// Middleware that injects [`CurrentUser`] or rejects the request.
pub async fn active_user_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state
        .guard
        .authorize(authorization_header(request.headers()))
        .await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
