//! Token issuance and current-user handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::UserResponse;

use crate::middleware::CurrentUser;
use crate::service::TokenResponse;
use crate::state::AppState;

/// OAuth2 password-grant form. Extra OAuth2 fields (grant_type, scope, ...) are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "secret")]
    pub password: String,
}

/// Create token routes (no auth required)
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/token", post(login))
}

/// Create user routes (active user required)
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(read_users_me))
}

/// Exchange username and password for an access token
#[utoipa::path(
    post,
    path = "/token",
    tag = "Authentication",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;
    Ok(Json(token))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token, or unknown user"),
        (status = 403, description = "Inactive user")
    )
)]
pub async fn read_users_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
