//! Account handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use common::auth::AuthenticatedSubject;
use domain::Account;

use crate::state::AppState;

/// Create account routes (bearer token required)
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/", get(list_accounts))
}

/// List accounts
#[utoipa::path(
    get,
    path = "/accounts",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All accounts", body = Vec<Account>),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn list_accounts(
    Extension(subject): Extension<AuthenticatedSubject>,
    State(state): State<AppState>,
) -> Json<Vec<Account>> {
    tracing::debug!(subject = subject.as_str(), "Listing accounts");
    Json(state.accounts.list().await)
}
