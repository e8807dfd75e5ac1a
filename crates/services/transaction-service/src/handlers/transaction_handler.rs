//! Transaction handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use common::auth::AuthenticatedSubject;
use domain::Transaction;

use crate::state::AppState;

/// Create transaction routes (bearer token required)
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/",
            get(list_transactions).post(create_transaction),
        )
}

/// Record a transaction
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    request_body = Transaction,
    responses(
        (status = 200, description = "Transaction recorded", body = Transaction),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn create_transaction(
    Extension(subject): Extension<AuthenticatedSubject>,
    State(state): State<AppState>,
    Json(transaction): Json<Transaction>,
) -> Json<Transaction> {
    tracing::info!(
        subject = subject.as_str(),
        transaction_id = %transaction.transaction_id,
        "Recording transaction"
    );
    Json(state.transactions.append(transaction).await)
}

/// List recorded transactions
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All recorded transactions", body = Vec<Transaction>),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn list_transactions(
    Extension(_subject): Extension<AuthenticatedSubject>,
    State(state): State<AppState>,
) -> Json<Vec<Transaction>> {
    Json(state.transactions.list().await)
}
