//! OpenAPI documentation.

use utoipa::OpenApi;

use common::openapi::SecurityAddon;
use domain::Transaction;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "SecureBank Transaction Service"),
    paths(
        crate::handlers::transaction_handler::create_transaction,
        crate::handlers::transaction_handler::list_transactions,
    ),
    components(schemas(Transaction)),
    modifiers(&SecurityAddon),
    tags((name = "Transactions", description = "Transaction recording"))
)]
pub struct ApiDoc;
