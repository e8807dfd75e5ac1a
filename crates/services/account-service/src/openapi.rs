//! OpenAPI documentation.

use utoipa::OpenApi;

use common::openapi::SecurityAddon;
use domain::Account;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "SecureBank Account Service"),
    paths(crate::handlers::account_handler::list_accounts),
    components(schemas(Account)),
    modifiers(&SecurityAddon),
    tags((name = "Accounts", description = "Account listing"))
)]
pub struct ApiDoc;
