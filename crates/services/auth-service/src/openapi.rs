//! OpenAPI documentation.

use utoipa::OpenApi;

use common::openapi::SecurityAddon;
use domain::UserResponse;

use crate::handlers::auth_handler::LoginForm;
use crate::service::TokenResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "SecureBank Auth Service"),
    paths(
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::read_users_me,
    ),
    components(schemas(LoginForm, TokenResponse, UserResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Authenticated user profile"),
    )
)]
pub struct ApiDoc;
