//! Auth Service Library
//!
//! Issues access tokens for the sample users and exposes the authenticated
//! user's profile. Other services verify the tokens with the shared secret.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::auth::{SubjectGuard, TokenIssuer, TokenVerifier};
use common::AppResult;

use crate::config::AuthServiceConfig;
use crate::middleware::RouteGuard;
use crate::routes::create_router;
use crate::service::{Authenticator, UserResolver};
use crate::state::AppState;
use crate::store::{sample_users, CredentialStore, InMemoryCredentialStore};

/// Run the auth service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = AuthServiceConfig::from_env()?;
    config.service.host = host.to_string();
    config.service.port = port;
    run(config).await
}

/// Build application state over the given credential store.
pub fn build_state(
    config: &AuthServiceConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let issuer = TokenIssuer::from_config(&config.jwt)?;
    let verifier = Arc::new(TokenVerifier::from_config(&config.jwt)?);

    let auth_service = Arc::new(Authenticator::new(
        store.clone(),
        issuer,
        config.jwt.access_token_expire_minutes,
    )?);
    let guard = RouteGuard::new(SubjectGuard::new(verifier), UserResolver::new(store));

    Ok(AppState::new(auth_service, guard))
}

/// Build the in-memory store holding the sample users.
pub fn sample_store() -> AppResult<InMemoryCredentialStore> {
    Ok(InMemoryCredentialStore::new(sample_users()?))
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    config: AuthServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store = sample_store()?;
    info!("Loaded {} sample users", store.len());

    let state = build_state(&config, Arc::new(store))?;

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Auth service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
