//! Account Service Library
//!
//! Lists accounts to callers holding a valid bearer token.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::auth::{SubjectGuard, TokenVerifier};

use crate::config::AccountServiceConfig;
use crate::routes::create_router;
use crate::state::AppState;
use crate::store::{AccountStore, InMemoryAccountStore};

/// Run the account service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = AccountServiceConfig::from_env()?;
    config.service.host = host.to_string();
    config.service.port = port;
    run(config).await
}

/// Build application state over the given account store.
pub fn build_state(
    config: &AccountServiceConfig,
    accounts: Arc<dyn AccountStore>,
) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let verifier = TokenVerifier::from_config(&config.jwt)?;
    Ok(AppState::new(accounts, SubjectGuard::new(Arc::new(verifier))))
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    config: AccountServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = build_state(&config, Arc::new(InMemoryAccountStore::with_sample_data()))?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Account service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
