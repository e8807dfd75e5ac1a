//! Transaction Service Library
//!
//! Records and lists transactions for callers holding a valid bearer token.

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

use crate::config::TransactionServiceConfig;
use crate::routes::create_router;
use crate::state::AppState;
use crate::store::{InMemoryTransactionStore, TransactionStore};

/// Run the transaction service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = TransactionServiceConfig::from_env()?;
    config.service.host = host.to_string();
    config.service.port = port;
    run(config).await
}

/// Build application state over the given transaction store.
pub fn build_state(
    config: &TransactionServiceConfig,
    transactions: Arc<dyn TransactionStore>,
) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let verifier = TokenVerifier::from_config(&config.jwt)?;
    Ok(AppState::new(
        transactions,
        SubjectGuard::new(Arc::new(verifier)),
    ))
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    config: TransactionServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = build_state(&config, Arc::new(InMemoryTransactionStore::default()))?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("Transaction service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
