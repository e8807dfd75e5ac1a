//! Auth Service - issues and checks bearer tokens.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::auth::TokenIssuer;

use auth_service_lib::config::AuthServiceConfig;

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(about = "Authentication microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides AUTH_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides AUTH_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate configuration and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = AuthServiceConfig::from_env()?;
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            auth_service_lib::run(config).await?;
        }
        Commands::CheckConfig => {
            let config = AuthServiceConfig::from_env()?;
            TokenIssuer::from_config(&config.jwt)?;
            tracing::info!(
                algorithm = %config.jwt.algorithm,
                ttl_minutes = config.jwt.access_token_expire_minutes,
                "Configuration is valid"
            );
        }
    }

    Ok(())
}
