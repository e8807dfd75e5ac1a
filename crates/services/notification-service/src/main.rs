//! Notification Service - accepts notifications for delivery.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notification_service_lib::config::NotificationServiceConfig;

#[derive(Parser)]
#[command(name = "notification-service")]
#[command(about = "Notification microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides NOTIFICATION_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides NOTIFICATION_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = NotificationServiceConfig::from_env();
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            notification_service_lib::run(config).await?;
        }
    }

    Ok(())
}
