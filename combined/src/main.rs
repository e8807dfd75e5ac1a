//! Combined binary for development - runs all services in one process.

use clap::{Parser, Subcommand};
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "securebank")]
#[command(about = "Combined SecureBank services binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8000")]
        auth_port: u16,
        #[arg(long, default_value = "8001")]
        account_port: u16,
        #[arg(long, default_value = "8002")]
        transaction_port: u16,
        #[arg(long, default_value = "8003")]
        notification_port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            auth_port,
            account_port,
            transaction_port,
            notification_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Auth service:         http://{}:{}", host, auth_port);
            info!("  Account service:      http://{}:{}", host, account_port);
            info!("  Transaction service:  http://{}:{}", host, transaction_port);
            info!("  Notification service: http://{}:{}", host, notification_port);

            // Services share JWT_SECRET from the environment; none depends on another at startup.
            let mut services = JoinSet::new();

            let auth_host = host.clone();
            services.spawn(async move {
                if let Err(e) = auth_service_lib::run_embedded(&auth_host, auth_port).await {
                    error!("Auth service failed: {}", e);
                }
                "Auth service"
            });

            let account_host = host.clone();
            services.spawn(async move {
                if let Err(e) = account_service_lib::run_embedded(&account_host, account_port).await
                {
                    error!("Account service failed: {}", e);
                }
                "Account service"
            });

            let transaction_host = host.clone();
            services.spawn(async move {
                if let Err(e) =
                    transaction_service_lib::run_embedded(&transaction_host, transaction_port).await
                {
                    error!("Transaction service failed: {}", e);
                }
                "Transaction service"
            });

            let notification_host = host;
            services.spawn(async move {
                if let Err(e) =
                    notification_service_lib::run_embedded(&notification_host, notification_port)
                        .await
                {
                    error!("Notification service failed: {}", e);
                }
                "Notification service"
            });

            supervise(services).await?;
        }
    }

    Ok(())
}

/// Wait for the first service to stop. Services are expected to run forever,
/// so any exit is reported as an error.
async fn supervise(
    mut services: JoinSet<&'static str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match services.join_next().await {
        Some(Ok(name)) => {
            error!("{} exited unexpectedly", name);
            Err(format!("{} exited unexpectedly", name).into())
        }
        Some(Err(e)) => {
            error!("Service task failed: {}", e);
            Err(e.into())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_first_exit_is_an_error() {
        let mut services: JoinSet<&'static str> = JoinSet::new();
        services.spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            "Auth service"
        });
        services.spawn(async { "Account service" });

        let err = supervise(services).await.unwrap_err();
        assert_eq!(err.to_string(), "Account service exited unexpectedly");
    }

    #[tokio::test]
    async fn test_panicked_service_is_an_error() {
        let mut services: JoinSet<&'static str> = JoinSet::new();
        services.spawn(async { panic!("boom") });

        assert!(supervise(services).await.is_err());
    }
}
