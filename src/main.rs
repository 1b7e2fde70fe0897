use anyhow::Context;
use tracing_subscriber::EnvFilter;

use contacts_api::config::{AppConfig, Environment};
use contacts_api::database::DatabaseManager;
use contacts_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, CONTACTS_DB_URL, etc.
    let _ = dotenvy::dotenv();

    let environment = Environment::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter())),
        )
        .init();

    // Refuse to listen without port, store URL and database name
    let config = AppConfig::from_env().context("invalid server configuration")?;
    tracing::info!("Starting Contacts API in {:?} mode", config.environment);

    let database = DatabaseManager::connect(&config.database)
        .await
        .context("DB Connection is FAILED")?;
    database
        .ensure_schema()
        .await
        .context("failed to prepare collections")?;
    tracing::info!("DB Connection is SUCCESS");

    let state = AppState::new(database.contacts(), database.groups());

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server started at {}", config.server.port);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
