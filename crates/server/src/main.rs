//! Clinical records intake server.
//!
//! Binds the intake HTTP API to a SQLite-backed store.

use clap::Parser;
use intake_rest::{ServerConfig, create_app_with_config, init_logging};
use intake_store::sqlite::SqliteBackend;
use tracing::info;

/// Creates and initializes the SQLite backend from the server configuration.
fn create_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or("intake.db");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting intake server"
    );

    let backend = create_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
