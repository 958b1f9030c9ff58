//! # intake-rest - HTTP API for the clinical records intake service
//!
//! This crate exposes the intake operations over HTTP: patient
//! registration, encounter creation, vitals submission, and the patient
//! roster and detail read-back views.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake_rest::{ServerConfig, create_app_with_config};
//! use intake_store::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("intake.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL | Success |
//! |-----------|-------------|-----|---------|
//! | register patient | POST | `/api/patients` | 201 |
//! | patient roster | GET | `/api/patients` | 200 |
//! | patient detail | GET | `/api/patients/{id}` | 200 |
//! | start encounter | POST | `/api/encounters` | 201 |
//! | submit vitals | POST | `/api/vitals` | 201 |
//! | health check | GET | `/health` | 200 |
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON envelope with an appropriate status code:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid-id | Malformed record identifier |
//! | 400 | invalid | Bad request |
//! | 404 | not-found | Identifier was never issued |
//! | 500 | internal | Storage failure |
//!
//! ## Configuration
//!
//! The server is configured via CLI arguments or `INTAKE_*` environment
//! variables; see [`ServerConfig`].
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration
//! - [`error`] - Error types and the JSON error envelope
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use intake_store::store::{EncounterStore, PatientStore, VitalsStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function; for more control use
/// [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: PatientStore + EncounterStore + VitalsStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes plus the middleware stack: request tracing, a
/// request timeout, a body size limit, and (when enabled) CORS.
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PatientStore + EncounterStore + VitalsStore + Send + Sync + 'static,
{
    info!(
        "Creating intake API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ))
        .layer(axum::extract::DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "intake_rest={level},intake_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
