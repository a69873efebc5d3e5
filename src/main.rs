//! Showcase: a minimal HTTP workload for container orchestration demos.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! listen port from the environment, sets up the Axum router with the two
//! static routes, and starts the HTTP server.

mod config;
mod routes;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_LOG_FILTER};
use routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve configuration (PORT env var, defaulting if absent or invalid)
    let config = AppConfig::from_env();
    tracing::info!(port = config.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server; a bind failure is fatal and unrecovered
    server::serve(app, config.port).await?;

    Ok(())
}
