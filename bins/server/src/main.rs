//! Aerodesk API Server
//!
//! Main entry point for the Aerodesk reporting backend.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aerodesk_api::{AppState, create_router};
use aerodesk_db::connect_with;
use aerodesk_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerodesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    if config.session.secret == "change-me-in-production" {
        warn!("Session secret is the development default");
    }

    // Connect to database
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    // Create application state and router
    let state = AppState::new(db, config.session.clone());
    let app = create_router(state, &config.server);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(cors_origin = %config.server.cors_origin, "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
