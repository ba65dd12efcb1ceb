//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Session and admin middleware
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::map_response,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use aerodesk_shared::config::ServerConfig;
use aerodesk_shared::{JwtService, SessionConfig};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Token service for session cookies.
    pub jwt_service: Arc<JwtService>,
    /// Session cookie settings.
    pub session: Arc<SessionConfig>,
}

impl AppState {
    /// Builds the state from a connection and session settings.
    #[must_use]
    pub fn new(db: DatabaseConnection, session: SessionConfig) -> Self {
        Self {
            db: Arc::new(db),
            jwt_service: Arc::new(JwtService::new(&session)),
            session: Arc::new(session),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(map_response(error::timeout_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origin))
        .with_state(state)
}

/// CORS for the frontend origin, with credentials so the session cookie is sent.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            warn!(error = %e, origin, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}
