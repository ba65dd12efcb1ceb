//! API route definitions.

use axum::{Router, middleware};

use crate::{
    AppState,
    middleware::{admin_guard, session_middleware},
};

pub mod auth;
pub mod health;
pub mod reports;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Layers run bottom-up: session first, then the admin check
    let admin_routes = Router::new()
        .merge(reports::routes())
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    let session_routes = Router::new()
        .merge(auth::session_routes())
        .layer(middleware::from_fn_with_state(state, session_middleware));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(session_routes)
        .merge(admin_routes)
}
