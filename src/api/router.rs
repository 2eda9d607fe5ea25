use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::dashboard;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Auth API
        .nest("/api", auth::create_auth_router())
        // Authenticated dashboard
        .route("/dashboard/", get(dashboard::dashboard))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
