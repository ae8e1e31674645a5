use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{handlers, AppState};

pub fn app_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_request_body_bytes();

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Relay API
        .route("/register", post(handlers::register::register))
        .route("/upload", post(handlers::upload::upload_resume))
        .route("/schedule", post(handlers::schedule::schedule))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
