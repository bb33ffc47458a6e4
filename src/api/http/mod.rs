// src/api/http/mod.rs
// HTTP router composition for the REST surface.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::AppState;

mod chat;

pub use chat::{chat_handler, health_handler};

/// Main HTTP router: health plus the single chat endpoint. The timeout layer
/// bounds a request end-to-end, covering both possible completion calls.
pub fn http_router(app_state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
