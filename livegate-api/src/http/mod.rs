// Module: http
// JSON API for resolving event live streams

pub mod client_ip;
pub mod error;
pub mod health;
pub mod live_stream;

use std::sync::Arc;

use axum::Router;
use livegate_core::service::LiveStreamService;
use tower_http::trace::TraceLayer;

pub use client_ip::ClientIp;
pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub live_stream_service: Arc<LiveStreamService>,
}

/// Create the HTTP router with all routes
pub fn create_router(live_stream_service: Arc<LiveStreamService>) -> Router {
    let state = AppState {
        live_stream_service,
    };

    Router::new()
        .merge(health::create_health_router())
        .merge(live_stream::create_live_stream_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
