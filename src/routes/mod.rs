//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server exists to keep the Gemini credential off the client. It binds
//! the proxy endpoint plus a health check under a single Axum router with
//! request tracing.

pub mod gemini;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::gemini::proxy::PROXY_PATH;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(PROXY_PATH, post(gemini::generate))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
