//! Web server module for the webhook endpoint.
//!
//! One route does the work (`POST /callback`); `GET /health` exists for
//! probes. Request tracing is layered on by the binary.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

pub use handlers::{callback, health, AppState, HealthResponse, SIGNATURE_HEADER};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/callback", post(callback))
        .with_state(state)
}
