//! HTTP API module for SRE Showcase
//!
//! Every route (and the 404 fallback) runs behind the request tracking
//! middleware.
//!
//! # Endpoints
//! - `GET /` - service info
//! - `GET /health` - liveness probe
//! - `GET /ready` - readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /api/data`, `/api/status`, `/api/slow`, `/api/flaky` - demo endpoints
//! - `POST /admin/break`, `/admin/fix` - incident simulation

pub mod handlers;
mod response;
mod state;
mod tracking;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

pub use response::{Fault, FaultBody, Rejection, RejectionBody};
pub use state::{ApiState, VERSION};
pub use tracking::{UNMATCHED_ENDPOINT, track_requests};

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/data", get(handlers::get_data))
        .route("/api/status", get(handlers::get_status))
        .route("/api/slow", get(handlers::slow))
        .route("/api/flaky", get(handlers::flaky))
        .route("/admin/break", post(handlers::break_app))
        .route("/admin/fix", post(handlers::fix_app))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_requests,
        ))
        .with_state(state)
}
