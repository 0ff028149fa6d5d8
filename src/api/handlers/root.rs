use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::round2;
use crate::api::state::{ApiState, VERSION};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub uptime_seconds: f64,
    pub total_requests: u64,
    pub endpoints: EndpointIndex,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointIndex {
    pub health: String,
    pub ready: String,
    pub metrics: String,
    pub api: String,
}

/// GET /
///
/// Service information and endpoint index.
pub async fn root(State(state): State<Arc<ApiState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "SRE Showcase API".to_string(),
        version: VERSION.to_string(),
        status: "operational".to_string(),
        uptime_seconds: round2(state.app.uptime_seconds()),
        total_requests: state.app.request_count(),
        endpoints: EndpointIndex {
            health: "/health".to_string(),
            ready: "/ready".to_string(),
            metrics: "/metrics".to_string(),
            api: "/api/*".to_string(),
        },
    })
}
