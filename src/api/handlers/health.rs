use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::{Rejection, timestamp};
use crate::api::state::ApiState;
use crate::state::Flags;

/// Liveness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: f64,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub timestamp: String,
    pub dependencies: Dependencies,
}

/// Simulated dependency status; nothing is actually checked
#[derive(Debug, Serialize, Deserialize)]
pub struct Dependencies {
    pub database: String,
    pub cache: String,
}

impl Dependencies {
    fn simulated() -> Self {
        Self {
            database: "connected".to_string(),
            cache: "connected".to_string(),
        }
    }
}

pub fn liveness(flags: Flags) -> Result<(), Rejection> {
    if flags.healthy.is_ok() {
        Ok(())
    } else {
        tracing::warn!("Health check failed - application unhealthy");
        Err(Rejection::unavailable("Application unhealthy"))
    }
}

pub fn readiness(flags: Flags) -> Result<(), Rejection> {
    if flags.ready.is_ok() {
        Ok(())
    } else {
        tracing::warn!("Readiness check failed - application not ready");
        Err(Rejection::unavailable("Application not ready"))
    }
}

/// GET /health
///
/// Liveness probe. 200 while the service is healthy, 503 otherwise.
pub async fn health_check(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, Rejection> {
    liveness(state.app.flags().await)?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp(),
        uptime_seconds: state.app.uptime_seconds(),
    }))
}

/// GET /ready
///
/// Readiness probe. 200 with the dependency report while ready, 503 otherwise.
pub async fn readiness_check(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ReadyResponse>, Rejection> {
    readiness(state.app.flags().await)?;

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        timestamp: timestamp(),
        dependencies: Dependencies::simulated(),
    }))
}
