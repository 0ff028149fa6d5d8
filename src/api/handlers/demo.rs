// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Demo endpoints with simulated latency and failures
//!
//! Delays are awaited with `tokio::time::sleep`, so a slow request only
//! holds up its own task.

use axum::{
    Json,
    extract::{MatchedPath, State},
    http::{Method, StatusCode},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::api::response::{Rejection, round2, timestamp};
use crate::api::state::{ApiState, VERSION};
use crate::metrics::EndpointLabels;
use crate::state::format_uptime;

/// Error type recorded for the injected `/api/flaky` failures
pub const SIMULATED_ERROR: &str = "SimulatedError";

const DATA_DELAY_SECS: (f64, f64) = (0.01, 0.1);
const SLOW_DELAY_SECS: (f64, f64) = (0.5, 2.0);

#[derive(Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse {
    pub data: Vec<Item>,
    pub processed: bool,
    pub processing_time_ms: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub uptime_human: String,
    pub total_requests: u64,
    pub healthy: bool,
    pub ready: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlowResponse {
    pub message: String,
    pub delay_seconds: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlakyResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// GET /api/data
pub async fn get_data(State(state): State<Arc<ApiState>>) -> Json<DataResponse> {
    let processing_time = state.rng.uniform(DATA_DELAY_SECS.0, DATA_DELAY_SECS.1);
    tokio::time::sleep(Duration::from_secs_f64(processing_time)).await;

    let data = (1..=3)
        .map(|id| Item {
            id,
            name: format!("Item {id}"),
            value: state.rng.int(1, 100),
        })
        .collect();

    Json(DataResponse {
        data,
        processed: true,
        processing_time_ms: round2(processing_time * 1000.0),
        timestamp: timestamp(),
    })
}

/// GET /api/status
pub async fn get_status(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    let uptime = state.app.uptime_seconds();
    let flags = state.app.flags().await;

    Json(StatusResponse {
        status: "operational".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: round2(uptime),
        uptime_human: format_uptime(uptime),
        total_requests: state.app.request_count(),
        healthy: flags.healthy.is_ok(),
        ready: flags.ready.is_ok(),
        timestamp: timestamp(),
    })
}

/// GET /api/slow
///
/// Waits 0.5-2.0s before answering. Useful for latency alerts.
pub async fn slow(State(state): State<Arc<ApiState>>) -> Json<SlowResponse> {
    let delay = state.rng.uniform(SLOW_DELAY_SECS.0, SLOW_DELAY_SECS.1);
    tokio::time::sleep(Duration::from_secs_f64(delay)).await;

    Json(SlowResponse {
        message: "This endpoint is intentionally slow".to_string(),
        delay_seconds: round2(delay),
        timestamp: timestamp(),
    })
}

/// GET /api/flaky
///
/// Fails with 500 at the configured rate (10% by default). Useful for
/// error-rate alerts.
pub async fn flaky(
    State(state): State<Arc<ApiState>>,
    method: Method,
    path: MatchedPath,
) -> Result<Json<FlakyResponse>, Rejection> {
    if state.rng.chance(state.config.flaky_failure_rate) {
        tracing::error!("Flaky endpoint triggered failure");
        state.metrics.record_error(
            &EndpointLabels::new(method.as_str(), path.as_str()),
            SIMULATED_ERROR,
        );
        return Err(Rejection::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Simulated random failure",
        ));
    }

    Ok(Json(FlakyResponse {
        status: "success".to_string(),
        message: "Request succeeded".to_string(),
        timestamp: timestamp(),
    }))
}
