use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::state::ApiState;
use crate::error::Result;

/// Prometheus text exposition format
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn metrics_handler(State(state): State<Arc<ApiState>>) -> Result<Response> {
    tracing::debug!("/metrics encode");
    let metrics_text = state.metrics.encode_metrics().await?;

    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], metrics_text).into_response())
}
