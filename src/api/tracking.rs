// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request tracking middleware
//!
//! Adapts [`Instrumentation`](crate::instrument::Instrumentation) to axum:
//! the routed handler becomes the continuation, handler faults and panics
//! become `Err(Fault)`, and the fault is rendered only after it was recorded.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;

use super::response::Fault;
use super::state::ApiState;
use crate::metrics::EndpointLabels;

pub async fn track_requests(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Response {
    let labels = endpoint_labels(&request);

    state
        .instrumentation
        .observe(&labels, dispatch(request, next))
        .await
        .unwrap_or_else(|fault| fault.into_response())
}

async fn dispatch(request: Request, next: Next) -> Result<Response, Fault> {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => Fault::lift(response),
        Err(payload) => Err(Fault::from_panic(payload)),
    }
}

/// Endpoint label of requests that matched no route
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Route template when matched, [`UNMATCHED_ENDPOINT`] otherwise
///
/// Raw paths never become label values, so the number of series stays
/// bounded by the route table.
fn endpoint_labels(request: &Request) -> EndpointLabels {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ENDPOINT, MatchedPath::as_str);
    EndpointLabels::new(request.method().as_str(), endpoint)
}
