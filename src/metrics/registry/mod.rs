// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for HTTP request instrumentation

mod init;
mod record;

use crate::metrics::labels::{AppInfoLabels, EndpointLabels, ErrorLabels, RequestLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Latency buckets in seconds
pub const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    http_requests: Family<RequestLabels, Counter>,
    http_request_duration_seconds: Family<EndpointLabels, Histogram>,
    http_requests_in_progress: Family<EndpointLabels, Gauge>,
    http_errors: Family<ErrorLabels, Counter>,
    app_info: Family<AppInfoLabels, Gauge>,
}

impl std::fmt::Debug for MetricsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRegistry").finish_non_exhaustive()
    }
}
