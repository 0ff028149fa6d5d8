// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::{AppInfoLabels, EndpointLabels, ErrorLabels, RequestLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{LATENCY_BUCKETS, MetricsRegistry};

impl MetricsRegistry {
    /// Creates the registry and publishes `app_info` for `version`/`environment`
    pub fn new(version: &str, environment: &str) -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests",
            http_requests.clone(),
        );
        let http_request_duration_seconds =
            Family::<EndpointLabels, Histogram>::new_with_constructor(|| {
                Histogram::new(LATENCY_BUCKETS.iter().copied())
            });
        registry.register(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
            http_request_duration_seconds.clone(),
        );
        let http_requests_in_progress = Family::<EndpointLabels, Gauge>::default();
        registry.register(
            "http_requests_in_progress",
            "Number of HTTP requests in progress",
            http_requests_in_progress.clone(),
        );
        let http_errors = Family::<ErrorLabels, Counter>::default();
        registry.register("http_errors", "Total HTTP errors", http_errors.clone());
        let app_info = Family::<AppInfoLabels, Gauge>::default();
        registry.register(
            "app_info",
            "Application information (value=1)",
            app_info.clone(),
        );

        app_info
            .get_or_create(&AppInfoLabels {
                version: version.to_string(),
                environment: environment.to_string(),
            })
            .set(1);

        Self {
            registry: Arc::new(Mutex::new(registry)),
            http_requests,
            http_request_duration_seconds,
            http_requests_in_progress,
            http_errors,
            app_info,
        }
    }
}
