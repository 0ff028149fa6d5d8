// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Recording and exposition helpers

use crate::error::{AppError, Result};
use crate::metrics::labels::{AppInfoLabels, EndpointLabels};
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::gauge::Gauge;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Renders every registered series in text exposition format
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    /// Handle to the in-progress gauge of `labels`
    ///
    /// The handle shares its value with the registered series, so it can be
    /// held across the request without keeping the family locked.
    pub fn in_flight(&self, labels: &EndpointLabels) -> Gauge {
        self.http_requests_in_progress.get_or_create(labels).clone()
    }

    pub fn record_request(&self, labels: &EndpointLabels, status: u16) {
        self.http_requests
            .get_or_create(&labels.with_status(status))
            .inc();
    }

    pub fn observe_latency(&self, labels: &EndpointLabels, duration_secs: f64) {
        self.http_request_duration_seconds
            .get_or_create(labels)
            .observe(duration_secs);
    }

    pub fn record_error(&self, labels: &EndpointLabels, error_type: &str) {
        self.http_errors
            .get_or_create(&labels.with_error(error_type))
            .inc();
    }

    // Readers never create a series; an unseen label set reads as zero
    pub fn request_count(&self, labels: &EndpointLabels, status: u16) -> u64 {
        self.http_requests
            .get(&labels.with_status(status))
            .map_or(0, |counter| counter.get())
    }

    pub fn error_count(&self, labels: &EndpointLabels, error_type: &str) -> u64 {
        self.http_errors
            .get(&labels.with_error(error_type))
            .map_or(0, |counter| counter.get())
    }

    pub fn in_flight_value(&self, labels: &EndpointLabels) -> i64 {
        self.http_requests_in_progress
            .get(labels)
            .map_or(0, |gauge| gauge.get())
    }

    pub fn app_info_value(&self, version: &str, environment: &str) -> i64 {
        self.app_info
            .get(&AppInfoLabels {
                version: version.to_string(),
                environment: environment.to_string(),
            })
            .map_or(0, |gauge| gauge.get())
    }
}
