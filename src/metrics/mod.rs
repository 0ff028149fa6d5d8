// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics for HTTP request instrumentation
//!
//! Contains label types and the metrics registry.

mod labels;
mod registry;

/// Labels for requests, errors and app info
pub use labels::{AppInfoLabels, EndpointLabels, ErrorLabels, RequestLabels};

/// Prometheus metrics registry
pub use registry::{LATENCY_BUCKETS, MetricsRegistry};
