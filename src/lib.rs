// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # SRE Showcase
//!
//! Demo HTTP service for teaching operational concepts: liveness/readiness
//! probes, request metrics and manually triggered failure injection.
//!
//! ## Main modules
//! - `api`: HTTP routes, handlers and the request tracking middleware
//! - `config`: configuration management
//! - `error`: error types
//! - `instrument`: per-request metrics bookkeeping
//! - `metrics`: Prometheus metrics registry and labels
//! - `random`: injectable random source for simulated delays and failures
//! - `state`: shared service state and probe flags
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod instrument;
mod metrics;
mod random;
mod state;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and middleware
pub use api::{
    ApiState, Fault, FaultBody, Rejection, RejectionBody, UNMATCHED_ENDPOINT, VERSION,
    create_router, handlers, track_requests,
};

/// Request instrumentation
pub use instrument::{FaultKind, InFlight, Instrumentation, StatusOutcome};

/// Metrics registry and labels
pub use metrics::{
    AppInfoLabels, EndpointLabels, ErrorLabels, LATENCY_BUCKETS, MetricsRegistry, RequestLabels,
};

/// Random source
pub use random::RandomSource;

/// Service state
pub use state::{AppState, Condition, Flags, format_uptime};
