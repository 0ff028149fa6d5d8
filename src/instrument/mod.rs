// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request instrumentation
//!
//! Wraps a request continuation and records, exactly once per request:
//! - `http_requests_in_progress` for the duration of the continuation
//! - `http_requests_total` and `http_request_duration_seconds` when it returns a response
//! - `http_errors_total` when it fails with a fault
//! - the completed request count on [`AppState`]
//!
//! Faults are returned to the caller unchanged. Turning them into a response
//! is left to the HTTP layer.

mod in_flight;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{EndpointLabels, MetricsRegistry};
use crate::state::AppState;

pub use in_flight::InFlight;

/// Normal outcome of a request that carries a status code
pub trait StatusOutcome {
    fn status_code(&self) -> u16;
}

/// Unhandled failure of a request, identified by a kind name
pub trait FaultKind {
    fn kind(&self) -> &str;
}

impl<B> StatusOutcome for axum::http::Response<B> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

#[derive(Clone, Debug)]
pub struct Instrumentation {
    metrics: MetricsRegistry,
    state: Arc<AppState>,
}

impl Instrumentation {
    pub fn new(metrics: MetricsRegistry, state: Arc<AppState>) -> Self {
        Self { metrics, state }
    }

    /// Runs `continuation` for the request identified by `labels`
    pub async fn observe<F, R, E>(&self, labels: &EndpointLabels, continuation: F) -> Result<R, E>
    where
        F: Future<Output = Result<R, E>>,
        R: StatusOutcome,
        E: FaultKind,
    {
        let _slot = InFlight::acquire(self.metrics.in_flight(labels), self.state.clone());
        let start = Instant::now();

        match continuation.await {
            Ok(outcome) => {
                let status = outcome.status_code();
                let duration = start.elapsed().as_secs_f64();
                self.metrics.record_request(labels, status);
                self.metrics.observe_latency(labels, duration);
                tracing::info!(
                    "{} {} - Status: {} - Duration: {:.3}s",
                    labels.method,
                    labels.endpoint,
                    status,
                    duration
                );
                Ok(outcome)
            }
            Err(fault) => {
                self.metrics.record_error(labels, fault.kind());
                tracing::error!(
                    "Error processing request {} {}: {}",
                    labels.method,
                    labels.endpoint,
                    fault.kind()
                );
                Err(fault)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Status(u16);

    impl StatusOutcome for Status {
        fn status_code(&self) -> u16 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl FaultKind for Boom {
        fn kind(&self) -> &str {
            "Boom"
        }
    }

    fn setup() -> (Instrumentation, MetricsRegistry, Arc<AppState>) {
        let metrics = MetricsRegistry::new("1.0.0", "test");
        let state = Arc::new(AppState::new());
        let instrumentation = Instrumentation::new(metrics.clone(), state.clone());
        (instrumentation, metrics, state)
    }

    #[tokio::test]
    async fn test_success_path() {
        let (instrumentation, metrics, state) = setup();
        let labels = EndpointLabels::new("GET", "/");

        let result = instrumentation
            .observe(&labels, async { Ok::<_, Boom>(Status(200)) })
            .await;

        assert!(result.is_ok());
        assert_eq!(metrics.request_count(&labels, 200), 1);
        assert_eq!(metrics.error_count(&labels, "Boom"), 0);
        assert_eq!(metrics.in_flight_value(&labels), 0);
        assert_eq!(state.request_count(), 1);
    }

    #[tokio::test]
    async fn test_handled_failure_status_is_a_normal_outcome() {
        let (instrumentation, metrics, state) = setup();
        let labels = EndpointLabels::new("GET", "/health");

        let result = instrumentation
            .observe(&labels, async { Ok::<_, Boom>(Status(503)) })
            .await;

        assert!(result.is_ok());
        assert_eq!(metrics.request_count(&labels, 503), 1);
        assert_eq!(metrics.error_count(&labels, "Boom"), 0);
        assert_eq!(metrics.in_flight_value(&labels), 0);
        assert_eq!(state.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fault_is_recorded_and_propagated() {
        let (instrumentation, metrics, state) = setup();
        let labels = EndpointLabels::new("GET", "/api/data");

        let result = instrumentation
            .observe(&labels, async { Err::<Status, _>(Boom) })
            .await;

        assert_eq!(result.err(), Some(Boom));
        assert_eq!(metrics.error_count(&labels, "Boom"), 1);
        assert_eq!(metrics.request_count(&labels, 200), 0);
        assert_eq!(metrics.in_flight_value(&labels), 0);
        assert_eq!(state.request_count(), 1);
    }

    #[tokio::test]
    async fn test_gauge_is_held_while_continuation_runs() {
        let (instrumentation, metrics, _state) = setup();
        let labels = EndpointLabels::new("GET", "/api/slow");

        let inner = metrics.clone();
        let inner_labels = labels.clone();
        instrumentation
            .observe(&labels, async move {
                assert_eq!(inner.in_flight_value(&inner_labels), 1);
                Ok::<_, Boom>(Status(200))
            })
            .await
            .ok();

        assert_eq!(metrics.in_flight_value(&labels), 0);
    }

    #[tokio::test]
    async fn test_cancelled_request_releases_slot() {
        let (instrumentation, metrics, state) = setup();
        let labels = EndpointLabels::new("GET", "/api/slow");

        let pending = instrumentation.observe(&labels, async {
            std::future::pending::<()>().await;
            Ok::<_, Boom>(Status(200))
        });
        let timed_out = tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;

        assert!(timed_out.is_err());
        assert_eq!(metrics.in_flight_value(&labels), 0);
        assert_eq!(state.request_count(), 1);
    }

    #[tokio::test]
    async fn test_each_call_counts_once() {
        let (instrumentation, _metrics, state) = setup();
        let labels = EndpointLabels::new("GET", "/");

        for i in 0..10 {
            let _ = instrumentation
                .observe(&labels, async move {
                    if i % 3 == 0 {
                        Err(Boom)
                    } else {
                        Ok(Status(200))
                    }
                })
                .await;
        }

        assert_eq!(state.request_count(), 10);
    }
}
