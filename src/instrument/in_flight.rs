// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-flight request slot

use prometheus_client::metrics::gauge::Gauge;
use std::sync::Arc;

use crate::state::AppState;

/// Holds one unit of the in-progress gauge for the lifetime of a request
///
/// Dropping the slot releases the gauge and counts the request as completed,
/// whichever way the request ends (response, fault, panic or cancellation).
#[must_use = "the request is counted as finished as soon as the slot is dropped"]
pub struct InFlight {
    gauge: Gauge,
    state: Arc<AppState>,
}

impl InFlight {
    pub fn acquire(gauge: Gauge, state: Arc<AppState>) -> Self {
        gauge.inc();
        Self { gauge, state }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.gauge.dec();
        self.state.record_request();
    }
}
