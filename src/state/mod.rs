// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process-wide service state
//!
//! Holds the start time, the completed request counter and the two probe
//! flags. Probes only read the flags; the admin endpoints are the only
//! writers after startup.

mod uptime;

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub use uptime::format_uptime;

/// State of a single probe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Condition {
    #[default]
    Ok,
    Degraded,
}

impl Condition {
    pub fn is_ok(self) -> bool {
        self == Condition::Ok
    }
}

/// Snapshot of both probe flags, taken under a single lock
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub healthy: Condition,
    pub ready: Condition,
}

/// Shared service state
#[derive(Debug)]
pub struct AppState {
    start_time: DateTime<Utc>,
    started: Instant,
    request_count: AtomicU64,
    flags: RwLock<Flags>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Utc::now(),
            started: Instant::now(),
            request_count: AtomicU64::new(0),
            flags: RwLock::new(Flags::default()),
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.uptime().as_secs_f64()
    }

    /// Counts one completed request
    pub fn record_request(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub async fn flags(&self) -> Flags {
        *self.flags.read().await
    }

    pub async fn set_healthy(&self, condition: Condition) {
        self.flags.write().await.healthy = condition;
    }

    pub async fn set_ready(&self, condition: Condition) {
        self.flags.write().await.ready = condition;
    }

    /// Moves both flags to `condition` in one critical section
    ///
    /// Returns `true` if either flag changed.
    pub async fn set_all(&self, condition: Condition) -> bool {
        let mut flags = self.flags.write().await;
        let changed = flags.healthy != condition || flags.ready != condition;
        flags.healthy = condition;
        flags.ready = condition;
        changed
    }
}
