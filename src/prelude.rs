// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use sre_showcase::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{ApiState, Fault, Rejection, create_router, track_requests};

// Instrumentation and metrics
pub use crate::instrument::{FaultKind, Instrumentation, StatusOutcome};
pub use crate::metrics::{EndpointLabels, MetricsRegistry};

// State
pub use crate::random::RandomSource;
pub use crate::state::{AppState, Condition, Flags};
