// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod admin;
mod demo;
mod health;
mod metrics;
mod root;

pub use admin::{break_app, fix_app};
pub use demo::{SIMULATED_ERROR, flaky, get_data, get_status, slow};
pub use health::{health_check, readiness_check};
pub use metrics::{CONTENT_TYPE, metrics_handler};
pub use root::root;
