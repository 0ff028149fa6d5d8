// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for SRE Showcase application
//!
//! Loads configuration from environment variables (optionally via `.env`).

use std::str::FromStr;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8000";
    pub const ENVIRONMENT: &str = "demo";
    pub const FLAKY_FAILURE_RATE: f64 = 0.1;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const ENVIRONMENT: &str = "APP_ENV";
    pub const RANDOM_SEED: &str = "RANDOM_SEED";
    pub const FLAKY_FAILURE_RATE: &str = "FLAKY_FAILURE_RATE";
    pub const SIMULATE_STARTUP_FAILURE: &str = "SIMULATE_STARTUP_FAILURE";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    /// Reported as the `environment` label of `app_info`
    pub environment: String,
    /// Fixed seed for the simulated delays and failures; entropy when unset
    pub random_seed: Option<u64>,
    /// Probability that `/api/flaky` fails
    pub flaky_failure_rate: f64,
    /// Reproduces the broken deployment that cannot reach its database
    pub simulate_startup_failure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            environment: defaults::ENVIRONMENT.to_string(),
            random_seed: None,
            flaky_failure_rate: defaults::FLAKY_FAILURE_RATE,
            simulate_startup_failure: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let environment = std::env::var(env_vars::ENVIRONMENT)
            .unwrap_or_else(|_| defaults::ENVIRONMENT.to_string());

        let random_seed = parse_var::<u64>(env_vars::RANDOM_SEED);

        let flaky_failure_rate = parse_var::<f64>(env_vars::FLAKY_FAILURE_RATE)
            .unwrap_or(defaults::FLAKY_FAILURE_RATE);

        let simulate_startup_failure = std::env::var(env_vars::SIMULATE_STARTUP_FAILURE)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Config {
            server_addr,
            environment,
            random_seed,
            flaky_failure_rate,
            simulate_startup_failure,
        }
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.trim().is_empty() {
            return Err("Environment name cannot be empty".to_string());
        }

        if !(0.0..=1.0).contains(&self.flaky_failure_rate) {
            return Err(format!(
                "Invalid flaky failure rate {}: expected a value between 0 and 1",
                self.flaky_failure_rate
            ));
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to parse {}='{}': {}. Using default.", name, raw, e);
            None
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
