//! State shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::instrument::Instrumentation;
use crate::metrics::MetricsRegistry;
use crate::random::RandomSource;
use crate::state::AppState;

/// Version reported by the API and the `app_info` metric
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state
#[derive(Debug)]
pub struct ApiState {
    pub config: Config,
    pub app: Arc<AppState>,
    pub metrics: MetricsRegistry,
    pub rng: RandomSource,
    pub instrumentation: Instrumentation,
}

impl ApiState {
    /// Builds fresh state, seeding the random source from `config`
    pub fn new(config: Config) -> Self {
        let rng = RandomSource::from_seed_option(config.random_seed);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: RandomSource) -> Self {
        let app = Arc::new(AppState::new());
        let metrics = MetricsRegistry::new(VERSION, &config.environment);
        let instrumentation = Instrumentation::new(metrics.clone(), app.clone());

        Self {
            config,
            app,
            metrics,
            rng,
            instrumentation,
        }
    }
}
