use std::net::SocketAddr;
use std::sync::Arc;

use sre_showcase::{ApiState, AppError, Config, Result, VERSION, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    config.validate().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        AppError::Config(e)
    })?;

    tracing::info!("{}", "=".repeat(50));
    tracing::info!("SRE Showcase API v{} starting", VERSION);
    tracing::info!("{}", "=".repeat(50));
    tracing::info!(
        "Environment '{}', flaky failure rate {}",
        config.environment,
        config.flaky_failure_rate
    );
    if let Some(seed) = config.random_seed {
        tracing::info!("Using fixed random seed {}", seed);
    }

    if config.simulate_startup_failure {
        return Err(simulated_startup_failure());
    }

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(ApiState::new(config));

    // Shutdown channel (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Wait for Ctrl+C
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("SRE Showcase API listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /            - Service info");
    tracing::info!("  - GET  /health      - Liveness probe");
    tracing::info!("  - GET  /ready       - Readiness probe");
    tracing::info!("  - GET  /metrics     - Prometheus metrics");
    tracing::info!("  - GET  /api/*       - Demo endpoints");
    tracing::info!("  - POST /admin/break - Fail both probes");
    tracing::info!("  - POST /admin/fix   - Restore both probes");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Reproduces the broken deployment whose database is unreachable at startup
fn simulated_startup_failure() -> AppError {
    tracing::error!("SIMULATED FAILURE: Database connection failed!");
    tracing::error!("Unable to connect to database at db.example.com:5432");
    AppError::Startup("Database connection failed - connection refused".to_string())
}

fn setup_tracing() {
    // Honour RUST_LOG, fall back to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
