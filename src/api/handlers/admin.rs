//! Incident simulation endpoints

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::state::ApiState;
use crate::state::Condition;

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminResponse {
    pub message: String,
    pub status: String,
}

/// POST /admin/break
///
/// Fails both probes until `/admin/fix` is called.
pub async fn break_app(State(state): State<Arc<ApiState>>) -> Json<AdminResponse> {
    if state.app.set_all(Condition::Degraded).await {
        tracing::warn!("Application manually set to unhealthy state");
    } else {
        tracing::debug!("Application already in unhealthy state");
    }

    Json(AdminResponse {
        message: "Application set to unhealthy state".to_string(),
        status: "broken".to_string(),
    })
}

/// POST /admin/fix
pub async fn fix_app(State(state): State<Arc<ApiState>>) -> Json<AdminResponse> {
    if state.app.set_all(Condition::Ok).await {
        tracing::info!("Application manually restored to healthy state");
    } else {
        tracing::debug!("Application already in healthy state");
    }

    Json(AdminResponse {
        message: "Application restored to healthy state".to_string(),
        status: "fixed".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Flags;

    #[tokio::test]
    async fn test_break_then_fix() {
        let state = Arc::new(ApiState::new(Config::default()));

        let Json(body) = break_app(State(state.clone())).await;
        assert_eq!(body.status, "broken");
        assert_eq!(
            state.app.flags().await,
            Flags {
                healthy: Condition::Degraded,
                ready: Condition::Degraded,
            }
        );

        let Json(body) = fix_app(State(state.clone())).await;
        assert_eq!(body.status, "fixed");
        assert_eq!(state.app.flags().await, Flags::default());
    }

    #[tokio::test]
    async fn test_repeated_calls_return_same_acknowledgement() {
        let state = Arc::new(ApiState::new(Config::default()));

        let Json(first) = break_app(State(state.clone())).await;
        let Json(second) = break_app(State(state.clone())).await;
        assert_eq!(first.message, second.message);
        assert_eq!(first.status, second.status);

        let Json(first) = fix_app(State(state.clone())).await;
        let Json(second) = fix_app(State(state.clone())).await;
        assert_eq!(first.message, second.message);
        assert_eq!(state.app.flags().await, Flags::default());
    }
}
