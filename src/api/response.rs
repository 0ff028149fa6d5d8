// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Failure responses
//!
//! Two kinds of failure leave a handler:
//! - [`Rejection`]: an expected outcome with its own status (503 from a probe,
//!   the simulated 500 of `/api/flaky`). It is an ordinary response.
//! - [`Fault`]: anything unexpected (an [`AppError`] or a panic). Handlers
//!   raise it as a marked 500; the tracking middleware lifts it back out,
//!   records it and renders the final error body.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::instrument::FaultKind;

/// Current time as an RFC 3339 UTC timestamp
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Rounds to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Expected failure with an explicit status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    status: StatusCode,
    detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RejectionBody {
    pub detail: String,
}

impl Rejection {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(RejectionBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

/// Unhandled failure of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    kind: String,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FaultBody {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl Fault {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Builds a fault from a caught panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "handler panicked".to_string());
        Self::new("Panic", message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 500 response carrying this fault in its extensions
    ///
    /// Behind [`track_requests`](super::track_requests) the fault is lifted
    /// out, recorded and rendered again. Without the middleware the error
    /// body is already in place, only the recording is missing.
    pub fn raise(self) -> Response {
        let mut response = self.render();
        response.extensions_mut().insert(self);
        response
    }

    fn render(&self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FaultBody {
                error: "Internal server error".to_string(),
                message: self.message.clone(),
                timestamp: timestamp(),
            }),
        )
            .into_response()
    }

    /// Splits a handler response into a normal outcome or the fault it carries
    pub fn lift(mut response: Response) -> Result<Response, Fault> {
        match response.extensions_mut().remove::<Fault>() {
            Some(fault) => Err(fault),
            None => Ok(response),
        }
    }
}

impl FaultKind for Fault {
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl From<AppError> for Fault {
    fn from(error: AppError) -> Self {
        Self::new(error.kind(), error.to_string())
    }
}

/// Renders the final error body
impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        tracing::error!("Unhandled exception ({}): {}", self.kind, self.message);
        self.render()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Fault::from(self).raise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(1.23456) - 1.23).abs() < f64::EPSILON);
        assert!((round2(87.654) - 87.65).abs() < 1e-9);
        assert!((round2(2.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let ts = timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn test_rejection_response_status() {
        let response = Rejection::unavailable("Application unhealthy").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_app_error_raises_marked_fault() {
        let response = AppError::Metrics("encoding failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let fault = Fault::lift(response).unwrap_err();
        assert_eq!(fault.kind(), "MetricsError");
        assert_eq!(fault.message(), "Metrics error: encoding failed");
    }

    #[tokio::test]
    async fn test_raised_fault_carries_error_body() {
        use http_body_util::BodyExt;

        let response = AppError::Startup("database unreachable".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<Fault>().is_some());

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: FaultBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.message, "Startup failed: database unreachable");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[test]
    fn test_lift_passes_plain_responses_through() {
        let response = Rejection::new(StatusCode::INTERNAL_SERVER_ERROR, "Simulated random failure")
            .into_response();

        let lifted = Fault::lift(response).unwrap();
        assert_eq!(lifted.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_fault_from_panic_payloads() {
        let from_str = Fault::from_panic(Box::new("static message"));
        assert_eq!(from_str.kind(), "Panic");
        assert_eq!(from_str.message(), "static message");

        let from_string = Fault::from_panic(Box::new(String::from("owned message")));
        assert_eq!(from_string.message(), "owned message");

        let opaque = Fault::from_panic(Box::new(42_u8));
        assert_eq!(opaque.message(), "handler panicked");
    }

    #[test]
    fn test_fault_renders_internal_server_error() {
        let response = Fault::new("IoError", "disk on fire").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<Fault>().is_none());
    }
}
