//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Identifies a route as seen by the instrumentation layer
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct EndpointLabels {
    pub method: String,
    pub endpoint: String,
}

impl EndpointLabels {
    pub fn new(method: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: String,
    pub endpoint: String,
    pub status: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ErrorLabels {
    pub method: String,
    pub endpoint: String,
    pub error_type: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct AppInfoLabels {
    pub version: String,
    pub environment: String,
}

impl EndpointLabels {
    pub fn with_status(&self, status: u16) -> RequestLabels {
        RequestLabels {
            method: self.method.clone(),
            endpoint: self.endpoint.clone(),
            status: status.to_string(),
        }
    }

    pub fn with_error(&self, error_type: &str) -> ErrorLabels {
        ErrorLabels {
            method: self.method.clone(),
            endpoint: self.endpoint.clone(),
            error_type: error_type.to_string(),
        }
    }
}
