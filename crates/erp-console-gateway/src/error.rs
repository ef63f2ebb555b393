//! Local error envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

/// Message returned for every transport or parse failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// JSON error envelope: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl ErrorBody {
    /// Create an envelope.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Pair the envelope with a status code.
    #[must_use]
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Failures while proxying a request.
///
/// The detail is logged; callers only ever see a generic 500 envelope.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Upstream unreachable or the exchange failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Inbound or upstream body was not valid JSON.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("Proxy failure: {}", self);
        ErrorBody::new(INTERNAL_ERROR_MESSAGE).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
