//! Error-to-response mapping for the HTTP surface.
//!
//! Every failure below the handler boundary is translated into a
//! structured `{ok: false, error: ...}` JSON payload; nothing reaches the
//! client unstructured and nothing on these paths may crash the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use muse_ai::LlmError;
use muse_conversation::StoreError;
use serde::Serialize;
use std::fmt;

/// Failures surfaced by the API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The prompt was empty after trimming. Rejected before any state
    /// mutation.
    EmptyPrompt,
    /// The remote generative-text call failed.
    Upstream(LlmError),
    /// The conversation store failed.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrompt => write!(f, "empty prompt"),
            Self::Upstream(e) => write!(f, "upstream call failed: {e}"),
            Self::Store(e) => write!(f, "store operation failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        Self::Upstream(e)
    }
}

/// The structured error payload.
#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::EmptyPrompt => (StatusCode::BAD_REQUEST, "Empty prompt".to_string()),
            Self::Upstream(e) if e.is_transport() => {
                (StatusCode::BAD_GATEWAY, format!("Request error: {e}"))
            }
            Self::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Parse error: {e}"),
            ),
            Self::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {e}"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        (status, Json(ErrorBody { ok: false, error })).into_response()
    }
}
