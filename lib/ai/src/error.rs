//! Error types for the AI crate.

use std::fmt;

/// Errors from the generative-text backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// No API key was configured at startup.
    MissingApiKey,
    /// Transport failure: connection error or non-2xx status.
    RequestFailed { reason: String },
    /// The remote call exceeded its timeout.
    Timeout,
    /// Response body was not valid JSON.
    ResponseParseFailed { reason: String },
}

impl LlmError {
    /// Returns true for transport-class failures (network, status, timeout,
    /// missing credentials), as opposed to response-parsing failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::RequestFailed { .. } | Self::Timeout
        )
    }
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "no API key configured"),
            Self::RequestFailed { reason } => {
                write!(f, "request failed: {reason}")
            }
            Self::Timeout => write!(f, "request timed out"),
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse response body: {reason}")
            }
        }
    }
}

impl std::error::Error for LlmError {}
