//! Gemini HTTP client.

use crate::backend::TextGenerator;
use crate::error::LlmError;
use crate::wire::{GenerateContentRequest, extract_reply};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Default Gemini API endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash";

/// Default remote-call timeout. No retry/backoff on top of it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini `generateContent` API.
///
/// The API key is optional at construction so the server can start without
/// one; calls then fail at the remote-call step with a transport-class
/// error rather than preventing startup.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Creates a client with the given endpoint parameters.
    ///
    /// The timeout applies to each whole request, connect through body.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::RequestFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    /// Creates a client with default endpoint, model, and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_defaults(api_key: Option<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key, DEFAULT_TIMEOUT)
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns true if an API key was configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, instruction: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let body = GenerateContentRequest::from_instruction(instruction);

        let response = self
            .http
            .post(self.endpoint(api_key))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;

        // Body must at least be JSON; shape mismatches degrade to
        // sentinels inside extract_reply instead of failing the call.
        let body: JsonValue = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::ResponseParseFailed {
                    reason: e.to_string(),
                }
            }
        })?;

        Ok(extract_reply(&body))
    }
}

fn transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::RequestFailed {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model_and_key() {
        let client = GeminiClient::new(
            "https://example.test",
            "models/test-model",
            Some("sekrit".to_string()),
            DEFAULT_TIMEOUT,
        )
        .expect("client");

        assert_eq!(
            client.endpoint("sekrit"),
            "https://example.test/v1beta/models/test-model:generateContent?key=sekrit"
        );
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let client = GeminiClient::with_defaults(Some(String::new())).expect("client");
        assert!(!client.has_api_key());
    }

    #[tokio::test]
    async fn missing_api_key_fails_at_call_time() {
        let client = GeminiClient::with_defaults(None).expect("client");
        let err = client.generate("hello").await.expect_err("should fail");
        assert_eq!(err, LlmError::MissingApiKey);
        assert!(err.is_transport());
    }
}
