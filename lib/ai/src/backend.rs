//! Generative-text backend abstraction.
//!
//! The request handler calls through this trait, so tests can substitute
//! a fake backend without any network access.

use crate::error::LlmError;
use async_trait::async_trait;

/// Trait for generative-text backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one composed instruction and returns the assistant reply.
    ///
    /// Implementations substitute the fallback sentinels for degenerate
    /// replies, so a successful call always yields displayable text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or an unparseable
    /// response body.
    async fn generate(&self, instruction: &str) -> Result<String, LlmError>;
}
