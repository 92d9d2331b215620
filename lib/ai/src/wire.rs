//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Outbound: `{contents: [{parts: [{text}]}]}`.
//! Inbound: `{candidates: [{content: {parts: [{text}]}}]}`.
//!
//! Inbound types are deliberately lenient: every field defaults, so a
//! response that is valid JSON but structurally thin still deserializes
//! and falls through to the fallback sentinels in [`extract_reply`].

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Substitute assistant text when the reply is structurally absent or empty.
pub const NO_RESPONSE_SENTINEL: &str = "No response from model.";

/// Substitute assistant text when the reply JSON does not match the
/// expected candidate shape.
pub const PARSE_ERROR_SENTINEL: &str = "Error parsing model response.";

/// One text part of a content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// The text payload.
    #[serde(default)]
    pub text: String,
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// The parts of this block.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// The outbound request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// The conversation contents; this relay always sends exactly one.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wraps a composed instruction in the single-content request shape.
    #[must_use]
    pub fn from_instruction(instruction: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: instruction.into(),
                }],
            }],
        }
    }
}

/// One reply candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    /// The candidate's content block, if any.
    #[serde(default)]
    pub content: Option<Content>,
}

/// The inbound response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Reply candidates; the first one is taken.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Extracts the assistant reply from a parsed response body.
///
/// Policy: take the first candidate's first part's text. A body that does
/// not match the candidate shape yields [`PARSE_ERROR_SENTINEL`]; a
/// well-shaped body with absent or empty text yields
/// [`NO_RESPONSE_SENTINEL`]. Both are local recovery, not errors: the
/// transcript always gets a visible assistant turn for every user turn
/// that reached the remote call.
#[must_use]
pub fn extract_reply(body: &JsonValue) -> String {
    let Ok(response) = serde_json::from_value::<GenerateContentResponse>(body.clone()) else {
        return PARSE_ERROR_SENTINEL.to_string();
    };

    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.clone())
        .unwrap_or_default();

    if text.is_empty() {
        NO_RESPONSE_SENTINEL.to_string()
    } else {
        text
    }
}
