//! Turn types for conversation transcripts.

use chrono::{DateTime, Utc};
use muse_core::TurnId;
use serde::{Deserialize, Serialize};

/// The role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// User/human message.
    User,
    /// Assistant/AI message.
    Assistant,
    /// System message. Reserved; unused by current flows.
    System,
}

/// One message in a conversation transcript.
///
/// Turns are immutable once appended; ordering is strictly insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier.
    pub id: TurnId,
    /// Who authored the turn.
    pub role: TurnRole,
    /// Turn text. Never null; an empty assistant reply is replaced with a
    /// fallback sentinel before it reaches the store.
    pub text: String,
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a new turn.
    #[must_use]
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Creates an assistant turn.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }

    /// Creates a system turn.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(TurnRole::System, text)
    }
}
