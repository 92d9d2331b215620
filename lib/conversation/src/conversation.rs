//! The ordered transcript owned by one session.

use crate::turn::{Turn, TurnRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of turns.
///
/// A conversation is created lazily (empty) on a session's first
/// interaction and grows by exactly two appends per successful generate
/// call: one user turn before the remote call, one assistant turn after.
/// A failed remote call leaves the user turn in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
    /// When the conversation was created.
    pub created_at: DateTime<Utc>,
    /// When a turn was last appended.
    pub last_active_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates a new empty conversation.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            turns: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    /// Appends a turn, preserving insertion order.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
        self.last_active_at = Utc::now();
    }

    /// Returns the full ordered transcript.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turns have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the last turn, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Returns the roles of all turns, in order.
    pub fn roles(&self) -> impl Iterator<Item = TurnRole> + '_ {
        self.turns.iter().map(|t| t.role)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_starts_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::user("first"));
        conversation.push(Turn::assistant("second"));
        conversation.push(Turn::user("third"));

        let texts: Vec<&str> = conversation.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn roles_follow_turns() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::user("hi"));
        conversation.push(Turn::assistant("hello"));

        let roles: Vec<TurnRole> = conversation.roles().collect();
        assert_eq!(roles, vec![TurnRole::User, TurnRole::Assistant]);
    }

    #[test]
    fn conversation_serde_roundtrip() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::user("test"));

        let json = serde_json::to_string(&conversation).expect("serialize");
        let parsed: Conversation = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(conversation.len(), parsed.len());
        assert_eq!(parsed.turns()[0].text, "test");
    }
}
