//! Conversation storage.
//!
//! The store is an explicit, injected interface rather than ambient
//! request state, so the request handler can be exercised in tests
//! without a running web server.

use crate::conversation::Conversation;
use crate::error::StoreError;
use crate::turn::Turn;
use async_trait::async_trait;
use muse_core::SessionId;
use std::collections::HashMap;
use std::sync::Mutex;

/// Trait for per-session conversation storage.
///
/// Each operation is atomic with respect to the others, so an append is
/// never lost even when two requests for the same session race. Causal
/// ordering of the user/assistant pair within one generate call is the
/// caller's responsibility: it must await the user append before the
/// remote call, and the remote call before the assistant append.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Idempotently guarantees an (empty) conversation exists for the session.
    async fn ensure(&self, id: SessionId) -> Result<(), StoreError>;

    /// Appends a turn to the session's conversation, creating it if absent.
    async fn append(&self, id: SessionId, turn: Turn) -> Result<(), StoreError>;

    /// Returns the full ordered transcript for the session.
    ///
    /// A session with no conversation yields an empty transcript.
    async fn snapshot(&self, id: SessionId) -> Result<Vec<Turn>, StoreError>;

    /// Discards the session's conversation entirely.
    ///
    /// A subsequent [`ConversationStore::ensure`] starts a fresh, empty
    /// conversation.
    async fn reset(&self, id: SessionId) -> Result<(), StoreError>;
}

/// In-memory conversation store.
///
/// Conversations live only as long as the process; there is no durable
/// backing store. Session expiry is owned by the cookie layer.
#[derive(Debug, Default)]
pub struct MemoryConversationStore {
    conversations: Mutex<HashMap<SessionId, Conversation>>,
}

impl MemoryConversationStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for MemoryConversationStore {
    async fn ensure(&self, id: SessionId) -> Result<(), StoreError> {
        let mut conversations = self.conversations.lock().map_err(|_| StoreError::Poisoned)?;
        conversations.entry(id).or_default();
        Ok(())
    }

    async fn append(&self, id: SessionId, turn: Turn) -> Result<(), StoreError> {
        let mut conversations = self.conversations.lock().map_err(|_| StoreError::Poisoned)?;
        conversations.entry(id).or_default().push(turn);
        Ok(())
    }

    async fn snapshot(&self, id: SessionId) -> Result<Vec<Turn>, StoreError> {
        let conversations = self.conversations.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(conversations
            .get(&id)
            .map(|c| c.turns().to_vec())
            .unwrap_or_default())
    }

    async fn reset(&self, id: SessionId) -> Result<(), StoreError> {
        let mut conversations = self.conversations.lock().map_err(|_| StoreError::Poisoned)?;
        conversations.remove(&id);
        Ok(())
    }
}
