//! Conversation transcripts for the muse chat relay.
//!
//! This crate provides:
//!
//! - **Turn**: one immutable message in a transcript
//! - **Conversation**: the ordered, append-only sequence of turns for one session
//! - **ConversationStore**: the injected per-session store interface

pub mod conversation;
pub mod error;
pub mod store;
pub mod turn;

pub use conversation::Conversation;
pub use error::StoreError;
pub use store::{ConversationStore, MemoryConversationStore};
pub use turn::{Turn, TurnRole};
