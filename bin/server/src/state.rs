//! Shared application state.

use crate::config::SessionConfig;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use muse_ai::TextGenerator;
use muse_conversation::ConversationStore;
use std::sync::Arc;

/// State shared by all request handlers.
///
/// The store and generator are injected behind trait objects so tests can
/// substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    /// Per-session conversation storage.
    pub store: Arc<dyn ConversationStore>,
    /// Generative-text backend.
    pub generator: Arc<dyn TextGenerator>,
    /// Key for signing session cookies.
    pub cookie_key: Key,
    /// Session cookie settings.
    pub session: SessionConfig,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
