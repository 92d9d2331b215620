//! Prompt composition and generative-text access for the muse chat relay.
//!
//! This crate provides:
//!
//! - **PromptComposer**: pure composition of the outbound instruction string
//! - **TextGenerator**: the backend trait the request handler calls through
//! - **GeminiClient**: the reqwest-backed Google Gemini implementation

pub mod backend;
pub mod client;
pub mod compose;
pub mod error;
pub mod wire;

pub use backend::TextGenerator;
pub use client::GeminiClient;
pub use compose::{Category, CompositionRequest, Language, Style};
pub use error::LlmError;
pub use wire::{GenerateContentRequest, GenerateContentResponse, extract_reply};
