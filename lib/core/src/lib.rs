//! Core domain types for the muse chat relay.
//!
//! This crate provides the foundational ID types shared by the
//! conversation store and the server. Error types live with the crates
//! that produce them.

pub mod id;

pub use id::{ParseIdError, SessionId, TurnId};
