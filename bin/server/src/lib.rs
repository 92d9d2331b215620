//! muse web server.
//!
//! Request/response glue around the composer, the conversation store, and
//! the Gemini client: three routes, signed session cookies, structured
//! JSON errors.

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use routes::router;
pub use state::AppState;
