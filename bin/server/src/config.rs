//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.

use axum_extra::extract::cookie::Key;
use serde::Deserialize;

/// Built-in signing secret used when `SECRET_KEY` is unset.
///
/// Suitable for local development only; `main` logs a warning when the
/// server runs with it.
pub const DEV_SECRET_KEY: &str = "muse-dev-secret-key-change-me-in-production";

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Secret used to derive the session-cookie signing key.
    /// Must be at least 32 bytes.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session cookie lifetime in days.
    #[serde(default = "default_session_duration_days")]
    pub duration_days: i64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true for production safety; set to false for local HTTP
    /// development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// Remote generative-text service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Gemini service. Absence is a startup warning, not a
    /// hard failure; generate requests then fail at the remote-call step.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Endpoint base URL.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Remote-call timeout in seconds.
    #[serde(default = "default_gemini_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_secret_key() -> String {
    DEV_SECRET_KEY.to_string()
}

fn default_session_duration_days() -> i64 {
    7
}

fn default_secure_cookies() -> bool {
    true
}

fn default_gemini_model() -> String {
    muse_ai::client::DEFAULT_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    muse_ai::client::DEFAULT_BASE_URL.to_string()
}

fn default_gemini_timeout_seconds() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_days: default_session_duration_days(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_seconds: default_gemini_timeout_seconds(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Derives the session-cookie signing key from the secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is shorter than 32 bytes, which the
    /// key derivation would otherwise panic on.
    pub fn cookie_key(&self) -> Result<Key, config::ConfigError> {
        if self.secret_key.len() < 32 {
            return Err(config::ConfigError::Message(
                "secret_key must be at least 32 bytes".to_string(),
            ));
        }
        Ok(Key::derive_from(self.secret_key.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_days, 7);
        assert!(config.secure_cookies);
    }

    #[test]
    fn gemini_config_has_correct_defaults() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "models/gemini-2.5-flash");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn dev_secret_derives_a_key() {
        let config = ServerConfig {
            listen_addr: default_listen_addr(),
            secret_key: default_secret_key(),
            session: SessionConfig::default(),
            gemini: GeminiConfig::default(),
        };
        assert!(config.cookie_key().is_ok());
    }

    #[test]
    fn short_secret_is_rejected() {
        let config = ServerConfig {
            listen_addr: default_listen_addr(),
            secret_key: "too-short".to_string(),
            session: SessionConfig::default(),
            gemini: GeminiConfig::default(),
        };
        assert!(config.cookie_key().is_err());
    }
}
