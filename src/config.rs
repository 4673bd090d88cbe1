//! Access-token configuration.
//!
//! The token is read through a [`ConfigProvider`] collaborator rather than a
//! direct `std::env::var` call, so tests and alternate deployments can
//! supply tokens without touching process-global state. The production
//! provider reads environment variables.

use crate::genius::GeniusError;

/// Fixed environment variable holding the Genius access token.
pub const ACCESS_TOKEN_VAR: &str = "GENIUS_ACCESS_TOKEN";

/// Source of configuration values, keyed by name.
pub trait ConfigProvider {
    /// Return the value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Provider backed by process environment variables.
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Read the access token from a provider.
///
/// An unset or empty token is a configuration error; there is no fallback.
pub fn access_token(provider: &dyn ConfigProvider) -> Result<String, GeniusError> {
    match provider.get(ACCESS_TOKEN_VAR) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(GeniusError::Configuration(format!(
            "{ACCESS_TOKEN_VAR} is not set"
        ))),
    }
}
