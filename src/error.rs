//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Artist lookup error (transport, parsing, no match, bad token)
    #[error("Lookup error: {0}")]
    Genius(#[from] crate::genius::GeniusError),
}
