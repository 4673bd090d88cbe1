//! Internal domain models for artist lookup.
//!
//! These types are OUR types - they don't change when the Genius API changes.
//! All API responses get converted into these types via the adapter.

/// One row of the lookup result table.
///
/// Absent fields mean the lookup for this term failed or the provider
/// omitted the value; the search term itself is always preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    /// The search term exactly as supplied by the caller
    pub search_term: String,
    /// Canonical artist name from the provider
    pub artist_name: Option<String>,
    /// Provider's numeric artist ID
    pub artist_id: Option<u64>,
    /// Follower count; `Some(0)` and `None` are distinct (the provider may
    /// legitimately report zero followers, or omit the field entirely)
    pub followers_count: Option<u64>,
}

/// Location of an artist extracted from a search hit.
///
/// `api_path` is provider-relative (e.g. `/artists/130`) and is used to
/// fetch the full artist detail in the second request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistHandle {
    /// Provider's numeric artist ID
    pub id: u64,
    /// Provider-relative path to the artist detail resource
    pub api_path: String,
}

/// Errors that can occur during artist lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeniusError {
    /// Access token missing or empty at construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// Well-formed response, but no usable artist data in it
    #[error("No artist found")]
    NoArtistFound,

    /// Request failed before any HTTP status was received
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_carries_status() {
        let err = GeniusError::Transport {
            status: 401,
            body: "invalid_token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("invalid_token"));
    }

    #[test]
    fn test_lookup_and_transport_are_distinct() {
        // Callers branch on failure kind, so these must never be conflated.
        let lookup = GeniusError::NoArtistFound;
        let transport = GeniusError::Transport {
            status: 500,
            body: String::new(),
        };
        assert!(matches!(lookup, GeniusError::NoArtistFound));
        assert!(!matches!(transport, GeniusError::NoArtistFound));
    }
}
