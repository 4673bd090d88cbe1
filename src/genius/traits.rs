//! Trait definitions for the Genius client.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementation, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::domain::GeniusError;
use super::dto;

/// Trait for Genius artist resolution.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait GeniusApi: Send + Sync {
    /// Resolve an artist name to its full detail payload.
    async fn resolve_artist(&self, search_term: &str) -> Result<dto::ArtistResponse, GeniusError>;
}

#[async_trait]
impl GeniusApi for super::client::GeniusClient {
    async fn resolve_artist(&self, search_term: &str) -> Result<dto::ArtistResponse, GeniusError> {
        self.resolve_artist(search_term).await
    }
}

/// Mock Genius client for testing.
///
/// Returns configurable per-term outcomes for testing different scenarios.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;

    use super::*;

    /// Mock client that maps search terms to predefined outcomes.
    ///
    /// Terms with no configured outcome resolve to `NoArtistFound`.
    #[derive(Default)]
    pub struct MockGenius {
        outcomes: HashMap<String, Result<dto::ArtistResponse, GeniusError>>,
    }

    impl MockGenius {
        /// Create a mock with no configured terms.
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure a term to resolve to the given artist.
        pub fn with_artist(
            mut self,
            term: &str,
            id: u64,
            name: &str,
            followers_count: Option<u64>,
        ) -> Self {
            let response = dto::ArtistResponse {
                response: dto::ArtistBody {
                    artist: dto::ArtistDetail {
                        id,
                        name: name.to_string(),
                        followers_count,
                        url: Some(format!("https://genius.com/artists/{id}")),
                    },
                },
            };
            self.outcomes.insert(term.to_string(), Ok(response));
            self
        }

        /// Configure a term to fail with the given error.
        pub fn with_error(mut self, term: &str, error: GeniusError) -> Self {
            self.outcomes.insert(term.to_string(), Err(error));
            self
        }
    }

    #[async_trait]
    impl GeniusApi for MockGenius {
        async fn resolve_artist(
            &self,
            search_term: &str,
        ) -> Result<dto::ArtistResponse, GeniusError> {
            self.outcomes
                .get(search_term)
                .cloned()
                .unwrap_or(Err(GeniusError::NoArtistFound))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_configured_artist() {
            let mock = MockGenius::new().with_artist("drake", 130, "Drake", Some(9_000_000));
            let detail = mock.resolve_artist("drake").await.unwrap();
            assert_eq!(detail.response.artist.name, "Drake");
            assert_eq!(detail.response.artist.followers_count, Some(9_000_000));
        }

        #[tokio::test]
        async fn test_mock_configured_error() {
            let mock = MockGenius::new().with_error(
                "down",
                GeniusError::Transport {
                    status: 503,
                    body: String::new(),
                },
            );
            let result = mock.resolve_artist("down").await;
            assert!(matches!(result, Err(GeniusError::Transport { .. })));
        }

        #[tokio::test]
        async fn test_mock_unknown_term_is_not_found() {
            let mock = MockGenius::new();
            let result = mock.resolve_artist("anything").await;
            assert!(matches!(result, Err(GeniusError::NoArtistFound)));
        }
    }
}
