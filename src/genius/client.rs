//! Genius HTTP client
//!
//! Handles communication with the Genius web service.
//! See: https://docs.genius.com/
//!
//! Every call carries bearer-token authentication. Resolving one artist
//! costs two requests: a /search for the term, then a fetch of the
//! per-artist detail path extracted from the top hit. There is no retry
//! and no caching; repeated calls always re-query the provider.

use super::{adapter, dto};
use crate::genius::domain::{ArtistHandle, GeniusError};

/// Genius API client
pub struct GeniusClient {
    access_token: String,
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string sent on every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default API root
const BASE_URL: &str = "https://api.genius.com";

/// How much of an error response body we keep for diagnostics
const BODY_SNIPPET_LEN: usize = 200;

impl GeniusClient {
    /// Create a new client with the given access token.
    ///
    /// Fails with [`GeniusError::Configuration`] if the token is empty.
    /// This check happens here, before any network call, so a misconfigured
    /// client can never issue an unauthenticated request.
    pub fn new(access_token: impl Into<String>) -> Result<Self, GeniusError> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(GeniusError::Configuration(
                "access token is empty".to_string(),
            ));
        }

        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed responses
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeniusError::Network(e.to_string()))?;

        Ok(Self {
            access_token,
            http_client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Create a client reading the token from a configuration provider.
    ///
    /// Fails with [`GeniusError::Configuration`] if the provider has no
    /// token under the fixed key (see [`crate::config::ACCESS_TOKEN_VAR`]).
    pub fn from_config(provider: &dyn crate::config::ConfigProvider) -> Result<Self, GeniusError> {
        let token = crate::config::access_token(provider)?;
        Self::new(token)
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GeniusError> {
        let mut client = Self::new(access_token)?;
        client.base_url = base_url.into();
        Ok(client)
    }

    /// Resolve an artist name to its full detail payload.
    ///
    /// Issues the search request, extracts the top hit's primary artist,
    /// then fetches that artist's detail resource. Transport failures carry
    /// the HTTP status and body; an empty or unusable hit list is
    /// [`GeniusError::NoArtistFound`], never conflated with transport.
    pub async fn resolve_artist(
        &self,
        search_term: &str,
    ) -> Result<dto::ArtistResponse, GeniusError> {
        let handle = self.search_artist(search_term).await?;
        self.fetch_artist_detail(&handle).await
    }

    /// First request: search for the term and locate the primary artist
    async fn search_artist(&self, search_term: &str) -> Result<ArtistHandle, GeniusError> {
        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(search_term)
        );

        let response = self.get(&url).await?;
        let search = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| GeniusError::Parse(e.to_string()))?;

        adapter::to_artist_handle(search)
    }

    /// Second request: fetch the artist detail via its api_path
    async fn fetch_artist_detail(
        &self,
        handle: &ArtistHandle,
    ) -> Result<dto::ArtistResponse, GeniusError> {
        let url = format!("{}{}", self.base_url, handle.api_path);

        let response = self.get(&url).await?;
        response
            .json::<dto::ArtistResponse>()
            .await
            .map_err(|e| GeniusError::Parse(format!("artist {}: {e}", handle.id)))
    }

    /// Send an authenticated GET and translate non-success statuses.
    ///
    /// The error body is truncated; it is carried for diagnostics only.
    async fn get(&self, url: &str) -> Result<reqwest::Response, GeniusError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| GeniusError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeniusError::Transport {
                status: status.as_u16(),
                body: body.chars().take(BODY_SNIPPET_LEN).collect(),
            });
        }

        Ok(response)
    }
}
