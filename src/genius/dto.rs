//! Genius API Data Transfer Objects
//!
//! These types match EXACTLY what the Genius API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the genius module - convert to domain types.
//!
//! API Reference: https://docs.genius.com/
//!
//! We use two endpoints: /search to find the primary artist for a term, and
//! the per-artist detail path from the search hit (e.g. /artists/130).

use serde::{Deserialize, Serialize};

/// Search response envelope (`GET /search?q=...`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Payload wrapper - Genius nests everything under `response`
    pub response: SearchBody,
}

/// Inner search payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchBody {
    /// Ranked search hits; empty when nothing matched
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hit {
    /// The matched resource (a song, for artist searches too)
    pub result: HitResult,
}

/// The resource inside a hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HitResult {
    /// The main artist credited on the hit
    pub primary_artist: Option<PrimaryArtist>,
}

/// Primary artist summary embedded in a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrimaryArtist {
    /// Genius artist ID
    pub id: Option<u64>,
    /// Provider-relative path to the artist detail resource
    pub api_path: Option<String>,
}

/// Artist detail response envelope (`GET /artists/{id}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistResponse {
    /// Payload wrapper
    pub response: ArtistBody,
}

/// Inner artist payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistBody {
    /// The full artist record
    pub artist: ArtistDetail,
}

/// Full artist record from the detail endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistDetail {
    /// Genius artist ID
    pub id: u64,
    /// Canonical artist name
    pub name: String,
    /// Follower count; Genius omits this key for some artists
    pub followers_count: Option<u64>,
    /// Canonical Genius page URL
    pub url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
