//! Adapter layer: Convert Genius DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if Genius changes their response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::genius::domain::{ArtistHandle, ArtistRecord, GeniusError};

/// Extract the primary artist's id and api_path from a search response.
///
/// The id and api_path are both required to issue the detail request, so a
/// hit that lacks either is treated the same as no hit at all.
pub fn to_artist_handle(response: dto::SearchResponse) -> Result<ArtistHandle, GeniusError> {
    let hit = response
        .response
        .hits
        .into_iter()
        .next()
        .ok_or(GeniusError::NoArtistFound)?;

    let artist = hit.result.primary_artist.ok_or(GeniusError::NoArtistFound)?;

    match (artist.id, artist.api_path) {
        (Some(id), Some(api_path)) => Ok(ArtistHandle { id, api_path }),
        _ => Err(GeniusError::NoArtistFound),
    }
}

/// Build a table record from a successful artist detail response.
///
/// A missing `followers_count` maps to `None`; present-as-zero stays zero.
pub fn to_record(search_term: &str, response: dto::ArtistResponse) -> ArtistRecord {
    let artist = response.response.artist;
    ArtistRecord {
        search_term: search_term.to_string(),
        artist_name: Some(artist.name),
        artist_id: Some(artist.id),
        followers_count: artist.followers_count,
    }
}

/// Build the all-absent record for a term whose lookup failed.
pub fn failed_record(search_term: &str) -> ArtistRecord {
    ArtistRecord {
        search_term: search_term.to_string(),
        artist_name: None,
        artist_id: None,
        followers_count: None,
    }
}
