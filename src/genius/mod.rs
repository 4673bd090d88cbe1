//! Genius client module - resolves artist names via the Genius web API.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our results
//! - **API DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the Genius API
//! - **Service** - Batch orchestration with per-item failure isolation
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. Batch behavior is testable without a network
//!
//! # Usage
//!
//! ```ignore
//! use genius::GeniusClient;
//!
//! let client = GeniusClient::new("your-access-token")?;
//!
//! // Single lookup - propagates failures
//! let detail = client.resolve_artist("Drake").await?;
//!
//! // Batch lookup - one record per term, failures become absent fields
//! let table = client.resolve_artists(&terms).await;
//! ```

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod service;
pub mod traits;

pub use client::GeniusClient;
pub use domain::{ArtistRecord, GeniusError};
pub use service::{DiagnosticSink, TracingSink, resolve_artists};
pub use traits::GeniusApi;
