//! Batch orchestration for artist lookups.
//!
//! `resolve_artists` turns a list of search terms into a table of
//! [`ArtistRecord`]s, one per term, in input order. Per-item failures are
//! isolated: they are reported to a [`DiagnosticSink`] and produce an
//! all-absent record, so the batch itself cannot fail on bad inputs.
//! Lookups run strictly sequentially - one request pair at a time.

use crate::genius::adapter;
use crate::genius::client::GeniusClient;
use crate::genius::domain::{ArtistRecord, GeniusError};
use crate::genius::traits::GeniusApi;

/// Where per-item lookup failures are reported.
///
/// Injected into the batch operation so callers control how failures
/// surface (log line, collected list in tests, ...). The batch result
/// itself only shows failures as absent fields.
pub trait DiagnosticSink {
    /// Called once per failed term, with the term and the failure.
    fn lookup_failed(&self, search_term: &str, error: &GeniusError);
}

/// Production sink: emits a tracing warning per failed term.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn lookup_failed(&self, search_term: &str, error: &GeniusError) {
        tracing::warn!("Lookup failed for {:?}: {}", search_term, error);
    }
}

/// Resolve a batch of artist names, one record per term, in input order.
///
/// A failed term never aborts the batch and never reorders it.
pub async fn resolve_artists(
    client: &impl GeniusApi,
    search_terms: &[String],
    diagnostics: &dyn DiagnosticSink,
) -> Vec<ArtistRecord> {
    let mut records = Vec::with_capacity(search_terms.len());

    for term in search_terms {
        let record = match client.resolve_artist(term).await {
            Ok(detail) => adapter::to_record(term, detail),
            Err(e) => {
                diagnostics.lookup_failed(term, &e);
                adapter::failed_record(term)
            }
        };
        records.push(record);
    }

    records
}

impl GeniusClient {
    /// Batch lookup with the default tracing-backed diagnostics.
    pub async fn resolve_artists(&self, search_terms: &[String]) -> Vec<ArtistRecord> {
        resolve_artists(self, search_terms, &TracingSink).await
    }
}
