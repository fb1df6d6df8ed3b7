//! Query orchestration: normalize, fetch corpus, match, rank.

use std::sync::Arc;

use crate::corpus::CorpusCache;
use crate::error::SearchError;
use crate::search::{find_synergies, normalize, rank, SearchResponse};

/// Sequences the search pipeline for one query.
///
/// Performs no algorithmic work itself; each stage either succeeds or
/// short-circuits the query with the stage's own error, untouched.
pub struct SearchService {
    cache: Arc<CorpusCache>,
}

impl SearchService {
    pub fn new(cache: Arc<CorpusCache>) -> Self {
        Self { cache }
    }

    /// Runs a raw free-text query through the full pipeline.
    pub async fn search(&self, raw_query: &str) -> Result<SearchResponse, SearchError> {
        let keywords = normalize(raw_query)?;
        tracing::debug!(keywords = ?keywords.as_slice(), "query normalized");

        let snapshot = self.cache.snapshot().await?;
        let matches = find_synergies(&keywords, &snapshot);

        tracing::info!(
            keywords = keywords.len(),
            corpus = snapshot.len(),
            matched = matches.len(),
            "synergy scan complete"
        );

        Ok(rank(matches, keywords))
    }
}
