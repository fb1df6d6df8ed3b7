//! Error taxonomy for the search pipeline.

use thiserror::Error;

/// Failures a query can surface to the caller.
///
/// Matching and ranking are total functions over well-formed inputs; only
/// query validation and the corpus refresh can fail. The transport layer is
/// responsible for translating these into client-visible vs. server-visible
/// signals, so this type only carries the failure kind.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Raw input was absent, blank, or normalized to an empty keyword set.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The upstream manifest fetch failed and no usable snapshot exists.
    #[error("item corpus unavailable")]
    CorpusUnavailable(#[source] anyhow::Error),
}
