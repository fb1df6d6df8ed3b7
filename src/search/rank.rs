//! Deterministic ranking and truncation of match results.

use serde::Serialize;

use super::keywords::KeywordSet;
use super::matcher::ItemMatch;

/// Maximum number of entries a response carries, regardless of how many
/// items matched.
pub const RESULT_LIMIT: usize = 20;

/// The packaged outcome of one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Top matches, best synergy first, at most [`RESULT_LIMIT`] entries.
    pub results: Vec<ItemMatch>,
    /// Match count before truncation.
    pub total_found: usize,
    /// The normalized keywords the query was evaluated against.
    pub processed_keywords: Vec<String>,
}

/// Orders matches by synergy score descending and truncates to the result
/// cap.
///
/// The sort is stable: equal scores keep the relative order the matcher's
/// corpus scan produced. No secondary key is defined beyond that.
pub fn rank(mut matches: Vec<ItemMatch>, keywords: KeywordSet) -> SearchResponse {
    let total_found = matches.len();

    matches.sort_by(|a, b| b.synergy_score.cmp(&a.synergy_score));
    matches.truncate(RESULT_LIMIT);

    SearchResponse {
        results: matches,
        total_found,
        processed_keywords: keywords.into_vec(),
    }
}
