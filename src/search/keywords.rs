//! Keyword normalization for free-text playstyle queries.

use crate::error::SearchError;

/// An ordered, deduplicated set of lowercase trait keywords.
///
/// Order is first-occurrence order from the raw query, so matched-keyword
/// lists in results line up with what the user typed. A `KeywordSet` is
/// never empty; construction fails instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turns a raw free-text query into a canonical [`KeywordSet`].
///
/// Splits on commas (the only recognized delimiter), trims and lowercases
/// each segment, drops empties, and removes duplicates keeping the first
/// occurrence's position. Pure and idempotent over its own joined output.
pub fn normalize(raw: &str) -> Result<KeywordSet, SearchError> {
    if raw.trim().is_empty() {
        return Err(SearchError::InvalidQuery(
            "keywords are required".to_string(),
        ));
    }

    let mut keywords: Vec<String> = Vec::new();
    for segment in raw.split(',') {
        let keyword = segment.trim().to_lowercase();
        if keyword.is_empty() || keywords.contains(&keyword) {
            continue;
        }
        keywords.push(keyword);
    }

    if keywords.is_empty() {
        return Err(SearchError::InvalidQuery(
            "query contained no usable keywords".to_string(),
        ));
    }

    Ok(KeywordSet(keywords))
}
