//! The synergy search core: keyword normalization, matching, and ranking.

pub mod keywords;
pub mod matcher;
pub mod rank;

pub use keywords::{KeywordSet, normalize};
pub use matcher::{ItemMatch, find_synergies};
pub use rank::{RESULT_LIMIT, SearchResponse, rank};
