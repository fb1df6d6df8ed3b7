pub mod cli;
pub mod corpus;
pub mod error;
pub mod search;
pub mod server;
pub mod service;
pub mod tracing;

pub use error::SearchError;
pub use search::{KeywordSet, SearchResponse};
pub use service::SearchService;
