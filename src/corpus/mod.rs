//! Item corpus: manifest data model, upstream provider, and the TTL cache.

pub mod bungie;
pub mod cache;
pub mod provider;
pub mod record;

pub use bungie::BungieSource;
pub use cache::{CorpusCache, CorpusSnapshot, DEFAULT_CACHE_TTL};
pub use provider::{ManifestComponent, ManifestSource};
pub use record::ItemDefinition;
