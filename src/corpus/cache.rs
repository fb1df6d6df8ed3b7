//! Time-bounded in-memory snapshot of the item corpus.
//!
//! The cache holds the most recent parsed manifest behind an `Arc` and
//! replaces it wholesale on refresh. A single refresh mutex keeps concurrent
//! stale readers from each triggering their own upstream load.

use ahash::RandomState;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::time::{Duration, Instant};

use super::provider::{ManifestComponent, ManifestSource};
use super::record::ItemDefinition;
use crate::error::SearchError;

/// How long a snapshot stays fresh before a refresh is attempted.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// An immutable, timestamped capture of the item corpus.
///
/// Items are sorted by hash so every query scans the corpus in the same
/// defined order, which is what makes tie-breaking in the ranker stable
/// across identical (keywords, snapshot) pairs.
#[derive(Debug)]
pub struct CorpusSnapshot {
    items: Vec<ItemDefinition>,
    captured_at: Instant,
}

impl CorpusSnapshot {
    /// Build a snapshot from already-parsed items, capturing the current time.
    pub fn from_items(mut items: Vec<ItemDefinition>) -> Self {
        items.sort_by_key(|item| item.hash);
        Self {
            items,
            captured_at: Instant::now(),
        }
    }

    /// Items in scan order (ascending hash).
    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        Instant::now().duration_since(self.captured_at) < ttl
    }
}

/// Process-wide corpus cache with a refresh TTL.
pub struct CorpusCache {
    source: Arc<dyn ManifestSource>,
    ttl: Duration,
    snapshot: RwLock<Option<Arc<CorpusSnapshot>>>,
    /// Held for the duration of a refresh so only one proceeds at a time.
    refresh: Mutex<()>,
}

impl CorpusCache {
    pub fn new(source: Arc<dyn ManifestSource>) -> Self {
        Self::with_ttl(source, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(source: Arc<dyn ManifestSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Returns the current snapshot, refreshing it first if stale or absent.
    ///
    /// Callers arriving while a refresh is in flight wait on the refresh
    /// mutex and are served whatever it produced. A failed refresh falls
    /// back to the previous snapshot when one exists; with no prior
    /// snapshot it surfaces [`SearchError::CorpusUnavailable`].
    pub async fn snapshot(&self) -> Result<Arc<CorpusSnapshot>, SearchError> {
        if let Some(current) = self.current_fresh().await {
            return Ok(current);
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have completed the refresh while we waited.
        if let Some(current) = self.current_fresh().await {
            return Ok(current);
        }

        match self.load().await {
            Ok(fresh) => {
                let fresh = Arc::new(fresh);
                *self.snapshot.write().await = Some(fresh.clone());
                Ok(fresh)
            }
            Err(error) => {
                let previous = self.snapshot.read().await.clone();
                match previous {
                    Some(stale) => {
                        tracing::warn!(
                            error = %format!("{error:#}"),
                            "corpus refresh failed, serving stale snapshot"
                        );
                        Ok(stale)
                    }
                    None => Err(SearchError::CorpusUnavailable(error)),
                }
            }
        }
    }

    async fn current_fresh(&self) -> Option<Arc<CorpusSnapshot>> {
        let guard = self.snapshot.read().await;
        guard.as_ref().filter(|s| s.is_fresh(self.ttl)).cloned()
    }

    /// Fetch every manifest component and parse the item table.
    ///
    /// All four fetches must succeed or the refresh fails as a unit; a
    /// partial load never replaces a valid snapshot. The socket and plug
    /// tables are not retained (reserved for future matching refinement).
    async fn load(&self) -> Result<CorpusSnapshot> {
        let start = Instant::now();

        let (items, _socket_categories, _socket_types, _plug_sets) = tokio::try_join!(
            self.source.fetch_component(ManifestComponent::InventoryItems),
            self.source.fetch_component(ManifestComponent::SocketCategories),
            self.source.fetch_component(ManifestComponent::SocketTypes),
            self.source.fetch_component(ManifestComponent::PlugSets),
        )?;

        let table: HashMap<String, ItemDefinition, RandomState> =
            serde_json::from_value(items).context("failed to parse inventory item table")?;

        let snapshot = CorpusSnapshot::from_items(table.into_values().collect());

        tracing::info!(
            items = snapshot.len(),
            elapsed = ?start.elapsed(),
            "corpus snapshot refreshed"
        );

        Ok(snapshot)
    }
}

impl std::fmt::Debug for CorpusCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
