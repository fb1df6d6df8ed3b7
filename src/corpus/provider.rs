//! The upstream corpus provider boundary.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The manifest component tables a refresh pulls.
///
/// Only [`InventoryItems`](ManifestComponent::InventoryItems) feeds the
/// matcher today; the socket and plug tables are fetched so a refresh
/// succeeds or fails as a unit, and are reserved for future matching
/// refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestComponent {
    InventoryItems,
    SocketCategories,
    SocketTypes,
    PlugSets,
}

impl ManifestComponent {
    /// The Bungie definition-table name for this component.
    pub const fn definition_name(self) -> &'static str {
        match self {
            Self::InventoryItems => "DestinyInventoryItemDefinition",
            Self::SocketCategories => "DestinySocketCategoryDefinition",
            Self::SocketTypes => "DestinySocketTypeDefinition",
            Self::PlugSets => "DestinyPlugSetDefinition",
        }
    }
}

impl std::fmt::Display for ManifestComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition_name())
    }
}

/// A source of manifest component tables.
///
/// Implementations fetch one component table as its raw identifier → record
/// JSON mapping. The production implementation is
/// [`BungieSource`](crate::corpus::BungieSource); tests substitute an
/// in-memory source.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch_component(&self, component: ManifestComponent) -> Result<Value>;
}
