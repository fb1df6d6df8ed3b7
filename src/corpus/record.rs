//! Data model for Destiny manifest item definitions.
//!
//! Mirrors the subset of `DestinyInventoryItemDefinition` the matcher reads.
//! Records are owned by the corpus snapshot and immutable for its lifetime.

use serde::Deserialize;

/// One inventory item definition from the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    /// Opaque manifest identifier for the item.
    pub hash: u64,

    #[serde(default)]
    pub display_properties: DisplayProperties,

    /// Category tags used to classify the item (20 = armor, 1 = weapon, 59 = mod).
    #[serde(default)]
    pub item_category_hashes: Vec<u32>,

    #[serde(default)]
    pub inventory: Option<ItemInventory>,

    #[serde(default)]
    pub item_type_display_name: Option<String>,
}

/// Display name, flavor description, and icon path of an item.
///
/// The manifest uses empty strings rather than nulls for items without
/// display text, so emptiness is the absence signal here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Inventory block carrying the tier (rarity) label.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInventory {
    #[serde(default)]
    pub tier_type_name: Option<String>,
}

impl ItemDefinition {
    /// Display text present on both sides, or `None` if the record lacks a
    /// name or description. Items failing this are skipped by the matcher
    /// entirely; this is a data-quality filter, not an error.
    pub fn display_text(&self) -> Option<(&str, &str)> {
        let name = self.display_properties.name.as_str();
        let description = self.display_properties.description.as_str();
        if name.is_empty() || description.is_empty() {
            return None;
        }
        Some((name, description))
    }

    /// Tier/rarity label, defaulting to `"Common"` when the manifest omits it.
    pub fn rarity(&self) -> &str {
        self.inventory
            .as_ref()
            .and_then(|inv| inv.tier_type_name.as_deref())
            .unwrap_or("Common")
    }

    /// Whether the item is flagged Exotic by tier name or type display name.
    pub fn is_exotic(&self) -> bool {
        self.inventory
            .as_ref()
            .is_some_and(|inv| inv.tier_type_name.as_deref() == Some("Exotic"))
            || self.item_type_display_name.as_deref() == Some("Exotic")
    }
}
