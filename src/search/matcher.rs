//! Synergy matching: scans the corpus for items whose display text contains
//! the query keywords and scores each hit.

use serde::Serialize;

use super::keywords::KeywordSet;
use crate::corpus::{CorpusSnapshot, ItemDefinition};

/// Category hash for armor pieces.
const ARMOR_CATEGORY: u32 = 20;
/// Category hash for weapons.
const WEAPON_CATEGORY: u32 = 1;
/// Category hash for mods.
const MOD_CATEGORY: u32 = 59;

/// One item that matched at least one query keyword.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMatch {
    pub identifier: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Subsequence of the query's keyword set found in the item text.
    pub matched_keywords: Vec<String>,
    /// Integer percentage of the query's keywords this item satisfies.
    pub synergy_score: u32,
    pub rarity: String,
}

/// Scans every item in the snapshot and returns a match per item whose
/// name + description text contains at least one keyword.
///
/// Results come back in corpus scan order; the ranker orders them. Items
/// missing a name or description are skipped outright (data-quality filter).
pub fn find_synergies(keywords: &KeywordSet, snapshot: &CorpusSnapshot) -> Vec<ItemMatch> {
    let total = keywords.len();
    let mut results = Vec::new();

    for item in snapshot.items() {
        let Some((name, description)) = item.display_text() else {
            continue;
        };

        let haystack = format!("{} {}", name, description).to_lowercase();
        let matched: Vec<String> = keywords
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .cloned()
            .collect();

        if matched.is_empty() {
            continue;
        }

        results.push(ItemMatch {
            identifier: item.hash,
            name: name.to_string(),
            description: description.to_string(),
            item_type: resolve_item_type(item),
            icon: item.display_properties.icon.clone(),
            synergy_score: synergy_score(matched.len(), total),
            matched_keywords: matched,
            rarity: item.rarity().to_string(),
        });
    }

    results
}

/// Integer percentage of the full keyword set this item satisfied.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn synergy_score(matched: usize, total: usize) -> u32 {
    debug_assert!(total > 0, "KeywordSet is never empty");
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Derives a human label from the item's category hashes.
///
/// Checks run in a fixed order and a later match overwrites an earlier one,
/// so an item carrying several recognized categories resolves to the
/// last-checked tag (armor, then weapon, then mod). This is a defined, if
/// arbitrary, tie-break; callers must not read semantic priority into it.
/// Exotic items get an `"Exotic "` prefix on top of the resolved label.
fn resolve_item_type(item: &ItemDefinition) -> String {
    let mut label = "Unknown";
    if item.item_category_hashes.contains(&ARMOR_CATEGORY) {
        label = "Armor";
    }
    if item.item_category_hashes.contains(&WEAPON_CATEGORY) {
        label = "Weapon";
    }
    if item.item_category_hashes.contains(&MOD_CATEGORY) {
        label = "Mod";
    }

    if item.is_exotic() {
        format!("Exotic {label}")
    } else {
        label.to_string()
    }
}
