//! Shared fixtures: an in-memory manifest source and corpus builders.

#![allow(dead_code)]

use async_trait::async_trait;
use casting_destiny::corpus::{ManifestComponent, ManifestSource};
use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::time::Duration;

/// A `ManifestSource` serving a fixed inventory table from memory.
///
/// Counts every component fetch so tests can observe how often the cache
/// goes upstream, and can be switched into a failing mode to simulate an
/// outage.
pub struct StaticSource {
    inventory: Mutex<Value>,
    failing: AtomicBool,
    fetches: AtomicUsize,
    delay: Duration,
}

impl StaticSource {
    pub fn new(inventory: Value) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Like [`new`](Self::new), but every fetch takes `delay` to complete.
    /// Useful for overlapping in-flight refreshes under a paused clock.
    pub fn with_delay(inventory: Value, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(inventory)
        }
    }

    /// Total `fetch_component` calls across all component tables.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Make every subsequent fetch fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ManifestSource for StaticSource {
    async fn fetch_component(&self, component: ManifestComponent) -> anyhow::Result<Value> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("simulated upstream outage");
        }
        match component {
            ManifestComponent::InventoryItems => Ok(self.inventory.lock().unwrap().clone()),
            _ => Ok(json!({})),
        }
    }
}

/// One manifest item entry with display text and no categories.
pub fn item(hash: u64, name: &str, description: &str) -> Value {
    json!({
        "hash": hash,
        "displayProperties": {
            "name": name,
            "description": description,
            "icon": format!("/common/icons/{hash}.jpg"),
        },
        "itemCategoryHashes": [],
    })
}

/// Assemble entries into an identifier-keyed inventory table.
pub fn inventory_table(entries: &[Value]) -> Value {
    let mut table = serde_json::Map::new();
    for entry in entries {
        let hash = entry["hash"].as_u64().unwrap();
        table.insert(hash.to_string(), entry.clone());
    }
    Value::Object(table)
}

/// A small corpus with a few recognizable items.
pub fn sample_inventory() -> Value {
    inventory_table(&[
        item(100, "Demolitionist Gauntlets", "Grenade kills grant faster reload."),
        item(200, "Void Walker Hood", "Extends the duration of your super."),
        item(300, "Sprint Greaves", "Sprinting reloads your equipped weapon."),
        item(400, "Blank Trinket", ""),
    ])
}
