//! Bungie.net manifest provider.
//!
//! Resolves the manifest index once per fetch, then downloads the requested
//! component table from the content path the index advertises.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::provider::{ManifestComponent, ManifestSource};

/// Fetches manifest component tables from the Bungie.net platform API.
#[derive(Debug, Clone)]
pub struct BungieSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PlatformEnvelope<T> {
    #[serde(rename = "Response")]
    response: T,
}

#[derive(Debug, Deserialize)]
struct ManifestIndex {
    #[serde(rename = "jsonWorldComponentContentPaths")]
    json_world_component_content_paths: HashMap<String, HashMap<String, String>>,
}

impl BungieSource {
    /// Build a source against `base_url`, authenticating with `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key).context("invalid API key header value")?;
        key.set_sensitive(true);
        headers.insert("X-API-Key", key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the English content path for one component table.
    async fn component_path(&self, component: ManifestComponent) -> Result<String> {
        let url = format!("{}/Platform/Destiny2/Manifest/", self.base_url);
        let index: PlatformEnvelope<ManifestIndex> = self
            .client
            .get(&url)
            .send()
            .await
            .context("manifest index request failed")?
            .error_for_status()
            .context("manifest index request rejected")?
            .json()
            .await
            .context("manifest index payload was not valid JSON")?;

        index
            .response
            .json_world_component_content_paths
            .get("en")
            .and_then(|tables| tables.get(component.definition_name()))
            .cloned()
            .ok_or_else(|| anyhow!("manifest index has no '{}' table", component))
    }
}

#[async_trait]
impl ManifestSource for BungieSource {
    async fn fetch_component(&self, component: ManifestComponent) -> Result<Value> {
        let path = self.component_path(component).await?;
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(%component, %url, "downloading manifest component");

        let table: Value = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("{} download failed", component))?
            .error_for_status()
            .with_context(|| format!("{} download rejected", component))?
            .json()
            .await
            .with_context(|| format!("{} payload was not valid JSON", component))?;

        if !table.is_object() {
            return Err(anyhow!("{} table is not a JSON object", component));
        }

        Ok(table)
    }
}
