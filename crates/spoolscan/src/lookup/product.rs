//! Barcode product-catalog lookup against the UPCitemdb trial API.
//!
//! Only retail-numeric payloads reach this client (the orchestrator gates
//! on symbology). A hit yields raw catalog attributes; field inference over
//! the free-text title/description goes through the same pattern matcher as
//! everything else.

use crate::config::CatalogConfig;
use crate::error::{Result, SpoolscanError};
use crate::lookup::ProductCatalog;
use crate::text::parse_product_text;
use crate::types::FilamentRecord;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;

const CLIENT_USER_AGENT: &str = concat!("spoolscan/", env!("CARGO_PKG_VERSION"));

/// Raw catalog attributes for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductHit {
    pub brand: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
struct CatalogItem {
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<CatalogItem> for ProductHit {
    fn from(item: CatalogItem) -> Self {
        Self {
            brand: item.brand.filter(|s| !s.is_empty()),
            title: item.title.filter(|s| !s.is_empty()),
            description: item.description.filter(|s| !s.is_empty()),
            category: item.category.filter(|s| !s.is_empty()),
        }
    }
}

/// UPCitemdb client.
pub struct UpcItemDb {
    client: reqwest::Client,
    endpoint: String,
}

impl UpcItemDb {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| SpoolscanError::config_with_source("failed to build catalog HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProductCatalog for UpcItemDb {
    async fn lookup(&self, payload: &str) -> Result<Option<ProductHit>> {
        let url = format!("{}/prod/trial/lookup", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("upc", payload)])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "catalog returned non-success");
            return Ok(None);
        }

        let body: LookupResponse = response.json().await?;
        Ok(body.items.into_iter().next().map(ProductHit::from))
    }
}

/// Turn a catalog hit into a partial record: brand straight from catalog
/// metadata, material/weight/diameter re-inferred from the combined
/// title+description text, and the title kept for display.
pub fn product_record(hit: &ProductHit) -> FilamentRecord {
    let combined = format!(
        "{} {}",
        hit.title.as_deref().unwrap_or_default(),
        hit.description.as_deref().unwrap_or_default()
    );

    let mut record = parse_product_text(&combined);
    record.brand = hit.brand.clone();
    record.product_title = hit.title.clone();
    record
}
