//! Web-search fallback lookup.
//!
//! Scrapes the DuckDuckGo HTML endpoint for result titles and runs each
//! through the shared pattern matcher. Accumulation is additive with
//! earlier results taking precedence, and stops early once brand, material
//! and color are all populated - an optimization, not a correctness
//! requirement.

use crate::config::SearchConfig;
use crate::error::{Result, SpoolscanError};
use crate::lookup::CodeSearch;
use crate::text::parse_label_text;
use crate::types::FilamentRecord;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use std::time::Duration;

/// Browser identity strings rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:126.0) Gecko/20100101 Firefox/126.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
];

/// CSS selector for result title anchors on the DuckDuckGo HTML page.
const RESULT_TITLE_SELECTOR: &str = "a.result__a";

/// Build the fallback search query for a filament code.
pub fn fallback_query(code: &str) -> String {
    format!("{} filament code 3D printing", code)
}

/// Accumulate matcher output over result titles, earlier titles winning,
/// with an early exit once brand, material and color are all found.
pub fn accumulate_titles<I, S>(titles: I) -> FilamentRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut accumulated = FilamentRecord::default();
    for title in titles {
        accumulated.merge_missing(&parse_label_text(title.as_ref()));
        if accumulated.has_key_fields() {
            break;
        }
    }
    accumulated
}

/// Extract up to `limit` result titles from a search result page.
pub fn extract_result_titles(html: &str, limit: usize) -> Vec<String> {
    let selector = match Selector::parse(RESULT_TITLE_SELECTOR) {
        Ok(selector) => selector,
        Err(err) => {
            tracing::warn!(error = %err, "invalid result selector");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .take(limit)
        .collect()
}

/// DuckDuckGo HTML search client.
pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpoolscanError::config_with_source("failed to build search HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
        })
    }

    fn random_user_agent() -> &'static str {
        USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0])
    }
}

#[async_trait]
impl CodeSearch for DuckDuckGoSearch {
    async fn result_titles(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .header(USER_AGENT, Self::random_user_agent())
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "search returned non-success");
            return Ok(Vec::new());
        }

        let html = response.text().await?;
        Ok(extract_result_titles(&html, self.max_results))
    }
}
