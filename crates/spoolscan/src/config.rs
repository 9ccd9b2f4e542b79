//! Configuration loading and management.
//!
//! All tunables for a scan live in [`ScanConfig`], which can be created
//! programmatically or loaded from a TOML file with per-field defaults. The
//! OCR engine binary location is an explicit configuration value handed to
//! the adapter at construction; nothing here is probed as a process-global
//! side effect.

use crate::error::{Result, SpoolscanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main scan configuration.
///
/// # Example
///
/// ```rust
/// use spoolscan::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.ocr.language, "eng");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// OCR engine settings.
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Barcode product-catalog lookup settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Web-search fallback settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// OCR engine adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Explicit path to the tesseract binary. When unset, the adapter probes
    /// `PATH` and well-known install locations at construction time.
    #[serde(default)]
    pub binary: Option<PathBuf>,

    /// Tesseract language code (e.g., "eng", "deu").
    #[serde(default = "default_language")]
    pub language: String,

    /// Tesseract page segmentation mode.
    #[serde(default = "default_psm")]
    pub psm: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: None,
            language: default_language(),
            psm: default_psm(),
        }
    }
}

/// Barcode product-catalog lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the UPC catalog API.
    #[serde(default = "default_catalog_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. A timeout is treated as "no data".
    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_catalog_endpoint(),
            timeout_secs: default_catalog_timeout(),
        }
    }
}

/// Web-search fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// HTML search endpoint scraped for result titles.
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. A timeout is treated as "no data".
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,

    /// Number of result titles to inspect.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            timeout_secs: default_search_timeout(),
            max_results: default_max_results(),
        }
    }
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_psm() -> u8 {
    3
}

fn default_catalog_endpoint() -> String {
    "https://api.upcitemdb.com".to_string()
}

fn default_catalog_timeout() -> u64 {
    5
}

fn default_search_endpoint() -> String {
    "https://html.duckduckgo.com/html".to_string()
}

fn default_search_timeout() -> u64 {
    10
}

fn default_max_results() -> usize {
    5
}

impl ScanConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults, so a file only needs to
    /// state the values it wants to override.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| {
            SpoolscanError::config_with_source(format!("invalid config file '{}'", path.display()), e)
        })
    }
}
