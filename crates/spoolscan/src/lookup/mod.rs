//! Network enrichment lookups.
//!
//! Both lookups sit behind async traits so the orchestrator can be
//! exercised with in-memory fakes and the CLI can swap in disabled
//! implementations for offline use. "No data" is a first-class outcome
//! (`Ok(None)` / an empty title list); transport failures are reported as
//! errors and absorbed by the orchestrator, never by the clients
//! themselves.

pub mod product;
pub mod search;

use crate::error::Result;
use async_trait::async_trait;

pub use product::{ProductHit, UpcItemDb, product_record};
pub use search::{DuckDuckGoSearch, accumulate_titles, fallback_query};

/// Barcode payload to product-catalog attributes.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Look up a retail barcode payload. `Ok(None)` means the catalog had
    /// nothing - a miss, not a failure.
    async fn lookup(&self, payload: &str) -> Result<Option<ProductHit>>;
}

/// Search query to result titles.
#[async_trait]
pub trait CodeSearch: Send + Sync {
    /// Fetch the top result titles for a query. An empty list means the
    /// search produced nothing usable.
    async fn result_titles(&self, query: &str) -> Result<Vec<String>>;
}

/// Catalog that never returns data; used for offline scans.
pub struct DisabledCatalog;

#[async_trait]
impl ProductCatalog for DisabledCatalog {
    async fn lookup(&self, _payload: &str) -> Result<Option<ProductHit>> {
        Ok(None)
    }
}

/// Search that never returns data; used for offline scans.
pub struct DisabledSearch;

#[async_trait]
impl CodeSearch for DisabledSearch {
    async fn result_titles(&self, _query: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
