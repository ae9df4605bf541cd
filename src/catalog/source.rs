//! Catalog sources
//!
//! One contract, three providers: the bundled build-time asset, an HTTP
//! endpoint (the production shape), and a fixed in-memory list used as the
//! injection seam for tests and previews. Callers see the same ordered
//! entries whichever backs the fetch.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::CatalogEntry;

/// Bundled catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog fetch error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog not found (404)")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid catalog payload: {0}")]
    InvalidPayload(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// A provider of ordered catalog entries.
///
/// One operation: list the catalog. The contract is identical whether the
/// entries come from the bundled asset or a network endpoint.
pub trait CatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send;
}

/// Wire shape of the catalog payload (asset and endpoint share it)
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogEntry>,
}

// =============================================================================
// Bundled Source
// =============================================================================

/// Static catalog parsed from the build-time JSON asset
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogSource for BundledCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send {
        async {
            let file: CatalogFile = serde_json::from_str(BUNDLED_CATALOG)
                .map_err(|e| CatalogError::InvalidPayload(e.to_string()))?;
            Ok(file.items)
        }
    }
}

// =============================================================================
// HTTP Source
// =============================================================================

/// Network-backed catalog endpoint
///
/// Expects `GET {base_url}/catalog` returning the same payload shape as the
/// bundled asset.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get_catalog(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = format!("{}/catalog", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let file: CatalogFile = serde_json::from_str(&body)
                    .map_err(|e| CatalogError::InvalidPayload(format!("JSON parse error: {}", e)))?;
                Ok(file.items)
            }
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
            status => Err(CatalogError::ServerError(status.as_u16())),
        }
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send {
        self.get_catalog()
    }
}

// =============================================================================
// Fixed Source
// =============================================================================

/// Explicit in-memory entries, supplied by the caller
///
/// The dependency-injection seam: tests and previews construct one of these
/// instead of toggling an optional override field at runtime.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    entries: Vec<CatalogEntry>,
}

impl FixedCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl CatalogSource for FixedCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send {
        let entries = self.entries.clone();
        async move { Ok(entries) }
    }
}

// =============================================================================
// Runtime Selection
// =============================================================================

/// Source picked at startup from CLI flags and config
#[derive(Debug, Clone)]
pub enum SelectedSource {
    Bundled(BundledCatalog),
    Http(HttpCatalog),
}

impl SelectedSource {
    /// Bundled unless a catalog URL was configured
    pub fn from_url(url: Option<String>) -> Self {
        match url {
            Some(url) => SelectedSource::Http(HttpCatalog::new(url)),
            None => SelectedSource::Bundled(BundledCatalog),
        }
    }
}

impl CatalogSource for SelectedSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, CatalogError>> + Send {
        async move {
            match self {
                SelectedSource::Bundled(source) => source.fetch().await,
                SelectedSource::Http(source) => source.fetch().await,
            }
        }
    }
}
