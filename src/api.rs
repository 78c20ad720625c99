use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::USER_AGENT;
use crate::types::{Category, CategoryStock, ItemRecord, Snapshot};

/// Fixed per-request timeout so a stalled category cannot hang a cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Grow A Garden inventory API.
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the item list for one category.
    ///
    /// Anything other than HTTP 200 with a JSON array body is an error.
    pub async fn fetch_category(&self, category: Category) -> Result<Vec<ItemRecord>> {
        let url = format!("{}/{}", self.base_url, category.segment());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if response.status() != StatusCode::OK {
            bail!("{url} returned HTTP {}", response.status());
        }

        let items: Vec<ItemRecord> = response
            .json()
            .await
            .with_context(|| format!("malformed body from {url}"))?;
        debug!("Fetched {} {} item(s)", items.len(), category.segment());
        Ok(items)
    }

    /// Fetch every category sequentially, building one complete snapshot.
    ///
    /// A failing category yields an empty item list and never aborts the
    /// remaining fetches, so the snapshot always covers all categories.
    pub async fn fetch_all(&self) -> Snapshot {
        let mut entries = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let items = match self.fetch_category(category).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("Fetching {} failed: {e:#}", category.segment());
                    Vec::new()
                }
            };
            entries.push(CategoryStock { category, items });
        }
        Snapshot { entries }
    }
}
