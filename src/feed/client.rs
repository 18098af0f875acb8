//! Feed retrieval.
//!
//! One GET of the summary feed; failure is an ordinary `Err` the caller can
//! surface, never a silently missing render.

use crate::feed::record::FeedCollection;
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// USGS all-day summary feed of global earthquake events
pub const USGS_ALL_DAY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build reqwest async client")
});

/// Anything that can produce an earthquake feature collection.
///
/// The seam lets tests and offline tooling substitute a fixture source for
/// the live feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<FeedCollection>;
}

/// HTTP client for a GeoJSON summary feed
#[derive(Debug, Clone)]
pub struct UsgsFeedClient {
    url: String,
}

impl UsgsFeedClient {
    /// Creates a client against the all-day feed
    pub fn new() -> Self {
        Self::with_url(USGS_ALL_DAY_URL)
    }

    /// Creates a client against a custom feed URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for UsgsFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for UsgsFeedClient {
    async fn fetch(&self) -> Result<FeedCollection> {
        log::debug!("fetching earthquake feed from {}", self.url);

        let response = HTTP_CLIENT.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        log::debug!("downloaded {} bytes from {}", body.len(), self.url);
        FeedCollection::parse(&body)
    }
}
