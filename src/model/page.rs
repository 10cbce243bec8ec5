//! One page of provider results.

use super::error::ProviderError;
use super::image::Image;
use serde::Deserialize;

/// Result of a single `fetch_page` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultPage {
    /// Hits for the requested page, in provider order.
    #[serde(default)]
    pub hits: Vec<Image>,
    /// Total number of hits the provider reports for the query.
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
}

impl ResultPage {
    /// Construct a page directly.
    pub fn new(hits: Vec<Image>, total_hits: u64) -> Self {
        Self { hits, total_hits }
    }

    /// Decode a provider response body.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Decode`] if the body is not a valid result page.
    pub fn from_json(body: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    /// Number of hits on this page.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the page holds no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
