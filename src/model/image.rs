//! Image hits as delivered by the search provider.

use super::identifiers::ImageId;
use serde::Deserialize;

/// One image hit.
///
/// Passed through unmodified from the provider: the core never rewrites
/// URLs or metadata, it only accumulates and orders hits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    /// Provider-assigned identifier.
    pub id: ImageId,
    /// Thumbnail-sized URL shown in the gallery grid.
    #[serde(rename = "webformatURL")]
    pub preview_url: String,
    /// Full-resolution URL shown in the overlay.
    #[serde(rename = "largeImageURL")]
    pub full_url: String,
    /// Comma-separated tags, used as alt text when present.
    #[serde(default)]
    pub tags: Option<String>,
}

impl Image {
    /// Build an image record without going through JSON.
    pub fn new(id: ImageId, preview_url: impl Into<String>, full_url: impl Into<String>) -> Self {
        Self {
            id,
            preview_url: preview_url.into(),
            full_url: full_url.into(),
            tags: None,
        }
    }

    /// Alt text for rendering: tags if the provider sent any.
    pub fn alt_text(&self) -> &str {
        match self.tags.as_deref() {
            Some(tags) if !tags.trim().is_empty() => tags,
            _ => "gallery image",
        }
    }
}
