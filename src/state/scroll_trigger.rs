//! Auto-scroll to freshly loaded content.
//!
//! Whenever the result list changes the page scrolls so the new content sits
//! `scroll_offset` pixels above the bottom of the document. Small screens
//! never auto-scroll.

use crate::viewport::ViewportSize;

/// Widest viewport that never auto-scrolls.
pub const SMALL_SCREEN_MAX_WIDTH: u32 = 520;

/// How the presentation layer should animate a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animate to the target.
    #[default]
    Smooth,
    /// Jump to the target.
    Instant,
}

/// Absolute scroll position to move the document to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Target offset from the top of the document, in pixels.
    pub top: u32,
    /// Animation.
    pub behavior: ScrollBehavior,
}

/// `document_height - viewport_height - scroll_offset`, possibly negative.
pub fn scrollable_distance(document_height: u32, viewport_height: u32, scroll_offset: u32) -> i64 {
    i64::from(document_height) - i64::from(viewport_height) - i64::from(scroll_offset)
}

/// Auto-scroll policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTrigger {
    small_screen_max_width: u32,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(SMALL_SCREEN_MAX_WIDTH)
    }
}

impl ScrollTrigger {
    /// Trigger that stays silent for viewports up to `small_screen_max_width` wide.
    pub fn new(small_screen_max_width: u32) -> Self {
        Self {
            small_screen_max_width,
        }
    }

    /// Width threshold for the small-screen policy.
    pub fn small_screen_max_width(&self) -> u32 {
        self.small_screen_max_width
    }

    /// Where to scroll after the result list changed, if anywhere.
    ///
    /// `None` on small screens, or when the content already fits.
    pub fn target(
        &self,
        viewport: ViewportSize,
        document_height: u32,
        scroll_offset: u32,
    ) -> Option<ScrollRequest> {
        if viewport.width <= self.small_screen_max_width {
            return None;
        }

        let distance = scrollable_distance(document_height, viewport.height, scroll_offset);
        if distance <= 0 {
            return None;
        }

        Some(ScrollRequest {
            top: u32::try_from(distance).unwrap_or(u32::MAX),
            behavior: ScrollBehavior::Smooth,
        })
    }
}

/// Detects result-list changes by comparing session revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultsWatcher {
    seen: u64,
}

impl ResultsWatcher {
    /// Watcher that considers `revision` already seen.
    pub fn new(revision: u64) -> Self {
        Self { seen: revision }
    }

    /// Returns `true` once per new `revision`.
    pub fn observe(&mut self, revision: u64) -> bool {
        if revision == self.seen {
            false
        } else {
            self.seen = revision;
            true
        }
    }
}
