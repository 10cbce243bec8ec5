//! Full-image overlay with zoom toggle, one per gallery item.
//!
//! # Cardinality
//! - Closed: 1 state (zoom is always reset on close)
//! - Open: 2 states (zoomed or not)
//!
//! While open the overlay holds a [`ScrollLockGuard`]; closing or dropping
//! the overlay releases it.

use crate::model::Image;
use crate::state::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Default magnification when zoomed in.
pub const DEFAULT_ZOOM_SCALE: f32 = 1.4;

/// Mouse cursor affordance over the full image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCursor {
    /// Clicking will zoom in.
    ZoomIn,
    /// Clicking will zoom out.
    ZoomOut,
}

impl ZoomCursor {
    /// CSS cursor keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }
}

/// Presentational transform for the full image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStyle {
    /// Uniform scale factor.
    pub scale: f32,
    /// Cursor affordance.
    pub cursor: ZoomCursor,
}

/// What a click inside the overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop container itself.
    Backdrop,
    /// Anything nested inside it (image, frame).
    Content,
}

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    /// Escape closes the overlay.
    Escape,
    /// Any other key.
    Other,
}

/// Open/zoom state of one overlay.
#[derive(Debug)]
pub struct OverlayState {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
    zoomed: bool,
    zoom_scale: f32,
}

impl OverlayState {
    /// Closed overlay coordinating through `lock`.
    pub fn new(lock: ScrollLock) -> Self {
        Self::with_zoom_scale(lock, DEFAULT_ZOOM_SCALE)
    }

    /// Closed overlay with a custom zoom magnification.
    pub fn with_zoom_scale(lock: ScrollLock, zoom_scale: f32) -> Self {
        Self {
            lock,
            guard: None,
            zoomed: false,
            zoom_scale,
        }
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether the full image is magnified.
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Show the overlay and disable document scrolling. No-op if already open.
    pub fn open(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    /// Hide the overlay, reset zoom, release the scroll lock.
    pub fn close(&mut self) {
        self.guard = None;
        self.zoomed = false;
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Flip zoom and return the new style. Ignored while closed.
    pub fn toggle_zoom(&mut self) -> ZoomStyle {
        if self.is_open() {
            self.zoomed = !self.zoomed;
        }
        self.zoom_style()
    }

    /// Current transform for the full image.
    pub fn zoom_style(&self) -> ZoomStyle {
        if self.zoomed {
            ZoomStyle {
                scale: self.zoom_scale,
                cursor: ZoomCursor::ZoomOut,
            }
        } else {
            ZoomStyle {
                scale: 1.0,
                cursor: ZoomCursor::ZoomIn,
            }
        }
    }

    /// Close on a click that hits the backdrop itself.
    ///
    /// Returns `true` if the overlay closed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if self.is_open() && target == ClickTarget::Backdrop {
            self.close();
            true
        } else {
            false
        }
    }

    /// Close on Escape. Returns `true` if the overlay closed.
    pub fn handle_key(&mut self, key: OverlayKey) -> bool {
        if self.is_open() && key == OverlayKey::Escape {
            self.close();
            true
        } else {
            false
        }
    }
}

/// One rendered search result with its own overlay.
///
/// Dropping the item (unmounting) releases any scroll lock it held.
#[derive(Debug)]
pub struct GalleryItem {
    image: Image,
    overlay: OverlayState,
}

impl GalleryItem {
    /// Mount an item for `image`.
    pub fn new(image: Image, lock: ScrollLock, zoom_scale: f32) -> Self {
        Self {
            image,
            overlay: OverlayState::with_zoom_scale(lock, zoom_scale),
        }
    }

    /// The hit this item renders.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Thumbnail URL for the gallery grid.
    pub fn thumbnail_url(&self) -> &str {
        &self.image.preview_url
    }

    /// Full-image URL while the overlay is open.
    pub fn overlay_url(&self) -> Option<&str> {
        self.overlay
            .is_open()
            .then_some(self.image.full_url.as_str())
    }

    /// Overlay state.
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Mutable overlay state.
    pub fn overlay_mut(&mut self) -> &mut OverlayState {
        &mut self.overlay
    }
}
