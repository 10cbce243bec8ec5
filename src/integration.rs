//! Gallery controller: wires the session to the viewport and scroll policy.
//!
//! A presentation layer drives one [`GalleryController`]: it forwards user
//! submits and load-more clicks, publishes resizes on the shared
//! [`ResizeHub`], and calls [`GalleryController::after_render`] once the new
//! document height is known to learn whether to auto-scroll.
//!
//! Data flow:
//!
//! ```text
//! ResizeHub -> ViewportAdapter --page size--> SearchSession <- submit / load more
//! SearchSession --results revision--> ResultsWatcher -> ScrollTrigger -> ScrollRequest
//! ```

use crate::config::ResolvedConfig;
use crate::model::SessionError;
use crate::provider::SearchProvider;
use crate::state::{
    GalleryItem, ResultsWatcher, ScrollLock, ScrollRequest, ScrollTrigger, SearchSession,
    SessionStatus, SignalSink,
};
use crate::viewport::{ResizeHub, ResizeSubscription, ViewportAdapter, ViewportSize};
use tracing::debug;

/// Owns one search session and everything that reacts to it.
///
/// Dropping the controller deregisters its resize listener.
#[derive(Debug)]
pub struct GalleryController<P, K: SignalSink> {
    provider: P,
    session: SearchSession<K>,
    viewport: ViewportAdapter,
    resize: ResizeSubscription,
    trigger: ScrollTrigger,
    watcher: ResultsWatcher,
    scroll_lock: ScrollLock,
    zoom_scale: f32,
}

impl<P: SearchProvider, K: SignalSink> GalleryController<P, K> {
    /// Mount a controller: measure the initial viewport and start listening
    /// for resizes on `hub`.
    pub fn new(
        provider: P,
        signals: K,
        config: &ResolvedConfig,
        hub: &ResizeHub,
        scroll_lock: ScrollLock,
    ) -> Self {
        let viewport = ViewportAdapter::new(config.initial_viewport);
        let session = SearchSession::new(viewport.page_size(), signals);
        let watcher = ResultsWatcher::new(session.results_revision());
        debug!(
            width = config.initial_viewport.width,
            page_size = %viewport.page_size(),
            "gallery mounted"
        );

        Self {
            provider,
            session,
            viewport,
            resize: hub.subscribe(),
            trigger: ScrollTrigger::new(config.small_screen_max_width),
            watcher,
            scroll_lock,
            zoom_scale: config.zoom_scale,
        }
    }

    /// Submit a new query.
    ///
    /// Pending resizes are applied first so the fetch uses the current page size.
    ///
    /// # Errors
    ///
    /// Local rejections (empty query, busy); provider failures settle as `Failed`.
    pub async fn submit(&mut self, text: &str) -> Result<SessionStatus, SessionError> {
        self.sync_viewport();
        self.session.submit_query(&self.provider, text).await
    }

    /// Fetch the next page of the active query.
    ///
    /// # Errors
    ///
    /// Local rejections (no active session, busy).
    pub async fn load_more(&mut self) -> Result<SessionStatus, SessionError> {
        self.sync_viewport();
        self.session.load_more(&self.provider).await
    }

    /// Apply a resize directly, bypassing the hub.
    pub fn on_resize(&mut self, size: ViewportSize) {
        if self.viewport.on_resize(size) {
            self.session.set_page_size(self.viewport.page_size());
        }
    }

    /// Drain resize events from the hub. Returns `true` if the page size changed.
    pub fn sync_viewport(&mut self) -> bool {
        let changed = self.viewport.pump(&self.resize);
        if changed {
            self.session.set_page_size(self.viewport.page_size());
        }
        changed
    }

    /// Called after each render with the current document height.
    ///
    /// Returns a scroll request exactly once per result-list change, and only
    /// if the scroll trigger allows it.
    pub fn after_render(&mut self, document_height: u32) -> Option<ScrollRequest> {
        self.sync_viewport();
        if !self.watcher.observe(self.session.results_revision()) {
            return None;
        }
        self.trigger.target(
            self.viewport.size(),
            document_height,
            self.viewport.scroll_offset(),
        )
    }

    /// Mount gallery items for the current results.
    pub fn mount_items(&self) -> Vec<GalleryItem> {
        self.session
            .results()
            .iter()
            .cloned()
            .map(|image| GalleryItem::new(image, self.scroll_lock.clone(), self.zoom_scale))
            .collect()
    }

    /// Whether the load-more button should be shown.
    pub fn shows_load_more(&self) -> bool {
        self.session.can_load_more()
    }

    /// Whether the full-screen busy indicator should be shown.
    pub fn shows_busy_indicator(&self) -> bool {
        self.session.is_busy()
    }

    /// The search session.
    pub fn session(&self) -> &SearchSession<K> {
        &self.session
    }

    /// Mutable access to the session, e.g. to drain signals.
    pub fn session_mut(&mut self) -> &mut SearchSession<K> {
        &mut self.session
    }

    /// Viewport state.
    pub fn viewport(&self) -> &ViewportAdapter {
        &self.viewport
    }

    /// Shared document scroll lock.
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}
