//! Viewport adaptation.
//!
//! Observes viewport size changes and derives the page size used for the
//! next fetch plus the scroll offset used by the auto-scroll trigger.
//! Handling a resize is idempotent and never touches the network.

pub mod breakpoints;
pub mod resize;

pub use breakpoints::{derive_policy, Breakpoint, OffsetRule, ViewportPolicy, WidthCondition, BREAKPOINTS};
pub use resize::{ResizeHub, ResizeSubscription, ViewportSize};

use crate::model::PageSize;
use tracing::debug;

/// Current viewport and the policy derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportAdapter {
    size: ViewportSize,
    policy: ViewportPolicy,
}

impl ViewportAdapter {
    /// Measure once at mount.
    pub fn new(initial: ViewportSize) -> Self {
        let policy = derive_policy(initial.width, ViewportPolicy::default().scroll_offset);
        Self {
            size: initial,
            policy,
        }
    }

    /// Apply a resize event.
    ///
    /// Returns `true` if the page size changed.
    pub fn on_resize(&mut self, size: ViewportSize) -> bool {
        let previous = self.policy;
        self.size = size;
        self.policy = derive_policy(size.width, previous.scroll_offset);

        let changed = previous.page_size != self.policy.page_size;
        if changed {
            debug!(
                width = size.width,
                page_size = %self.policy.page_size,
                scroll_offset = self.policy.scroll_offset,
                "viewport policy changed"
            );
        }
        changed
    }

    /// Drain pending events from `subscription`, applying only the latest.
    ///
    /// Returns `true` if the page size changed.
    pub fn pump(&mut self, subscription: &ResizeSubscription) -> bool {
        match subscription.latest() {
            Some(size) => self.on_resize(size),
            None => false,
        }
    }

    /// Last observed viewport size.
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Derived policy.
    pub fn policy(&self) -> ViewportPolicy {
        self.policy
    }

    /// Page size for the next fetch.
    pub fn page_size(&self) -> PageSize {
        self.policy.page_size
    }

    /// Offset kept below new content when auto-scrolling.
    pub fn scroll_offset(&self) -> u32 {
        self.policy.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_policy_from_initial_width() {
        let adapter = ViewportAdapter::new(ViewportSize::new(1500, 900));

        assert_eq!(adapter.page_size().get(), 12);
        assert_eq!(adapter.scroll_offset(), 145);
    }

    #[test]
    fn widest_mount_keeps_default_offset() {
        let adapter = ViewportAdapter::new(ViewportSize::new(2560, 1440));

        assert_eq!(adapter.page_size().get(), 16);
        assert_eq!(adapter.scroll_offset(), 120);
    }

    #[test]
    fn growing_past_1980_keeps_previous_offset() {
        let mut adapter = ViewportAdapter::new(ViewportSize::new(1000, 800));
        assert_eq!(adapter.scroll_offset(), 395);

        adapter.on_resize(ViewportSize::new(2000, 800));

        assert_eq!(adapter.page_size().get(), 16);
        assert_eq!(adapter.scroll_offset(), 395);
    }

    #[test]
    fn on_resize_reports_page_size_change_only() {
        let mut adapter = ViewportAdapter::new(ViewportSize::new(1000, 800));

        // 1000 -> 1500: page size stays 12, offset changes
        assert!(!adapter.on_resize(ViewportSize::new(1500, 800)));
        assert_eq!(adapter.scroll_offset(), 145);

        // 1500 -> 700: page size becomes 10
        assert!(adapter.on_resize(ViewportSize::new(700, 800)));
    }

    #[test]
    fn on_resize_is_idempotent() {
        let mut adapter = ViewportAdapter::new(ViewportSize::new(1000, 800));
        adapter.on_resize(ViewportSize::new(700, 600));
        let once = adapter;

        adapter.on_resize(ViewportSize::new(700, 600));

        assert_eq!(adapter, once);
    }

    #[test]
    fn pump_applies_latest_event_from_hub() {
        let hub = ResizeHub::new();
        let sub = hub.subscribe();
        let mut adapter = ViewportAdapter::new(ViewportSize::new(1000, 800));

        hub.publish(ViewportSize::new(1600, 900));
        hub.publish(ViewportSize::new(600, 900));

        assert!(adapter.pump(&sub));
        assert_eq!(adapter.size(), ViewportSize::new(600, 900));
        assert_eq!(adapter.page_size().get(), 10);
    }

    #[test]
    fn pump_without_events_changes_nothing() {
        let hub = ResizeHub::new();
        let sub = hub.subscribe();
        let mut adapter = ViewportAdapter::new(ViewportSize::new(1000, 800));

        assert!(!adapter.pump(&sub));
        assert_eq!(adapter.size(), ViewportSize::new(1000, 800));
    }
}
