//! Search and gallery state machines (pure).
//!
//! All state transitions are plain methods testable without a UI; the only
//! suspension points are the async session wrappers awaiting the provider.

pub mod overlay;
pub mod scroll_lock;
pub mod scroll_trigger;
pub mod session;
pub mod signals;

// Re-export for convenience
pub use overlay::{
    ClickTarget, GalleryItem, OverlayKey, OverlayState, ZoomCursor, ZoomStyle, DEFAULT_ZOOM_SCALE,
};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use scroll_trigger::{
    scrollable_distance, ResultsWatcher, ScrollBehavior, ScrollRequest, ScrollTrigger,
    SMALL_SCREEN_MAX_WIDTH,
};
pub use session::{Completion, FetchKind, FetchTicket, SearchSession, SessionStatus, SessionView};
pub use signals::{SearchSignal, SignalSink};
