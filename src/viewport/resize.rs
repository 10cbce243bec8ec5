//! Process-wide resize event hub.
//!
//! The presentation layer publishes every window resize here. Components
//! subscribe when they mount and the returned [`ResizeSubscription`]
//! deregisters itself when dropped, so the listener's lifetime is exactly
//! the component's.

use std::sync::mpsc::{self, Receiver, Sender, TryIter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportSize {
    /// Inner width.
    pub width: u32,
    /// Inner height.
    pub height: u32,
}

impl ViewportSize {
    /// Build a size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, Sender<ViewportSize>)>,
}

/// Broadcasts resize events to all live subscriptions.
///
/// Cloning yields another handle to the same hub.
#[derive(Debug, Clone, Default)]
pub struct ResizeHub {
    inner: Arc<Mutex<Subscribers>>,
}

impl ResizeHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Dropping the subscription deregisters it.
    pub fn subscribe(&self) -> ResizeSubscription {
        let (tx, rx) = mpsc::channel();
        let mut subs = self.lock();
        subs.next_id += 1;
        let id = subs.next_id;
        subs.senders.push((id, tx));
        trace!(id, "resize listener registered");
        ResizeSubscription {
            id,
            receiver: rx,
            hub: self.clone(),
        }
    }

    /// Deliver `size` to every subscriber. Returns how many received it.
    pub fn publish(&self, size: ViewportSize) -> usize {
        let mut subs = self.lock();
        subs.senders.retain(|(_, tx)| tx.send(size).is_ok());
        subs.senders.len()
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.lock().senders.len()
    }

    fn unsubscribe(&self, id: u64) {
        self.lock().senders.retain(|(sub_id, _)| *sub_id != id);
        trace!(id, "resize listener deregistered");
    }

    fn lock(&self) -> MutexGuard<'_, Subscribers> {
        // The subscriber list stays consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Scoped registration with a [`ResizeHub`].
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    receiver: Receiver<ViewportSize>,
    hub: ResizeHub,
}

impl ResizeSubscription {
    /// Pending resize events, oldest first, without blocking.
    pub fn pending(&self) -> TryIter<'_, ViewportSize> {
        self.receiver.try_iter()
    }

    /// Most recent pending size, discarding older ones.
    pub fn latest(&self) -> Option<ViewportSize> {
        self.pending().last()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
