//! Reference-counted document scroll lock.
//!
//! Any number of overlays may be open at once. Document scrolling stays
//! disabled while at least one [`ScrollLockGuard`] is alive, so closing one
//! overlay never re-enables scrolling under another.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Shared scroll-disable switch. Cloning yields another handle to the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    /// Create an unlocked switch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold on the lock. Scrolling is re-enabled when every guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(holders, "scroll lock acquired");
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether document scrolling is currently disabled.
    pub fn is_scroll_disabled(&self) -> bool {
        self.holder_count() > 0
    }

    /// Number of live guards.
    pub fn holder_count(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// Hold on a [`ScrollLock`]; releases on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.fetch_sub(1, Ordering::AcqRel) - 1;
        trace!(holders, "scroll lock released");
    }
}
