//! Fire-and-forget notifications emitted by the search session.
//!
//! Every terminal transition of a fetch emits exactly one signal. The
//! presentation layer turns them into toasts; the core does not care how.

use std::sync::mpsc;

/// Outcome notification for a single fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchSignal {
    /// A new query returned at least one hit.
    SearchSuccess,
    /// A new query returned no hits at all.
    SearchEmpty,
    /// A new query failed at the provider.
    SearchError,
    /// A full page was appended.
    LoadMoreSuccess,
    /// A short or empty page was appended; no further pages exist.
    LoadMoreExhausted,
    /// Fetching the next page failed at the provider.
    LoadMoreError,
}

impl SearchSignal {
    /// Whether this signal reports a provider failure.
    pub fn is_error(self) -> bool {
        matches!(self, Self::SearchError | Self::LoadMoreError)
    }

    /// Short user-facing message for toast-style presentation.
    pub fn message(self) -> &'static str {
        match self {
            Self::SearchSuccess => "Images found",
            Self::SearchEmpty => "No images match your search",
            Self::SearchError => "Search failed, please try again",
            Self::LoadMoreSuccess => "More images loaded",
            Self::LoadMoreExhausted => "You've reached the end of the results",
            Self::LoadMoreError => "Could not load more images",
        }
    }
}

/// Receiver of session signals.
pub trait SignalSink {
    /// Deliver one signal. Must not fail or block the caller.
    fn emit(&mut self, signal: SearchSignal);
}

impl SignalSink for Vec<SearchSignal> {
    fn emit(&mut self, signal: SearchSignal) {
        self.push(signal);
    }
}

impl SignalSink for mpsc::Sender<SearchSignal> {
    fn emit(&mut self, signal: SearchSignal) {
        // A closed receiver means nobody is listening; notifications must
        // never break the session.
        let _ = self.send(signal);
    }
}

impl<S: SignalSink + ?Sized> SignalSink for &mut S {
    fn emit(&mut self, signal: SearchSignal) {
        (**self).emit(signal);
    }
}
