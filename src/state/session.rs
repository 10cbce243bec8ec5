//! Search session state machine.
//!
//! SearchSession is the sole owner and mutator of pagination state:
//!
//! ```text
//! Idle --submit--> Loading --hits--> Ready --load_more--> Loading --full page--> Ready
//!                  Loading --empty/short page--> Exhausted
//!                  Loading --provider error--> Failed
//! Ready | Exhausted | Failed --submit--> Loading
//! ```
//!
//! Fetching is split in two phases so an event-loop shell can run the fetch
//! wherever it likes: `begin_*` validates the request, moves to `Loading` and
//! hands out a [`FetchTicket`]; `complete` applies the provider's answer for
//! that ticket. Only the most recently issued ticket is accepted, so a late
//! answer for a superseded request is discarded. The async `submit_query` and
//! `load_more` wrappers run both phases around a [`SearchProvider`].

use crate::model::{
    Image, PageNumber, PageSize, ProviderError, ResultPage, SearchQuery, SessionError,
};
use crate::provider::SearchProvider;
use crate::state::signals::{SearchSignal, SignalSink};
use tracing::{debug, info, warn};

// ===== SessionStatus =====

/// Lifecycle of the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// Nothing searched yet (or the session was reset).
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Results are shown and more pages may exist.
    Ready,
    /// The provider has no more results for the current query.
    Exhausted,
    /// The last fetch failed at the provider.
    Failed,
}

impl SessionStatus {
    /// Whether paging has terminated for the current query.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }
}

// ===== FetchTicket =====

/// Which operation issued a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    /// First page of a newly submitted query.
    Search,
    /// A follow-up page for the active query.
    LoadMore,
}

/// Everything needed to perform one fetch, plus the token identifying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    request_id: u64,
    kind: FetchKind,
    query: SearchQuery,
    page: PageNumber,
    page_size: PageSize,
}

impl FetchTicket {
    /// Monotonically increasing request token.
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Operation that issued this fetch.
    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    /// Query to send to the provider.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Page to request.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Page size captured when the fetch began.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }
}

/// Result of handing a provider answer back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The answer was applied; the session settled in this status.
    Applied(SessionStatus),
    /// The ticket was superseded or already settled; nothing changed.
    Stale,
}

// ===== SessionView =====

/// Read-only snapshot for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView<'a> {
    /// Accumulated hits for the current query.
    pub results: &'a [Image],
    /// Current lifecycle status.
    pub status: SessionStatus,
    /// Next page to fetch, `None` when no paginated session is active.
    pub page: Option<PageNumber>,
}

// ===== SearchSession =====

/// Owner of query, cursor, page size and accumulated results.
#[derive(Debug)]
pub struct SearchSession<K: SignalSink = Vec<SearchSignal>> {
    query: Option<SearchQuery>,
    cursor: Option<PageNumber>,
    page_size: PageSize,
    results: Vec<Image>,
    status: SessionStatus,
    total_hits: u64,
    last_request_id: u64,
    in_flight: Option<u64>,
    results_revision: u64,
    signals: K,
}

impl SearchSession<Vec<SearchSignal>> {
    /// Create an idle session that records signals for the caller to drain.
    pub fn recording(page_size: PageSize) -> Self {
        Self::new(page_size, Vec::new())
    }

    /// Take all signals recorded so far.
    pub fn drain_signals(&mut self) -> Vec<SearchSignal> {
        std::mem::take(&mut self.signals)
    }
}

impl<K: SignalSink> SearchSession<K> {
    /// Create an idle session.
    pub fn new(page_size: PageSize, signals: K) -> Self {
        Self {
            query: None,
            cursor: None,
            page_size,
            results: Vec::new(),
            status: SessionStatus::Idle,
            total_hits: 0,
            last_request_id: 0,
            in_flight: None,
            results_revision: 0,
            signals,
        }
    }

    // ===== Accessors =====

    /// Last submitted query, if any.
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Next page to fetch. `None` means no active paginated session.
    pub fn cursor(&self) -> Option<PageNumber> {
        self.cursor
    }

    /// Page size used for the next fetch.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Accumulated hits for the current query.
    pub fn results(&self) -> &[Image] {
        &self.results
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Total hit count the provider reported for the current query.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Counter bumped every time the result list is replaced or extended.
    ///
    /// Consumers compare it against the last value they saw to detect new
    /// content (see [`crate::state::ResultsWatcher`]).
    pub fn results_revision(&self) -> u64 {
        self.results_revision
    }

    /// Whether a fetch is in flight (drives the busy indicator).
    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// Whether a load-more request would be accepted right now.
    pub fn can_load_more(&self) -> bool {
        self.cursor.is_some() && !self.is_busy()
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            results: &self.results,
            status: self.status,
            page: self.cursor,
        }
    }

    /// Signal sink.
    pub fn signals(&self) -> &K {
        &self.signals
    }

    /// Mutable signal sink, e.g. to drain recorded signals.
    pub fn signals_mut(&mut self) -> &mut K {
        &mut self.signals
    }

    // ===== Mutators =====

    /// Change the page size for subsequent fetches.
    ///
    /// Results already fetched and any in-flight ticket are unaffected.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        if page_size != self.page_size {
            debug!(from = %self.page_size, to = %page_size, "page size changed");
            self.page_size = page_size;
        }
    }

    /// Start a new search for `text`.
    ///
    /// Clears results, points the cursor at the first page and moves to
    /// `Loading`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::EmptyQuery`] if `text` is empty or whitespace-only
    /// - [`SessionError::Busy`] if a fetch is already in flight
    ///
    /// Neither rejection changes any state.
    pub fn begin_query(&mut self, text: &str) -> Result<FetchTicket, SessionError> {
        let query = SearchQuery::new(text).ok_or(SessionError::EmptyQuery)?;
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        self.status = SessionStatus::Loading;
        self.results.clear();
        self.bump_revision();
        self.cursor = Some(PageNumber::FIRST);
        self.total_hits = 0;
        self.query = Some(query.clone());

        let ticket = self.issue(FetchKind::Search, query, PageNumber::FIRST);
        debug!(
            request_id = ticket.request_id,
            query = %ticket.query,
            page_size = %ticket.page_size,
            "search started"
        );
        Ok(ticket)
    }

    /// Start fetching the page the cursor points at.
    ///
    /// Existing results stay visible while loading.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Busy`] if a fetch is already in flight
    /// - [`SessionError::NoActiveSession`] if the cursor is unset
    pub fn begin_load_more(&mut self) -> Result<FetchTicket, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        let (Some(page), Some(query)) = (self.cursor, self.query.clone()) else {
            return Err(SessionError::NoActiveSession);
        };

        self.status = SessionStatus::Loading;

        let ticket = self.issue(FetchKind::LoadMore, query, page);
        debug!(
            request_id = ticket.request_id,
            page = %ticket.page,
            page_size = %ticket.page_size,
            "load more started"
        );
        Ok(ticket)
    }

    /// Apply the provider's answer for `ticket`.
    ///
    /// Answers for anything but the in-flight ticket are discarded and
    /// reported as [`Completion::Stale`]. Otherwise exactly one signal is
    /// emitted and the session settles in `Ready`, `Exhausted` or `Failed`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<ResultPage, ProviderError>,
    ) -> Completion {
        if self.in_flight != Some(ticket.request_id) {
            warn!(
                request_id = ticket.request_id,
                in_flight = ?self.in_flight,
                "discarding stale provider response"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        match ticket.kind {
            FetchKind::Search => self.settle_search(&ticket, outcome),
            FetchKind::LoadMore => self.settle_load_more(&ticket, outcome),
        }

        Completion::Applied(self.status)
    }

    /// Drop the current search and return to `Idle`.
    ///
    /// Any in-flight ticket becomes stale.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.query = None;
        self.cursor = None;
        self.status = SessionStatus::Idle;
        self.total_hits = 0;
        if !self.results.is_empty() {
            self.results.clear();
            self.bump_revision();
        }
        debug!("session reset");
    }

    // ===== Async wrappers =====

    /// Submit `text` and wait for the first page.
    ///
    /// Provider failures are absorbed into `Failed` status; the returned
    /// status is where the session settled.
    ///
    /// # Errors
    ///
    /// Local rejections from [`SearchSession::begin_query`].
    pub async fn submit_query<P: SearchProvider>(
        &mut self,
        provider: &P,
        text: &str,
    ) -> Result<SessionStatus, SessionError> {
        let ticket = self.begin_query(text)?;
        let outcome = provider
            .fetch_page(&ticket.query, ticket.page, ticket.page_size)
            .await;
        self.complete(ticket, outcome);
        Ok(self.status)
    }

    /// Fetch the next page and wait for it.
    ///
    /// # Errors
    ///
    /// Local rejections from [`SearchSession::begin_load_more`].
    pub async fn load_more<P: SearchProvider>(
        &mut self,
        provider: &P,
    ) -> Result<SessionStatus, SessionError> {
        let ticket = self.begin_load_more()?;
        let outcome = provider
            .fetch_page(&ticket.query, ticket.page, ticket.page_size)
            .await;
        self.complete(ticket, outcome);
        Ok(self.status)
    }

    // ===== Internals =====

    fn issue(&mut self, kind: FetchKind, query: SearchQuery, page: PageNumber) -> FetchTicket {
        self.last_request_id += 1;
        self.in_flight = Some(self.last_request_id);
        FetchTicket {
            request_id: self.last_request_id,
            kind,
            query,
            page,
            page_size: self.page_size,
        }
    }

    fn settle_search(&mut self, ticket: &FetchTicket, outcome: Result<ResultPage, ProviderError>) {
        match outcome {
            Ok(page) if page.is_empty() => {
                self.total_hits = page.total_hits;
                self.cursor = None;
                self.status = SessionStatus::Exhausted;
                info!(query = %ticket.query, "search returned no results");
                self.signals.emit(SearchSignal::SearchEmpty);
            }
            Ok(page) => {
                self.total_hits = page.total_hits;
                self.results = page.hits;
                self.bump_revision();
                self.cursor = Some(ticket.page.next());
                self.status = SessionStatus::Ready;
                info!(
                    query = %ticket.query,
                    hits = self.results.len(),
                    total_hits = self.total_hits,
                    "search succeeded"
                );
                self.signals.emit(SearchSignal::SearchSuccess);
            }
            Err(err) => {
                self.cursor = None;
                self.status = SessionStatus::Failed;
                warn!(query = %ticket.query, error = %err, "search failed");
                self.signals.emit(SearchSignal::SearchError);
            }
        }
    }

    fn settle_load_more(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ResultPage, ProviderError>,
    ) {
        match outcome {
            Ok(page) => {
                let hit_count = page.len();
                let short = ticket.page_size.is_short(hit_count);
                if hit_count > 0 {
                    self.results.extend(page.hits);
                    self.bump_revision();
                }

                if short {
                    self.cursor = None;
                    self.status = SessionStatus::Exhausted;
                    info!(
                        page = %ticket.page,
                        hits = hit_count,
                        total = self.results.len(),
                        "results exhausted"
                    );
                    self.signals.emit(SearchSignal::LoadMoreExhausted);
                } else {
                    self.cursor = Some(ticket.page.next());
                    self.status = SessionStatus::Ready;
                    info!(
                        page = %ticket.page,
                        hits = hit_count,
                        total = self.results.len(),
                        "page appended"
                    );
                    self.signals.emit(SearchSignal::LoadMoreSuccess);
                }
            }
            Err(err) => {
                // Paging ends even on a transient error; a fresh submit restarts it.
                self.cursor = None;
                self.status = SessionStatus::Failed;
                warn!(page = %ticket.page, error = %err, "load more failed");
                self.signals.emit(SearchSignal::LoadMoreError);
            }
        }
    }

    fn bump_revision(&mut self) {
        self.results_revision = self.results_revision.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
