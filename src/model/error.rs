//! Error types for the search core.
//!
//! Two families, kept deliberately apart:
//!
//! - [`ProviderError`] - failures surfaced by the fetch collaborator. The
//!   session recovers from these locally (status becomes `Failed`, an error
//!   signal is emitted); they never propagate past the session boundary.
//! - [`SessionError`] - local rejections of a request before any fetch is
//!   issued. These leave the session untouched and emit no signal.
//!
//! Empty result sets and exhausted pagination are not errors at all; they are
//! normal terminal states of the session.

use thiserror::Error;

/// Failure reported by the search provider client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded into a result page.
    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// Request rejected by the session before reaching the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Submitted text was empty or whitespace-only.
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// A fetch is already in flight; at most one is allowed at a time.
    #[error("A fetch is already in flight")]
    Busy,

    /// Load-more was requested without an active paginated session.
    #[error("No active search to load more results for")]
    NoActiveSession,
}
