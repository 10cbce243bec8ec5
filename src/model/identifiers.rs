//! Core identifier newtypes with smart constructors.
//!
//! Pagination values are validated at construction time so the session
//! never has to re-check them. Raw constructors are never exported.

use serde::Deserialize;
use std::fmt;

/// Provider-assigned identifier of an image hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ImageId(u64);

impl ImageId {
    /// Wrap a provider id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Numeric value as sent by the provider.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based page index understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The provider's first page.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Smart constructor: rejects page zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPageNumber> {
        if raw == 0 {
            Err(InvalidPageNumber::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    /// Page that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw 1-based value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of hits requested per fetch. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(u32);

impl PageSize {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPageSize> {
        if raw == 0 {
            Err(InvalidPageSize::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    /// Const constructor for built-in tables. Zero fails const evaluation.
    pub(crate) const fn from_static(raw: u32) -> Self {
        assert!(raw > 0, "page size must be greater than zero");
        Self(raw)
    }

    /// Raw value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether a page holding `hit_count` hits is shorter than requested.
    ///
    /// A short page is how the provider signals the end of the result set.
    pub fn is_short(self, hit_count: usize) -> bool {
        hit_count < self.0 as usize
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated search text. Never empty or whitespace-only.
///
/// The original text (including surrounding whitespace) is preserved and
/// forwarded to the provider untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: returns `None` for empty or whitespace-only text.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Query text as submitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected page number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageNumber {
    /// Pages are 1-based.
    #[error("Page number must be at least 1")]
    Zero,
}

/// Rejected page size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    /// A fetch must request at least one hit.
    #[error("Page size must be greater than zero")]
    Zero,
}

// ===== Tests =====
