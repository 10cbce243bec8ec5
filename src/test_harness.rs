//! Test harness: scripted provider and hit fixtures.
//!
//! `ScriptedProvider` answers fetches from a queue of canned responses and
//! records every call so tests can assert on the exact page/size requested.

use crate::model::{
    Image, ImageId, PageNumber, PageSize, ProviderError, ResultPage, SearchQuery,
};
use crate::provider::SearchProvider;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One recorded `fetch_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

/// Provider that replays queued responses in order.
///
/// Once the queue runs dry every fetch returns an empty page.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responses: RefCell<VecDeque<Result<ResultPage, ProviderError>>>,
    calls: RefCell<Vec<FetchCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page holding `count` hits with ids starting at `first_id`.
    pub fn then_hits(self, first_id: u64, count: usize) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(page_of(first_id, count)));
        self
    }

    /// Queue a provider failure.
    pub fn then_error(self, err: ProviderError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.borrow().clone()
    }
}

impl SearchProvider for ScriptedProvider {
    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> Result<ResultPage, ProviderError> {
        self.calls.borrow_mut().push(FetchCall {
            query: query.as_str().to_string(),
            page: page.get(),
            page_size: page_size.get(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ResultPage::default()))
    }
}

// ===== Fixtures =====

/// `count` images with consecutive ids starting at `first_id`.
pub fn images(first_id: u64, count: usize) -> Vec<Image> {
    (first_id..first_id + count as u64)
        .map(|id| {
            Image::new(
                ImageId::new(id),
                format!("https://cdn.example/{id}_640.jpg"),
                format!("https://cdn.example/{id}_1280.jpg"),
            )
        })
        .collect()
}

/// A result page of `count` images; total hits set to 500.
pub fn page_of(first_id: u64, count: usize) -> ResultPage {
    ResultPage::new(images(first_id, count), 500)
}

pub fn page_size(raw: u32) -> PageSize {
    PageSize::new(raw).expect("valid page size")
}

pub fn page_number(raw: u32) -> PageNumber {
    PageNumber::new(raw).expect("valid page number")
}

/// Ids of `results`, in order.
pub fn ids(results: &[Image]) -> Vec<u64> {
    results.iter().map(|image| image.id.get()).collect()
}
