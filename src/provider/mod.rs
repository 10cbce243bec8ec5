//! Search provider collaborator.
//!
//! The HTTP client that talks to the image-search backend lives outside this
//! crate. The core only needs an async "give me page N of size S for query Q"
//! function, expressed here as a trait so sessions can be driven by a real
//! client, a cache, or a scripted provider in tests.

use crate::model::{PageNumber, PageSize, ProviderError, ResultPage, SearchQuery};
use std::future::Future;

/// Async source of paginated image hits.
pub trait SearchProvider {
    /// Fetch one page of hits for `query`.
    ///
    /// Implementations report transport and HTTP failures as
    /// [`ProviderError`]; an empty page is a valid success.
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> impl Future<Output = Result<ResultPage, ProviderError>>;
}

impl<P: SearchProvider + ?Sized> SearchProvider for &P {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> impl Future<Output = Result<ResultPage, ProviderError>> {
        (**self).fetch_page(query, page, page_size)
    }
}
