//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod image;
pub mod page;

// Re-export for convenience
pub use error::{ProviderError, SessionError};
pub use identifiers::{ImageId, InvalidPageNumber, InvalidPageSize, PageNumber, PageSize, SearchQuery};
pub use image::Image;
pub use page::ResultPage;
