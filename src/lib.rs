//! pixquery
//!
//! Headless core of an interactive image-search client: a paginated search
//! session with incremental "load more", page sizes adapted to the viewport,
//! auto-scroll to new content, and per-item full-image overlays.
//!
//! The crate follows a Pure Core / Impure Shell split. Everything here is
//! plain state plus async wrappers around a [`provider::SearchProvider`];
//! rendering, HTTP and notifications belong to the embedding application.

pub mod config;
pub mod logging;
pub mod model;
pub mod provider;
pub mod state;
pub mod viewport;

// Controller wiring the pieces together for a presentation layer
pub mod integration;

pub use integration::GalleryController;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
