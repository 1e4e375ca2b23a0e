//! Core types - pure abstractions shared across the crate.

mod url;

pub use url::UrlPath;
