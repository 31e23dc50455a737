//! Remote directory sources.
//!
//! - `backend`: the [`DirectorySource`] trait
//! - `http`: [`HttpSource`], a GET against a fixed JSON endpoint

pub mod backend;
pub mod http;

pub use backend::DirectorySource;
pub use http::{HttpSource, DEFAULT_ENDPOINT};
