//! Background fetching with last-request-wins semantics.
//!
//! # Architecture
//!
//! - `messages`: responses posted back to the event loop, tagged by generation
//! - `handler`: [`FetchController`] and the one-shot [`prefetch`] step

pub mod handler;
pub mod messages;

pub use handler::{prefetch, FetchController};
pub use messages::{FetchResponse, Generation};
