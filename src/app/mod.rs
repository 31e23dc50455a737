//! Application layer coordinating state, events, and actions.
//!
//! Sits between the terminal event loop (main.rs) and the directory, source and
//! worker layers.
//!
//! ```text
//! Keys / timers → Event → handle_event → AppState → Action → event loop
//!                            ↑                                   │
//!                            └──────── FetchCompleted ◀──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`deferred`]: Immediate and debounced copies of the search query
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and screen state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod deferred;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use deferred::DeferredQuery;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Screen};
pub use state::AppState;
