//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler stays free of I/O: it mutates [`AppState`](super::AppState)
//! and returns the effects it wants as a `Vec<Action>`, which the binary's event
//! loop executes in order.
//!
//! # Example
//!
//! ```rust
//! use dirbrowse::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleQueryCommit(Duration::from_millis(150))];
//! assert_ne!(actions[0], Action::Fetch);
//! ```

use std::time::Duration;

/// Commands for the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a fetch through the controller, superseding any request in flight.
    ///
    /// The state has already been switched to loading when this is emitted.
    Fetch,

    /// (Re)arm the debounce timer; when it fires, dispatch
    /// [`Event::CommitQuery`](super::Event::CommitQuery).
    ///
    /// A later schedule replaces an earlier one that has not fired yet.
    ScheduleQueryCommit(Duration),

    /// Leave the event loop and restore the terminal.
    Quit,
}
