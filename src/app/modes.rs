//! Input mode and screen state types.
//!
//! # State Machine
//!
//! The screen moves between three states:
//!
//! ```text
//! Loading ──ok──▶ Success ──query/page──▶ Success
//!    │                │
//!    └──err──▶ Error ─┴─retry/refresh──▶ Loading
//! ```
//!
//! Independently, keyboard input is either navigating results or typing into
//! the search box.

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate pages and trigger commands.
    ///
    /// Available keybindings: / (search), h/l or arrows (page), digits (type a page number),
    /// r (retry), R (refresh), q (quit).
    Normal,

    /// Keys edit the search query; Enter returns to `Normal`, Esc clears.
    Search,
}

/// Which of the three top-level screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A fetch is outstanding.
    Loading,

    /// The collection is available for filtering and paging.
    Success,

    /// The last fetch failed; only retry is available.
    Error,
}
