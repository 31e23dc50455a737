//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: highlight segments are already split,
//! page numbers already compacted, counts already formatted.

use crate::directory::{PageLink, Segment};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search input box.
    pub search_bar: SearchBarInfo,

    /// Result count line under the search box, if any.
    pub summary: Option<String>,

    /// Main area: spinner, error panel, empty message, or the user table.
    pub body: Body,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A fetch is in flight.
    Loading,

    /// The last fetch failed.
    Error(ErrorPanel),

    /// The current page has no users.
    Empty(EmptyState),

    /// One page of users.
    Users {
        rows: Vec<DisplayItem>,
        /// Rendered with reduced emphasis while the query is stale.
        dimmed: bool,
        /// Present only when there is more than one page.
        pagination: Option<PaginationInfo>,
    },
}

/// Display information for a single user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Name split around query matches.
    pub name: Vec<Segment>,

    /// Email split around query matches.
    pub email: Vec<Segment>,

    /// Company name, never highlighted.
    pub company: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search  n/p: page  q: quit").
    pub keybindings: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query as typed.
    pub query: String,

    /// Whether keystrokes currently go to the search box.
    pub focused: bool,

    /// Whether results still reflect an older query.
    pub stale: bool,
}

/// Error panel display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
    pub retry_hint: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Page navigation display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub links: Vec<PageLink>,
    pub current: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}
