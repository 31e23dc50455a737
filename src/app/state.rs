//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the browser
//! shows: the fetched collection, the last fetch error, the query, and the page
//! cursor. Filtering and paging are derived on demand from these fields, so
//! there is no cached filtered list that could drift from the query.
//!
//! # Derived State
//!
//! ```text
//! users ──filter(deferred query)──▶ filtered ──paginate(cursor, page_size)──▶ page
//! ```
//!
//! The cursor holds the page the user asked for. Reading it through
//! [`paginate`] clamps it into the current page range, which means a shrinking
//! result set silently moves the visible page without rewriting the cursor.
//!
//! # Example
//!
//! ```rust
//! use dirbrowse::app::AppState;
//! use dirbrowse::domain::{InitialSnapshot, User};
//! use dirbrowse::ui::Theme;
//! use std::time::Duration;
//!
//! let users = vec![User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona")];
//! let snapshot = InitialSnapshot { users, error: None };
//! let state = AppState::new(snapshot, 5, Duration::from_millis(150), Theme::default());
//! assert_eq!(state.total_pages(), 1);
//! ```

use super::deferred::DeferredQuery;
use super::modes::{InputMode, Screen};
use crate::directory::{filter_users, highlight, page_links, paginate, Page, PageCursor, DEFAULT_PAGE_SIZE};
use crate::domain::user::time_ago;
use crate::domain::{InitialSnapshot, User};
use crate::ui::helpers::format_count;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DisplayItem, EmptyState, ErrorPanel, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo,
    UIViewModel,
};
use std::borrow::Cow;
use std::time::Duration;

/// Central application state container.
///
/// Mutated only by [`handle_event`](super::handle_event). Owned by the event
/// loop; nothing else holds a reference across an await point.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Collection from the most recent successful fetch, in server order.
    pub users: Vec<User>,

    /// Whether a fetch that has not been superseded is outstanding.
    pub loading: bool,

    /// Message from the most recent failed fetch, cleared when a new one starts.
    pub error: Option<String>,

    /// Unix timestamp of the last successful fetch.
    pub fetched_at: Option<i64>,

    /// Query as typed and as last committed.
    pub query: DeferredQuery,

    /// Requested page, unclamped.
    pub cursor: PageCursor,

    /// Page number being typed digit by digit, 0 when none.
    pub page_entry: usize,

    /// Users per page, at least 1.
    pub page_size: usize,

    /// Delay between the last keystroke and the query commit.
    pub debounce: Duration,

    /// Where keystrokes go.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates state from a prefetched snapshot.
    ///
    /// With neither users nor an error in the snapshot the state starts out
    /// loading; `Event::Mount` then issues the first fetch.
    #[must_use]
    pub fn new(initial: InitialSnapshot, page_size: usize, debounce: Duration, theme: Theme) -> Self {
        let loading = initial.is_empty();
        let fetched_at = if initial.users.is_empty() {
            None
        } else {
            Some(chrono::Utc::now().timestamp())
        };

        Self {
            users: initial.users,
            loading,
            error: initial.error,
            fetched_at,
            query: DeferredQuery::default(),
            cursor: PageCursor::default(),
            page_entry: 0,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            debounce,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// `true` when nothing was supplied up front and no fetch has completed.
    #[must_use]
    pub fn needs_initial_fetch(&self) -> bool {
        self.users.is_empty() && self.error.is_none() && self.fetched_at.is_none()
    }

    /// Marks a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of the current fetch.
    ///
    /// A failure keeps the previous collection but hides it behind the error
    /// screen until a later fetch succeeds.
    pub fn finish_fetch(&mut self, outcome: Result<Vec<User>, String>) {
        match outcome {
            Ok(users) => {
                tracing::debug!(count = users.len(), "collection replaced");
                self.users = users;
                self.error = None;
                self.fetched_at = Some(chrono::Utc::now().timestamp());
            }
            Err(message) => {
                tracing::warn!(error = %message, "fetch failed");
                self.error = Some(message);
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        if self.loading {
            Screen::Loading
        } else if self.error.is_some() {
            Screen::Error
        } else {
            Screen::Success
        }
    }

    /// Users matching the committed query.
    #[must_use]
    pub fn filtered(&self) -> Cow<'_, [User]> {
        filter_users(&self.users, self.query.deferred())
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// The page actually displayed, after clamping the cursor.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.cursor.requested().clamp(1, self.total_pages().max(1))
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.cursor.next(total)
    }

    pub fn previous_page(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.cursor.go_to(page, total)
    }

    /// Extends the typed page number with `digit` and jumps to it.
    ///
    /// A digit that would overshoot the last page starts a new number, so
    /// `1`, `2` reaches page 12 while `1`, `5` on twelve pages lands on 5.
    pub fn type_page_digit(&mut self, digit: usize) -> bool {
        let total = self.total_pages();
        let extended = self.page_entry.saturating_mul(10).saturating_add(digit);
        let target = if (1..=total).contains(&extended) { extended } else { digit };

        if !(1..=total).contains(&target) {
            self.page_entry = 0;
            return false;
        }
        self.page_entry = target;
        self.go_to_page(target)
    }

    /// Catches the deferred query up with the typed one.
    ///
    /// Returns `true` if the query changed, in which case paging restarts at 1.
    pub fn commit_query(&mut self) -> bool {
        if !self.query.commit() {
            return false;
        }
        self.cursor.reset();
        tracing::debug!(query = self.query.deferred(), "query committed");
        true
    }

    /// Computes a renderable UI view model from the current state.
    ///
    /// Filtering, clamping, highlighting, and page-number compaction all happen
    /// here, so the view model always reflects the committed query.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.cursor.requested(), self.page_size);
        let screen = self.screen();

        let summary = match screen {
            Screen::Success if page.total_count > 0 => Some(Self::compute_summary(&page)),
            _ => None,
        };

        let body = match screen {
            Screen::Loading => Body::Loading,
            Screen::Error => Body::Error(ErrorPanel {
                message: self.error.clone().unwrap_or_default(),
                retry_hint: "press r to retry".to_string(),
            }),
            Screen::Success if page.items.is_empty() => Body::Empty(self.compute_empty_state()),
            Screen::Success => Body::Users {
                rows: page.items.iter().map(|user| self.compute_display_item(user)).collect(),
                dimmed: self.query.is_stale(),
                pagination: Self::compute_pagination(&page),
            },
        };

        UIViewModel {
            header: self.compute_header(screen),
            search_bar: SearchBarInfo {
                query: self.query.immediate().to_string(),
                focused: self.input_mode == InputMode::Search,
                stale: self.query.is_stale(),
            },
            summary,
            body,
            footer: self.compute_footer(screen),
        }
    }

    fn compute_display_item(&self, user: &User) -> DisplayItem {
        let query = self.query.deferred();
        DisplayItem {
            name: highlight(&user.name, query),
            email: highlight(&user.email, query),
            company: user.company.name.clone(),
        }
    }

    fn compute_summary(page: &Page<'_, User>) -> String {
        let noun = if page.total_count == 1 { "result" } else { "results" };
        let mut summary = format!("{} {noun}", format_count(page.total_count));
        if page.total_pages > 1 {
            summary.push_str(&format!(" • page {} of {}", page.current, page.total_pages));
        }
        summary
    }

    fn compute_empty_state(&self) -> EmptyState {
        let query = self.query.deferred();
        let message = if query.trim().is_empty() {
            "No users found".to_string()
        } else {
            format!("No results for \"{query}\"")
        };
        EmptyState { message }
    }

    fn compute_pagination(page: &Page<'_, User>) -> Option<PaginationInfo> {
        if page.total_pages <= 1 {
            return None;
        }
        Some(PaginationInfo {
            links: page_links(page.current, page.total_pages),
            current: page.current,
            total_pages: page.total_pages,
            has_previous: page.current > 1,
            has_next: page.current < page.total_pages,
        })
    }

    fn compute_header(&self, screen: Screen) -> HeaderInfo {
        let subtitle = match screen {
            Screen::Loading => "loading…".to_string(),
            Screen::Error => "fetch failed".to_string(),
            Screen::Success => {
                let count = format_count(self.users.len());
                match self.fetched_at {
                    Some(at) => format!("{count} users • updated {}", time_ago(at)),
                    None => format!("{count} users"),
                }
            }
        };
        HeaderInfo {
            title: " User Directory ".to_string(),
            subtitle,
        }
    }

    fn compute_footer(&self, screen: Screen) -> FooterInfo {
        let keybindings = match (self.input_mode, screen) {
            (InputMode::Search, _) => "Type to filter  Enter: done  Esc: clear",
            (InputMode::Normal, Screen::Error) => "r: retry  R: refresh  q: quit",
            (InputMode::Normal, Screen::Loading) => "R: restart  q: quit",
            (InputMode::Normal, Screen::Success) => {
                "/: search  h/l: page  0-9: type page  Esc: clear  R: refresh  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
