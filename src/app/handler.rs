//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes. It never performs
//! I/O: anything that needs the network or a timer is returned as an
//! [`Action`] for the event loop to carry out.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Resize`, `Quit`
//! - **Search**: `SearchMode`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`,
//!   `CommitQuery`
//! - **Paging**: `NextPage`, `PreviousPage`, `GoToPage`, `PageDigit`
//! - **Fetching**: `Retry`, `Refresh`, `FetchCompleted`
//!
//! # Example
//!
//! ```rust
//! use dirbrowse::app::{handle_event, Action, AppState, Event};
//! use dirbrowse::domain::InitialSnapshot;
//! use dirbrowse::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(
//!     InitialSnapshot::default(),
//!     5,
//!     Duration::from_millis(150),
//!     Theme::default(),
//! );
//! let (render, actions) = handle_event(&mut state, &Event::Mount);
//! assert!(render);
//! assert_eq!(actions, vec![Action::Fetch]);
//! ```

use super::modes::{InputMode, Screen};
use crate::app::{Action, AppState};
use crate::domain::User;

/// Events triggered by user input, timers, or fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The UI is about to draw for the first time.
    Mount,
    /// Terminal dimensions changed.
    Resize,
    /// Focuses the search box.
    SearchMode,
    /// Leaves the search box, keeping the query.
    FocusResults,
    /// Clears the query and leaves the search box.
    ExitSearch,
    /// Appends a character to the typed query.
    Char(char),
    /// Removes the last character from the typed query.
    Backspace,
    /// The debounce interval elapsed; derived state catches up with the query.
    CommitQuery,
    NextPage,
    PreviousPage,
    /// Jumps to a 1-based page number.
    GoToPage(usize),
    /// One digit of a page number typed from the keyboard.
    PageDigit(usize),
    /// Repeats a failed fetch. Ignored unless an error is shown.
    Retry,
    /// Fetches again regardless of the current screen.
    Refresh,
    /// The current fetch resolved. Superseded fetches never arrive here.
    FetchCompleted(Result<Vec<User>, String>),
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the state changed in a way that needs a redraw.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_kind(event)).entered();

    if !matches!(event, Event::PageDigit(_) | Event::Resize) {
        state.page_entry = 0;
    }

    match event {
        Event::Mount => {
            if state.needs_initial_fetch() {
                tracing::debug!("no initial data, fetching");
                state.begin_fetch();
                (true, vec![Action::Fetch])
            } else {
                (true, vec![])
            }
        }
        Event::Resize => (true, vec![]),
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Normal;
            state.commit_query();
            (true, vec![])
        }
        Event::ExitSearch => {
            tracing::debug!(query = state.query.immediate(), "clearing search");
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.commit_query();
            (true, vec![])
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return (false, vec![]);
            }
            state.query.push(*c);
            tracing::trace!(query = state.query.immediate(), "search query updated");
            (true, vec![Action::ScheduleQueryCommit(state.debounce)])
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || !state.query.pop() {
                return (false, vec![]);
            }
            (true, vec![Action::ScheduleQueryCommit(state.debounce)])
        }
        Event::CommitQuery => (state.commit_query(), vec![]),
        Event::NextPage => {
            if state.screen() != Screen::Success {
                return (false, vec![]);
            }
            (state.next_page(), vec![])
        }
        Event::PreviousPage => {
            if state.screen() != Screen::Success {
                return (false, vec![]);
            }
            (state.previous_page(), vec![])
        }
        Event::GoToPage(page) => {
            if state.screen() != Screen::Success {
                return (false, vec![]);
            }
            (state.go_to_page(*page), vec![])
        }
        Event::PageDigit(digit) => {
            if state.screen() != Screen::Success {
                return (false, vec![]);
            }
            (state.type_page_digit(*digit), vec![])
        }
        Event::Retry => {
            if state.screen() != Screen::Error {
                tracing::debug!("retry ignored without an error");
                return (false, vec![]);
            }
            state.begin_fetch();
            (true, vec![Action::Fetch])
        }
        Event::Refresh => {
            state.begin_fetch();
            (true, vec![Action::Fetch])
        }
        Event::FetchCompleted(outcome) => {
            state.finish_fetch(outcome.clone());
            (true, vec![])
        }
        Event::Quit => (false, vec![Action::Quit]),
    }
}

/// Event name without payload, so spans never carry a whole collection.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Mount => "mount",
        Event::Resize => "resize",
        Event::SearchMode => "search_mode",
        Event::FocusResults => "focus_results",
        Event::ExitSearch => "exit_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::CommitQuery => "commit_query",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::GoToPage(_) => "go_to_page",
        Event::PageDigit(_) => "page_digit",
        Event::Retry => "retry",
        Event::Refresh => "refresh",
        Event::FetchCompleted(_) => "fetch_completed",
        Event::Quit => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InitialSnapshot;
    use crate::ui::Theme;
    use std::time::Duration;

    const DEBOUNCE: Duration = Duration::from_millis(150);

    fn users(count: i64) -> Vec<User> {
        (1..=count)
            .map(|i| User::new(i, format!("U{i}"), format!("u{i}@x.io"), "Acme"))
            .collect()
    }

    fn state_with(snapshot: InitialSnapshot) -> AppState {
        AppState::new(snapshot, 5, DEBOUNCE, Theme::default())
    }

    fn loaded(count: i64) -> AppState {
        state_with(InitialSnapshot {
            users: users(count),
            error: None,
        })
    }

    #[test]
    fn mount_fetches_only_without_initial_data() {
        let mut empty = state_with(InitialSnapshot::default());
        assert_eq!(handle_event(&mut empty, &Event::Mount), (true, vec![Action::Fetch]));
        assert!(empty.loading);

        let mut prefetched = loaded(3);
        assert_eq!(handle_event(&mut prefetched, &Event::Mount), (true, vec![]));
        assert!(!prefetched.loading);

        let mut failed = state_with(InitialSnapshot {
            users: vec![],
            error: Some("Error fetching data: 500".to_string()),
        });
        assert_eq!(handle_event(&mut failed, &Event::Mount), (true, vec![]));
    }

    #[test]
    fn typing_schedules_a_commit_and_commit_resets_page() {
        let mut state = loaded(12);
        handle_event(&mut state, &Event::GoToPage(3));
        handle_event(&mut state, &Event::SearchMode);

        let (render, actions) = handle_event(&mut state, &Event::Char('u'));
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleQueryCommit(DEBOUNCE)]);
        assert_eq!(state.cursor.requested(), 3);

        handle_event(&mut state, &Event::Char('1'));
        let (render, _) = handle_event(&mut state, &Event::CommitQuery);
        assert!(render);
        assert_eq!(state.cursor.requested(), 1);
        assert_eq!(state.filtered().len(), 4);

        let (render, _) = handle_event(&mut state, &Event::CommitQuery);
        assert!(!render);
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = loaded(3);
        assert_eq!(handle_event(&mut state, &Event::Char('x')), (false, vec![]));
        assert_eq!(state.query.immediate(), "");
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        let mut state = loaded(3);
        handle_event(&mut state, &Event::SearchMode);
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
    }

    #[test]
    fn escape_clears_and_commits_immediately() {
        let mut state = loaded(12);
        handle_event(&mut state, &Event::SearchMode);
        handle_event(&mut state, &Event::Char('u'));
        handle_event(&mut state, &Event::Char('1'));
        handle_event(&mut state, &Event::CommitQuery);

        handle_event(&mut state, &Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.deferred(), "");
        assert!(!state.query.is_stale());
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn enter_keeps_the_query() {
        let mut state = loaded(12);
        handle_event(&mut state, &Event::SearchMode);
        handle_event(&mut state, &Event::Char('u'));
        handle_event(&mut state, &Event::Char('2'));

        handle_event(&mut state, &Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.deferred(), "u2");
    }

    #[test]
    fn out_of_range_page_requests_are_silent() {
        let mut state = loaded(12);
        assert_eq!(handle_event(&mut state, &Event::GoToPage(0)), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::GoToPage(4)), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::GoToPage(1)), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::PreviousPage), (false, vec![]));

        assert_eq!(handle_event(&mut state, &Event::GoToPage(3)), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextPage), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::PreviousPage), (true, vec![]));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn typed_digits_reach_pages_past_nine() {
        let mut state = loaded(60);
        assert_eq!(handle_event(&mut state, &Event::PageDigit(1)), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::PageDigit(2)), (true, vec![]));
        assert_eq!(state.current_page(), 12);

        assert_eq!(handle_event(&mut state, &Event::PageDigit(5)), (true, vec![]));
        assert_eq!(state.current_page(), 5);

        handle_event(&mut state, &Event::PageDigit(1));
        handle_event(&mut state, &Event::PageDigit(0));
        assert_eq!(state.current_page(), 10);
    }

    #[test]
    fn other_keys_end_the_typed_page_number() {
        let mut state = loaded(60);
        handle_event(&mut state, &Event::PageDigit(1));
        handle_event(&mut state, &Event::NextPage);
        assert_eq!(state.current_page(), 2);

        handle_event(&mut state, &Event::PageDigit(2));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.page_entry, 2);

        assert_eq!(handle_event(&mut state, &Event::PageDigit(0)), (false, vec![]));
        assert_eq!(state.page_entry, 0);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn paging_is_disabled_while_loading() {
        let mut state = loaded(12);
        handle_event(&mut state, &Event::Refresh);
        assert_eq!(handle_event(&mut state, &Event::NextPage), (false, vec![]));
        assert_eq!(state.cursor.requested(), 1);
    }

    #[test]
    fn retry_only_applies_to_the_error_screen() {
        let mut state = loaded(3);
        assert_eq!(handle_event(&mut state, &Event::Retry), (false, vec![]));

        handle_event(&mut state, &Event::Refresh);
        handle_event(
            &mut state,
            &Event::FetchCompleted(Err("Error fetching data: 500".to_string())),
        );
        assert_eq!(state.screen(), Screen::Error);

        assert_eq!(handle_event(&mut state, &Event::Retry), (true, vec![Action::Fetch]));
        assert_eq!(state.screen(), Screen::Loading);
        assert!(state.error.is_none());

        handle_event(&mut state, &Event::FetchCompleted(Ok(users(12))));
        assert_eq!(state.screen(), Screen::Success);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn quit_requests_shutdown_without_render() {
        let mut state = loaded(1);
        assert_eq!(handle_event(&mut state, &Event::Quit), (false, vec![Action::Quit]));
    }
}
