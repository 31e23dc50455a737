//! Search bar component renderer.
//!
//! A three-row box holding the typed query. The border takes the focus color
//! while keystrokes go to the box, and a "searching…" marker sits at the right
//! edge while the results still reflect an older query.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;
const STALE_MARKER: &str = "searching… ";

/// Renders the search box starting at `row`.
///
/// Returns the next available row position (row + 3).
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        Theme::fg(&theme.colors.search_bar_focused)
    } else {
        Theme::fg(&theme.colors.search_bar_border)
    };

    frame.position_cursor(row, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push_str(&border);
    frame.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push_str(Theme::reset());

    let marker = if search.stale { STALE_MARKER } else { "" };
    let caret = if search.focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(display_width(marker));
    let search_text = truncate(&format!(" Search: {}{caret}", search.query), room);
    let padding = room.saturating_sub(display_width(&search_text));

    frame.position_cursor(row + 1, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push_str(&border);
    frame.push_str("│");
    frame.push_str(&Theme::fg(&theme.colors.text_normal));
    frame.push_str(&search_text);
    frame.pad(padding);
    frame.push_str(&Theme::fg(&theme.colors.text_dim));
    frame.push_str(marker);
    frame.push_str(&border);
    frame.push_str("│");
    frame.push_str(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push_str(&border);
    frame.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push_str(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(query: &str, focused: bool, stale: bool) -> SearchBarInfo {
        SearchBarInfo {
            query: query.to_string(),
            focused,
            stale,
        }
    }

    #[test]
    fn stale_query_shows_marker() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 5, &info("gra", true, true), &theme, 60);

        assert!(frame.as_str().contains(" Search: gra▏"));
        assert!(frame.as_str().contains(STALE_MARKER));
        assert!(frame.as_str().contains(&Theme::fg(&theme.colors.search_bar_focused)));
    }

    #[test]
    fn settled_unfocused_query_has_no_marker_or_caret() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        let next = render_search_bar(&mut frame, 5, &info("gra", false, false), &theme, 60);

        assert_eq!(next, 8);
        assert!(!frame.as_str().contains("searching"));
        assert!(!frame.as_str().contains('▏'));
    }
}
