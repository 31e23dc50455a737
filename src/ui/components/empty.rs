//! Empty state component renderer.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty-list message centered on `row`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = truncate(&empty.message, cols);
    let msg_len = display_width(&message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    frame.position_cursor(row, 1);
    frame.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    frame.pad(msg_padding);
    frame.push_str(&message);
    frame.pad(cols.saturating_sub(msg_padding + msg_len));
    frame.push_str(Theme::reset());
    row + 1
}
