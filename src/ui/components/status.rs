//! Loading and error panels shown in place of the table.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorPanel;

/// Renders the loading line at `row`.
pub fn render_loading(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    centered_line(frame, row, "Loading users…", &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}

/// Renders the error message and the retry hint below it.
pub fn render_error(frame: &mut Frame, row: usize, panel: &ErrorPanel, theme: &Theme, cols: usize) -> usize {
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    centered_line(frame, row, &panel.message, &style, cols);
    centered_line(frame, row + 1, &panel.retry_hint, &Theme::fg(&theme.colors.text_dim), cols);
    row + 2
}

fn centered_line(frame: &mut Frame, row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    frame.position_cursor(row, 1);
    frame.push_str(style);
    frame.pad(padding);
    frame.push_str(&text);
    frame.pad(cols.saturating_sub(padding + len));
    frame.push_str(Theme::reset());
}
