//! Header component renderer.
//!
//! Centered bold title on one row, dimmed subtitle (user count and data age)
//! on the next.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle rows starting at `row`.
///
/// Returns the next available row position (row + 2).
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push_str(Theme::bold());
    frame.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push_str(&Theme::bg(bg));
    }
    centered(frame, &header.title, cols);
    frame.push_str(Theme::reset());

    frame.position_cursor(row + 1, 1);
    frame.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(frame, &header.subtitle, cols);
    frame.push_str(Theme::reset());

    row + 2
}

fn centered(frame: &mut Frame, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    frame.pad(padding);
    frame.push_str(&text);
    frame.pad(cols.saturating_sub(padding + len));
}
